// File picker module
// Lets the user choose which image to open

use crate::image_loader::{self, SUPPORTED_EXTENSIONS};
use anyhow::{Context, Result};
use log::warn;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Title shown when asking for a file
pub const PICKER_TITLE: &str = "Select an image";

/// Outcome of a file selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSelection {
    Cancelled,
    Path(PathBuf),
}

/// Source of file selections
pub trait FilePicker {
    fn pick(&mut self) -> Result<FileSelection>;
}

/// Asks for a path on a line-oriented terminal.
///
/// An empty line or end of input cancels. Paths without a supported
/// extension are refused the way a filtered dialog would hide them.
pub struct PromptPicker<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptPicker<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> FilePicker for PromptPicker<R, W> {
    fn pick(&mut self) -> Result<FileSelection> {
        write!(
            self.output,
            "{} ({}): ",
            PICKER_TITLE,
            SUPPORTED_EXTENSIONS.join(", ")
        )?;
        self.output.flush()?;

        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("Failed to read file selection")?;
        Ok(filter_selection(line.trim()))
    }
}

/// Turn a typed path into a selection, applying the extension filter
pub fn filter_selection(raw: &str) -> FileSelection {
    if raw.is_empty() {
        return FileSelection::Cancelled;
    }

    let path = PathBuf::from(raw);
    if image_loader::is_supported(&path) {
        FileSelection::Path(path)
    } else {
        warn!("Unsupported file type: {}", path.display());
        FileSelection::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_returns_typed_path() {
        let mut out = Vec::new();
        let mut picker = PromptPicker::new(Cursor::new("/a/b/photo.png\n"), &mut out);

        let selection = picker.pick().expect("pick failed");

        assert_eq!(selection, FileSelection::Path(PathBuf::from("/a/b/photo.png")));
        let prompt = String::from_utf8(out).expect("prompt should be utf-8");
        assert!(prompt.starts_with("Select an image (jpg, jpeg, png)"));
    }

    #[test]
    fn empty_line_or_eof_cancels() {
        let mut picker = PromptPicker::new(Cursor::new("\n"), Vec::new());
        assert_eq!(picker.pick().expect("pick failed"), FileSelection::Cancelled);

        let mut picker = PromptPicker::new(Cursor::new(""), Vec::new());
        assert_eq!(picker.pick().expect("pick failed"), FileSelection::Cancelled);
    }

    #[test]
    fn unsupported_extension_cancels() {
        assert_eq!(filter_selection("clip.gif"), FileSelection::Cancelled);
        assert_eq!(
            filter_selection("shot.JPG"),
            FileSelection::Path(PathBuf::from("shot.JPG"))
        );
    }
}
