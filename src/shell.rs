// Shell module
// Line-oriented command bindings and status display for the controller

use crate::app::{ImageController, Property};
use crate::error::ControllerError;
use crate::picker::{self, FilePicker, FileSelection, PromptPicker};
use anyhow::{Context, Result};
use log::{debug, info};
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

const HELP: &str = "\
Commands:
  new          create a blank canvas
  open [PATH]  open an image (asks for a path if none is given)
  rotate       rotate 90 degrees clockwise
  close        close the current image
  save         save the current image as PNG
  info         show the current image
  help         show this help
  quit         exit";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New,
    Open(Option<String>),
    Rotate,
    Close,
    Save,
    Info,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Parse a command line typed by the user
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "" => Command::Empty,
        "new" | "n" => Command::New,
        "open" | "o" => Command::Open((!rest.is_empty()).then(|| rest.to_string())),
        "rotate" | "r" => Command::Rotate,
        "close" | "c" => Command::Close,
        "save" | "s" => Command::Save,
        "info" | "i" => Command::Info,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

/// Interactive front end driving an [`ImageController`]
pub struct Shell<R, W> {
    controller: ImageController,
    input: R,
    output: W,
    /// Properties changed since the status was last shown
    pending: Rc<RefCell<Vec<Property>>>,
    prompt: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(mut controller: ImageController, input: R, output: W, prompt: bool) -> Self {
        let pending = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&pending);
        controller.subscribe(move |property| {
            debug!("{} changed", property);
            sink.borrow_mut().push(property);
        });

        Self {
            controller,
            input,
            output,
            pending,
            prompt,
        }
    }

    /// Open a path given on the command line before the loop starts
    pub fn open_initial(&mut self, path: &str) -> Result<()> {
        self.open(picker::filter_selection(path))?;
        self.show_changes()
    }

    /// Read and execute commands until `quit` or end of input
    pub fn run(&mut self) -> Result<()> {
        let mut line = String::new();
        loop {
            if self.prompt {
                write!(self.output, "> ")?;
                self.output.flush()?;
            }

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read command")?;
            if read == 0 {
                debug!("End of input");
                break;
            }

            let command = parse_command(&line);
            if command == Command::Quit {
                break;
            }
            self.execute(command)?;
            self.show_changes()?;
        }

        info!("Shell finished");
        Ok(())
    }

    fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::New => self.controller.create_blank(),
            Command::Open(Some(path)) => self.open(picker::filter_selection(&path))?,
            Command::Open(None) => {
                let selection = PromptPicker::new(&mut self.input, &mut self.output).pick()?;
                self.open(selection)?;
            }
            Command::Rotate => {
                let result = self.controller.rotate();
                self.report(result)?;
            }
            Command::Close => self.controller.close(),
            Command::Save => {
                let result = self.controller.save_to_disk();
                if result.is_ok() {
                    writeln!(self.output, "Saved {}", self.controller.output_path().display())?;
                }
                self.report(result)?;
            }
            Command::Info => self.show_info()?,
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Unknown(word) => {
                writeln!(self.output, "Unknown command: {} (type 'help')", word)?
            }
            Command::Empty | Command::Quit => {}
        }
        Ok(())
    }

    fn open(&mut self, selection: FileSelection) -> Result<()> {
        let result = self.controller.open_from_disk(selection);
        self.report(result)
    }

    /// Show a failed operation to the user; the session keeps going
    fn report(&mut self, result: Result<(), ControllerError>) -> Result<()> {
        if let Err(e) = result {
            writeln!(self.output, "Error: {}", e.user_message())?;
        }
        Ok(())
    }

    /// Refresh the parts of the status that changed
    fn show_changes(&mut self) -> Result<()> {
        let changed: Vec<Property> = self.pending.borrow_mut().drain(..).collect();
        if changed.contains(&Property::FileName) {
            let name = self.controller.file_name().unwrap_or("-");
            writeln!(self.output, "File: {}", name)?;
        }
        if changed.contains(&Property::Image) {
            self.show_image_line()?;
        }
        Ok(())
    }

    fn show_info(&mut self) -> Result<()> {
        let name = self.controller.file_name().unwrap_or("-");
        writeln!(self.output, "File: {}", name)?;
        if let Some(source) = self.controller.source() {
            writeln!(self.output, "Source: {}", source)?;
        }
        self.show_image_line()
    }

    fn show_image_line(&mut self) -> Result<()> {
        match self.controller.image() {
            Some(img) => writeln!(
                self.output,
                "Image: {}x{} rotated {}°",
                img.width(),
                img.height(),
                self.controller.rotation().degrees()
            )?,
            None => writeln!(self.output, "Image: none")?,
        }
        Ok(())
    }
}
