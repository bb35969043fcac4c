// Command line interface module
// Handles parsing of command line arguments

use crate::app::DEFAULT_OUTPUT;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// rphoto - A minimal image viewer: open, rotate, blank canvas and save as PNG
#[derive(Parser, Debug)]
#[command(name = "rphoto")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Image to open at startup (jpg, jpeg or png)
    #[arg(value_name = "IMAGE")]
    pub image_path: Option<String>,

    /// How long to show the splash screen before the viewer starts, in milliseconds
    #[arg(long, default_value = "0")]
    pub splash_ms: u64,

    /// File written by the save command
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

impl Args {
    pub fn splash_duration(&self) -> Duration {
        Duration::from_millis(self.splash_ms)
    }
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["rphoto"]).expect("parse failed");
        assert!(args.image_path.is_none());
        assert_eq!(args.splash_duration(), Duration::ZERO);
        assert_eq!(args.output, PathBuf::from("Untitled.png"));
    }

    #[test]
    fn image_and_flags() {
        let args = Args::try_parse_from([
            "rphoto",
            "/a/b/photo.png",
            "--splash-ms",
            "3000",
            "-o",
            "out.png",
        ])
        .expect("parse failed");
        assert_eq!(args.image_path.as_deref(), Some("/a/b/photo.png"));
        assert_eq!(args.splash_duration(), Duration::from_secs(3));
        assert_eq!(args.output, PathBuf::from("out.png"));
    }
}
