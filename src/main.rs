// rphoto - A minimal image viewer
// Opens, rotates and saves images from a line-oriented command shell

mod app;
mod cli;
mod error;
mod image_loader;
mod picker;
mod rotation;
mod shell;

use anyhow::Result;
use log::info;
use std::io;
use std::thread;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args = cli::parse_args();

    // Keep the splash visible before the viewer takes over
    if !args.splash_duration().is_zero() {
        info!("Showing splash for {} ms", args.splash_ms);
        thread::sleep(args.splash_duration());
    }

    info!("Starting rphoto, saving to {}", args.output.display());
    let controller = app::ImageController::new(args.output);

    let interactive = atty::is(atty::Stream::Stdin);
    let stdin = io::stdin();
    let mut shell = shell::Shell::new(controller, stdin.lock(), io::stdout(), interactive);

    if let Some(ref path) = args.image_path {
        shell.open_initial(path)?;
    }

    shell.run()
}
