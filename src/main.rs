mod audio;
mod cli;
mod input;
mod logging;
mod runner;
mod ui;

use cli::Command;
use flappy::build_info;
use log::{info, warn};

fn main() -> std::io::Result<()> {
    let options = match cli::parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Version) => {
            println!("{}", build_info::version_line());
            std::process::exit(0);
        }
        Ok(Command::Help) => {
            println!("{}", cli::USAGE);
            std::process::exit(0);
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'flappy --help' for usage.");
            std::process::exit(1);
        }
    };

    // Logging is optional: the game runs fine without a log file
    match options.log_file.clone().or_else(logging::default_log_path) {
        Some(path) => {
            if let Err(e) = logging::init(&path) {
                eprintln!("Logging disabled ({}): {}", path.display(), e);
            }
        }
        None => eprintln!("Logging disabled: no data directory"),
    }
    info!("{}", build_info::version_line());

    let state = runner::run(&options).inspect_err(|e| warn!("terminal error: {}", e))?;

    println!("Goodbye! Final score: {}", state.score);
    Ok(())
}
