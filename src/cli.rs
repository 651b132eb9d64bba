//! Command-line arguments.

use std::path::PathBuf;

pub const USAGE: &str = "\
Flappy - tap to fly between the pipes

Usage: flappy [options]

Options:
  --seed <n>      Use a fixed seed for pipe placement
  --bell          Ring the terminal bell on collisions
  --log <path>    Write the log to <path> instead of the default location
  --version       Show version information
  --help          Show this help message

Controls:
  Left click / Space / Up / Enter   Flap
  Click the button or press r       Restart after game over
  q / Esc / Ctrl-C                  Quit";

/// Settings for a game session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub seed: Option<u64>,
    pub bell: bool,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Options),
    Version,
    Help,
}

/// Parse the arguments following the program name.
pub fn parse_args<I>(args: I) -> Result<Command, String>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-v" => return Ok(Command::Version),
            "--bell" => options.bell = true,
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                let seed = value
                    .parse()
                    .map_err(|_| format!("Invalid seed: {}", value))?;
                options.seed = Some(seed);
            }
            "--log" => {
                let value = args.next().ok_or("--log needs a path")?;
                options.log_file = Some(PathBuf::from(value));
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(Command::Run(options))
}
