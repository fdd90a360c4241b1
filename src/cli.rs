//! Command-line arguments for the terminal binary.

use anyhow::{anyhow, Result};

use crate::core::GameConfig;

pub const USAGE: &str = "\
usage: cyber-tetris [--seed N] [--cols N] [--rows N]

  --seed N   reproducible piece sequence (default: random)
  --cols N   board width, 4..=40 (default: 10)
  --rows N   board height, 4..=40 (default: 20)
  -h, --help print this help";

/// What the binary was asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliCommand {
    Play(GameConfig),
    Help,
}

/// Parse arguments (without the program name) into a validated command.
pub fn parse_args(args: &[String]) -> Result<CliCommand> {
    let mut config = GameConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(CliCommand::Help),
            "--seed" => {
                i += 1;
                config.seed = Some(parse_value(args.get(i), "--seed")?);
            }
            "--cols" => {
                i += 1;
                config.cols = parse_value(args.get(i), "--cols")?;
            }
            "--rows" => {
                i += 1;
                config.rows = parse_value(args.get(i), "--rows")?;
            }
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }

    config.validate()?;
    Ok(CliCommand::Play(config))
}

fn parse_value<T: std::str::FromStr>(value: Option<&String>, flag: &str) -> Result<T> {
    let v = value.ok_or_else(|| anyhow!("missing value for {}", flag))?;
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}
