use monetize_runner::{RunnerConfig, run_once};
use std::path::PathBuf;

const USAGE: &str = "\
Usage: monetize [-c <config.json>]

Fetches market data, asks the configured model for strategies and prints
the strategies with their risk assessment as JSON on stdout.

  -c, --config <PATH>   runner configuration (feed, generator, risk rules)
  -h, --help            show this text

Without a config the built-in snapshot [1.0, 2.0, 3.0] is run through the
canned generator. Log verbosity follows RUST_LOG (default: info).";

#[derive(Debug, PartialEq)]
enum Command {
    Run { config: Option<PathBuf> },
    Help,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Command, String> {
    let mut config = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-c" | "--config" => {
                let path = args
                    .next()
                    .ok_or_else(|| format!("{} expects a path", arg))?;
                config = Some(PathBuf::from(path));
            }
            other => return Err(format!("unrecognised argument '{}'", other)),
        }
    }

    Ok(Command::Run { config })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Ok(Command::Run { config: Some(path) }) => {
            log::info!("Loading configuration from {}", path.display());
            RunnerConfig::from_file(&path)?
        }
        Ok(Command::Run { config: None }) => RunnerConfig::default(),
        Err(message) => {
            eprintln!("monetize: {}\n\n{}", message, USAGE);
            std::process::exit(1);
        }
    };

    let report = run_once(&config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, String> {
        parse_args(args.iter().map(|a| a.to_string()))
    }

    #[test]
    fn test_no_arguments_runs_default() {
        assert_eq!(parse(&[]), Ok(Command::Run { config: None }));
    }

    #[test]
    fn test_config_path() {
        let expected = Ok(Command::Run {
            config: Some(PathBuf::from("monetize.json")),
        });
        assert_eq!(parse(&["--config", "monetize.json"]), expected);
        assert_eq!(parse(&["-c", "monetize.json"]), expected);
    }

    #[test]
    fn test_help_wins_over_other_arguments() {
        assert_eq!(parse(&["-c", "monetize.json", "-h"]), Ok(Command::Help));
        assert_eq!(parse(&["--help"]), Ok(Command::Help));
    }

    #[test]
    fn test_config_without_path_is_an_error() {
        let err = parse(&["--config"]).unwrap_err();
        assert!(err.contains("--config"));
    }

    #[test]
    fn test_unknown_argument_is_an_error() {
        let err = parse(&["--verbose"]).unwrap_err();
        assert!(err.contains("--verbose"));
    }
}
