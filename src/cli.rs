//! Command line parsing

use anyhow::{bail, Result};
use std::path::PathBuf;

pub const USAGE: &str = "\
ticklist - terminal client for a to-do list service

USAGE:
    ticklist [OPTIONS]

OPTIONS:
    --config <path>       Load configuration from <path>
    --api-url <url>       Override server.base_url (also: TICKLIST_API_URL)
    --generate-config     Write the default configuration file and exit
    -h, --help            Print this help and exit
    -V, --version         Print the version and exit
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run,
    GenerateConfig,
    Help,
    Version,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub command: Command,
    pub config_path: Option<PathBuf>,
    pub api_url: Option<String>,
}

impl CliArgs {
    /// Parse arguments (without the program name). Options taking a value
    /// accept both `--opt value` and `--opt=value`.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Self {
            command: Command::Run,
            config_path: None,
            api_url: None,
        };
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let (name, inline) = match arg.split_once('=') {
                Some((name, value)) if name.starts_with("--") => (name.to_string(), Some(value.to_string())),
                _ => (arg.clone(), None),
            };

            match name.as_str() {
                "--config" => {
                    let value = inline.or_else(|| args.next());
                    match value {
                        Some(path) if !path.is_empty() => parsed.config_path = Some(PathBuf::from(path)),
                        _ => bail!("--config needs a file path"),
                    }
                }
                "--api-url" => {
                    let value = inline.or_else(|| args.next());
                    match value {
                        Some(url) if !url.is_empty() => parsed.api_url = Some(url),
                        _ => bail!("--api-url needs a URL"),
                    }
                }
                "--generate-config" => parsed.command = Command::GenerateConfig,
                "-h" | "--help" => return Ok(Self { command: Command::Help, ..parsed }),
                "-V" | "--version" => return Ok(Self { command: Command::Version, ..parsed }),
                _ => bail!("Unknown argument '{}'\n\n{}", arg, USAGE),
            }
        }

        Ok(parsed)
    }
}
