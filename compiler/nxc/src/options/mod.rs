//! Command-line options.

use std::path::PathBuf;

use nx_diagnostic::emitter::ColorMode;
use thiserror::Error;

pub const USAGE: &str = "usage: nxc <project> <output-dir> [--color=auto|always|never] [--quiet]";

/// Options for one generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Symbol snapshot file, or a directory containing `symbols.json`.
    pub project: PathBuf,
    /// Directory receiving the generated files; created if missing.
    pub output_dir: PathBuf,
    pub color: ColorMode,
    /// Suppress progress lines.
    pub quiet: bool,
}

/// What the command line asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Generate(Options),
    Help,
    Version,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("insufficient arguments")]
    InsufficientArguments,
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("invalid value `{0}` for `--color` (expected auto, always or never)")]
    InvalidColor(String),
}

impl Command {
    /// Parse arguments, excluding the program name.
    ///
    /// `--help` and `--version` win over everything else on the line.
    pub fn parse<I, S>(args: I) -> Result<Command, UsageError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut positionals: Vec<String> = Vec::new();
        let mut color = ColorMode::Auto;
        let mut quiet = false;

        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "-h" | "--help" => return Ok(Command::Help),
                "-V" | "--version" => return Ok(Command::Version),
                "-q" | "--quiet" => quiet = true,
                _ => {
                    if let Some(value) = arg.strip_prefix("--color=") {
                        color = ColorMode::parse(value)
                            .ok_or_else(|| UsageError::InvalidColor(value.to_string()))?;
                    } else if arg.starts_with('-') && arg.len() > 1 {
                        return Err(UsageError::UnknownOption(arg.to_string()));
                    } else if positionals.len() < 2 {
                        positionals.push(arg.to_string());
                    } else {
                        return Err(UsageError::UnexpectedArgument(arg.to_string()));
                    }
                }
            }
        }

        let mut positionals = positionals.into_iter();
        let (Some(project), Some(output_dir)) = (positionals.next(), positionals.next()) else {
            return Err(UsageError::InsufficientArguments);
        };

        Ok(Command::Generate(Options {
            project: PathBuf::from(project),
            output_dir: PathBuf::from(output_dir),
            color,
            quiet,
        }))
    }
}

#[cfg(test)]
mod tests;
