use std::path::PathBuf;

use nx_diagnostic::emitter::ColorMode;
use pretty_assertions::assert_eq;

use super::*;

fn generate(project: &str, output_dir: &str, color: ColorMode, quiet: bool) -> Command {
    Command::Generate(Options {
        project: PathBuf::from(project),
        output_dir: PathBuf::from(output_dir),
        color,
        quiet,
    })
}

#[test]
fn test_two_positionals() {
    assert_eq!(
        Command::parse(["demo.json", "out"]),
        Ok(generate("demo.json", "out", ColorMode::Auto, false))
    );
}

#[test]
fn test_flags_anywhere() {
    assert_eq!(
        Command::parse(["--quiet", "demo.json", "--color=never", "out"]),
        Ok(generate("demo.json", "out", ColorMode::Never, true))
    );
    assert_eq!(
        Command::parse(["demo.json", "out", "-q", "--color=always"]),
        Ok(generate("demo.json", "out", ColorMode::Always, true))
    );
}

#[test]
fn test_insufficient_arguments() {
    assert_eq!(
        Command::parse(Vec::<String>::new()),
        Err(UsageError::InsufficientArguments)
    );
    assert_eq!(
        Command::parse(["demo.json", "--quiet"]),
        Err(UsageError::InsufficientArguments)
    );
    assert_eq!(
        UsageError::InsufficientArguments.to_string(),
        "insufficient arguments"
    );
}

#[test]
fn test_help_and_version() {
    assert_eq!(Command::parse(["--help"]), Ok(Command::Help));
    assert_eq!(Command::parse(["demo.json", "-h"]), Ok(Command::Help));
    assert_eq!(Command::parse(["--version", "a", "b"]), Ok(Command::Version));
}

#[test]
fn test_rejections() {
    assert_eq!(
        Command::parse(["a", "b", "c"]),
        Err(UsageError::UnexpectedArgument("c".to_string()))
    );
    assert_eq!(
        Command::parse(["a", "b", "--verbose"]),
        Err(UsageError::UnknownOption("--verbose".to_string()))
    );
    assert_eq!(
        Command::parse(["a", "b", "--color=sometimes"]),
        Err(UsageError::InvalidColor("sometimes".to_string()))
    );
}

#[test]
fn test_dash_is_positional() {
    assert_eq!(
        Command::parse(["-", "out"]),
        Ok(generate("-", "out", ColorMode::Auto, false))
    );
}
