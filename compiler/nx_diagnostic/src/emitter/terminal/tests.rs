use super::*;
use crate::Location;
use pretty_assertions::assert_eq;

fn sample() -> Vec<Diagnostic> {
    vec![
        Diagnostic::new(Severity::Hidden, "IDE0005", "Using directive is unnecessary"),
        Diagnostic::warning("CS0168", "The variable 'e' is declared but never used")
            .with_location(Location::new("Foo.cs", 3, 5)),
        Diagnostic::error("CS0246", "The type or namespace name 'Baz' could not be found")
            .with_location(Location::new("Foo.cs", 7, 12)),
    ]
}

fn render(mode: ColorMode, diags: &[Diagnostic]) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), mode, false);
    emitter.emit_all(diags);
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap()
}

#[test]
fn test_emit_all_skips_hidden() {
    let text = render(ColorMode::Never, &sample());
    assert_eq!(
        text,
        "Foo.cs(3,5): warning CS0168: The variable 'e' is declared but never used\n\
         Foo.cs(7,12): error CS0246: The type or namespace name 'Baz' could not be found\n"
    );
}

#[test]
fn test_plain_output_matches_display() {
    let diag = Diagnostic::error("CS5001", "no entry point");
    let text = render(ColorMode::Never, std::slice::from_ref(&diag));
    assert_eq!(text, format!("{diag}\n"));
}

#[test]
fn test_colored_output_has_escape_codes() {
    let text = render(ColorMode::Always, &sample());
    assert!(text.contains("\x1b[1;31merror\x1b[0m"));
    assert!(text.contains("\x1b[1;33mwarning\x1b[0m"));
    assert!(!text.contains("IDE0005"));
}

#[test]
fn test_auto_mode_follows_tty() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn test_parse_color_mode() {
    assert_eq!(ColorMode::parse("auto"), Some(ColorMode::Auto));
    assert_eq!(ColorMode::parse("always"), Some(ColorMode::Always));
    assert_eq!(ColorMode::parse("never"), Some(ColorMode::Never));
    assert_eq!(ColorMode::parse("sometimes"), None);
}

#[test]
fn test_summary() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_summary(1, 2);
    emitter.emit_summary(0, 1);
    emitter.emit_summary(0, 0);
    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert_eq!(
        text,
        "error: 1 error, 2 warnings reported by the analyzer\n\
         warning: 1 warning reported by the analyzer\n"
    );
}
