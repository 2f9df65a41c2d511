use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_display_with_location() {
    let diag = Diagnostic::warning("CS0168", "The variable 'e' is declared but never used")
        .with_location(Location::new("src/Foo.cs", 12, 9));

    assert_eq!(
        diag.to_string(),
        "src/Foo.cs(12,9): warning CS0168: The variable 'e' is declared but never used"
    );
}

#[test]
fn test_display_without_location() {
    let diag = Diagnostic::error("CS5001", "Program does not contain a static 'Main' method");
    assert_eq!(
        diag.to_string(),
        "error CS5001: Program does not contain a static 'Main' method"
    );
}

#[test]
fn test_severity_order() {
    assert!(Severity::Hidden < Severity::Info);
    assert!(Severity::Info < Severity::Warning);
    assert!(Severity::Warning < Severity::Error);
}

#[test]
fn test_counts_ignore_hidden_and_info() {
    let diags = vec![
        Diagnostic::new(Severity::Hidden, "IDE0005", "Using directive is unnecessary"),
        Diagnostic::new(Severity::Info, "CA1822", "Member can be made static"),
        Diagnostic::warning("CS0168", "unused"),
        Diagnostic::warning("CS0219", "assigned but never used"),
        Diagnostic::error("CS0246", "type not found"),
    ];

    let counts = DiagnosticCounts::tally(&diags);
    assert_eq!(counts, DiagnosticCounts { errors: 1, warnings: 2 });
    assert!(counts.has_errors());
}

#[test]
fn test_predicates() {
    assert!(Diagnostic::error("CS0001", "x").is_error());
    assert!(!Diagnostic::warning("CS0001", "x").is_error());
    assert!(Diagnostic::new(Severity::Hidden, "IDE0001", "x").is_hidden());
}
