use std::time::Duration;

use nx_model::Observer;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_format_elapsed_units() {
    assert_eq!(format_elapsed(Duration::from_nanos(0)), "0.0ns");
    assert_eq!(format_elapsed(Duration::from_nanos(999)), "999.0ns");
    assert_eq!(format_elapsed(Duration::from_nanos(1_500)), "1.5us");
    assert_eq!(format_elapsed(Duration::from_micros(2_300)), "2.3ms");
    assert_eq!(format_elapsed(Duration::from_millis(1_000)), "1.0s");
    assert_eq!(format_elapsed(Duration::from_secs(90)), "1.5m");
    assert_eq!(format_elapsed(Duration::from_secs(5_400)), "1.5h");
    assert_eq!(format_elapsed(Duration::from_secs(2 * 86_400)), "2.0d");
}

#[test]
fn test_reporter_prints_finished_phases() {
    let mut reporter = ProgressReporter::new(Vec::new());
    reporter.begin("outer");
    reporter.begin("inner");
    reporter.end("inner");
    reporter.end("outer");
    reporter.end("never began");

    let output = String::from_utf8(reporter.into_inner()).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(": inner"));
    assert!(lines[1].ends_with(": outer"));
    // Elapsed time is right-aligned in eight columns.
    assert!(lines.iter().all(|line| line.find(": ") == Some(8)));
}
