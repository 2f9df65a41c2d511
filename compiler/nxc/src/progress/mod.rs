//! Progress reporting for the command line.
//!
//! Finished phases are printed one per line with the time they took:
//!
//! ```text
//!  812.0us: read demo.json
//!    3.4ms: parse demo.json
//! ```

use std::io::Write;
use std::time::{Duration, Instant};

use nx_model::Observer;

/// Observer printing each phase when it ends.
pub struct ProgressReporter<W: Write> {
    writer: W,
    /// Phases that have begun but not ended, innermost last.
    open: Vec<(String, Instant)>,
}

impl<W: Write> ProgressReporter<W> {
    pub fn new(writer: W) -> Self {
        ProgressReporter {
            writer,
            open: Vec::new(),
        }
    }

    /// Consume the reporter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn report(&mut self, elapsed: Duration, title: &str) {
        let _ = writeln!(self.writer, "{:>8}: {title}", format_elapsed(elapsed));
        let _ = self.writer.flush();
    }
}

impl<W: Write> Observer for ProgressReporter<W> {
    fn begin(&mut self, title: &str) {
        self.open.push((title.to_string(), Instant::now()));
    }

    fn end(&mut self, title: &str) {
        let Some(index) = self.open.iter().rposition(|(open, _)| open == title) else {
            return;
        };
        let (title, started) = self.open.remove(index);
        self.report(started.elapsed(), &title);
    }
}

/// Format a duration in the largest unit it fills, with one decimal:
/// `d`, `h`, `m`, `s`, `ms`, `us`, `ns`.
pub fn format_elapsed(elapsed: Duration) -> String {
    const UNITS: [(&str, f64); 6] = [
        ("d", 86_400e9),
        ("h", 3_600e9),
        ("m", 60e9),
        ("s", 1e9),
        ("ms", 1e6),
        ("us", 1e3),
    ];

    #[expect(
        clippy::cast_precision_loss,
        reason = "display only; durations are far below 2^52 ns"
    )]
    let nanos = elapsed.as_nanos() as f64;

    for (unit, scale) in UNITS {
        if nanos >= scale {
            return format!("{:.1}{unit}", nanos / scale);
        }
    }
    format!("{nanos:.1}ns")
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
