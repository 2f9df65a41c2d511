//! Progress observation for long-running phases.
//!
//! Loading a project and emitting artifacts report named phases to an
//! [`Observer`]. Observation is optional: [`NoopObserver`] discards
//! everything and generation never depends on what an observer does.

/// Receives phase boundaries. Calls nest: every `begin` is matched by an
/// `end` with the same title, innermost first.
pub trait Observer {
    fn begin(&mut self, title: &str);
    fn end(&mut self, title: &str);
}

/// Observer that ignores every event.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn begin(&mut self, _title: &str) {}
    fn end(&mut self, _title: &str) {}
}

/// Run `phase` between `begin(title)` and `end(title)`.
///
/// `end` is reported whether or not the phase succeeds.
pub fn observe<T>(observer: &mut dyn Observer, title: &str, phase: impl FnOnce() -> T) -> T {
    observer.begin(title);
    let result = phase();
    observer.end(title);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl Observer for Recorder {
        fn begin(&mut self, title: &str) {
            self.0.push(format!("begin {title}"));
        }
        fn end(&mut self, title: &str) {
            self.0.push(format!("end {title}"));
        }
    }

    #[test]
    fn test_observe_brackets_phase() {
        let mut recorder = Recorder::default();
        let value = observe(&mut recorder, "outer", || 7);
        let failed: Result<(), &str> = observe(&mut recorder, "fails", || Err("boom"));

        assert_eq!(value, 7);
        assert!(failed.is_err());
        assert_eq!(
            recorder.0,
            vec!["begin outer", "end outer", "begin fails", "end fails"]
        );
    }
}
