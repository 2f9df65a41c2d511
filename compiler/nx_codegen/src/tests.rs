use nx_model::{AssemblyIdentity, ModelBuilder, NoopObserver, Observer, Version};
use pretty_assertions::assert_eq;

use super::*;
use crate::test_helpers::foo_model;

#[derive(Default)]
struct Events(Vec<String>);

impl Observer for Events {
    fn begin(&mut self, title: &str) {
        self.0.push(format!("+{title}"));
    }
    fn end(&mut self, title: &str) {
        self.0.push(format!("-{title}"));
    }
}

#[test]
fn test_generate_is_idempotent() {
    let model = foo_model();
    let first = generate(&model, &mut NoopObserver).unwrap();
    let second = generate(&model, &mut NoopObserver).unwrap();

    assert_eq!(first, second);
    for artifact in Artifact::ALL {
        assert!(!first.get(artifact).is_empty(), "{artifact:?}");
    }
}

#[test]
fn test_generate_reports_phases() {
    let model = foo_model();
    let mut events = Events::default();
    generate(&model, &mut events).unwrap();

    assert_eq!(
        events.0,
        [
            "+validate exports",
            "-validate exports",
            "+generate header",
            "-generate header",
            "+generate source",
            "-generate source",
            "+generate CMakeLists.txt",
            "-generate CMakeLists.txt",
        ]
    );
}

#[test]
fn test_generate_stops_on_invalid_model() {
    let model = ModelBuilder::new(AssemblyIdentity::new("Demo", Version::default())).finish();
    let mut events = Events::default();

    assert!(matches!(
        generate(&model, &mut events),
        Err(CodegenError::MissingDeallocationHook { .. })
    ));
    assert_eq!(events.0, ["+validate exports", "-validate exports"]);
}

#[test]
fn test_artifact_file_names() {
    let names: Vec<_> = Artifact::ALL.iter().map(|a| a.file_name()).collect();
    assert_eq!(names, ["lib.h", "lib.cxx", "CMakeLists.txt"]);
}
