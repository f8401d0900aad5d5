use super::*;

use std::fs;
use std::path::Path;

use tempfile::tempdir;

fn synchronizer(dir: &Path) -> Synchronizer {
    Synchronizer::new(
        dir.join("app.py"),
        dir.join(DEFAULT_MARKER_FILE),
        Declaration::new(DEFAULT_DECLARATION).unwrap(),
    )
}

fn version(s: &str) -> Version {
    Version::new(s).unwrap()
}

#[test]
fn test_run_replaces_declaration_and_writes_marker() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("app.py");
    fs::write(&target, "__version__ = \"0.9.0\"\nOTHER = 1\n").unwrap();

    let sync = synchronizer(dir.path());
    let report = sync.run(&version("2.3.4")).unwrap();

    assert_eq!(report.previous(), Some("0.9.0"));
    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        "__version__ = \"2.3.4\"\nOTHER = 1\n",
    );
    assert_eq!(
        fs::read_to_string(dir.path().join(DEFAULT_MARKER_FILE)).unwrap(),
        "2.3.4",
    );
}

#[test]
fn test_run_without_declaration_keeps_target_but_writes_marker() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("app.py");
    fs::write(&target, "OTHER = 1\n").unwrap();

    let sync = synchronizer(dir.path());
    let report = sync.run(&version("2.3.4")).unwrap();

    assert_eq!(report.previous(), None);
    assert_eq!(fs::read_to_string(&target).unwrap(), "OTHER = 1\n");
    assert_eq!(
        fs::read_to_string(dir.path().join(DEFAULT_MARKER_FILE)).unwrap(),
        "2.3.4",
    );
}

#[test]
fn test_run_twice_keeps_last_version() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("app.py");
    fs::write(&target, "__version__ = \"0.9.0\"\n").unwrap();

    let sync = synchronizer(dir.path());
    sync.run(&version("1.0.0")).unwrap();
    sync.run(&version("1.0.1")).unwrap();

    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        "__version__ = \"1.0.1\"\n",
    );
    assert_eq!(
        fs::read_to_string(dir.path().join(DEFAULT_MARKER_FILE)).unwrap(),
        "1.0.1",
    );
}

#[test]
fn test_run_rewrites_single_quoted_declaration_with_double_quotes() {
    let dir = tempdir().unwrap();
    let target = dir.path().join("app.py");
    fs::write(&target, "__version__ = '0.9.0'\n").unwrap();

    let sync = synchronizer(dir.path());
    sync.run(&version("1.0.0")).unwrap();

    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        "__version__ = \"1.0.0\"\n",
    );
}

#[test]
fn test_run_fails_without_target_and_skips_marker() {
    let dir = tempdir().unwrap();

    let sync = synchronizer(dir.path());
    let res = sync.run(&version("1.0.0"));

    assert!(res.is_err());
    assert!(!dir.path().join(DEFAULT_MARKER_FILE).exists());
}

#[test]
fn test_current_reads_declared_version() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("app.py"), "__version__ = \"0.9.0\"\n").unwrap();

    let sync = synchronizer(dir.path());

    assert_eq!(sync.current().unwrap(), "0.9.0");
}

#[test]
fn test_current_fails_without_declaration() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("app.py"), "OTHER = 1\n").unwrap();

    let sync = synchronizer(dir.path());

    match sync.current() {
        Err(Error::MissingDeclaration { name, .. }) => assert_eq!(name, "__version__"),
        r => panic!("unexpected result: {:?}", r),
    }
}

#[test]
fn test_marker_reads_written_content() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("app.py"), "__version__ = \"0.9.0\"\n").unwrap();

    let sync = synchronizer(dir.path());
    sync.run(&version("1.0.0")).unwrap();

    assert_eq!(sync.marker().unwrap(), "1.0.0");
}
