use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use serde_json::{json, Value};

const LEGACY: &str =
    "/modules/spack/legacy-microarch/share/spack/modules/linux-ubuntu20.04-haswell";

/// Spider document containing every directory of the built-in hidden list.
fn spider_doc() -> Value {
    let hidden_dirs = [
        "/modules/spack/legacy-microarch/share/spack/modules/linux-ubuntu20.04-cascadelake",
        LEGACY,
        "/modules/spack/legacy-microarch/share/spack/modules/linux-ubuntu20.04-icelake",
        "/modules/spack/legacy-microarch/share/spack/modules/linux-ubuntu20.04-skylake_avx512",
        "/modules/spack/legacy-microarch/share/spack/modules/linux-ubuntu20.04-x86_64",
        "/modules/spack/legacy-microarch/share/spack/modules/linux-ubuntu20.04-zen",
        "/modules/spack/legacy-microarch/share/spack/modules/linux-ubuntu20.04-zen2",
        "/modules/uri_modulefiles/all",
        "/modules/uri_modulefiles",
    ];
    let mut legacy = serde_json::Map::new();
    for dir in hidden_dirs {
        legacy.insert(
            format!("{dir}/gcc/8.0.lua"),
            json!({"mpath": dir, "Version": "8.0", "hidden": false}),
        );
    }
    json!({
        "linux-ubuntu20.04-x86_64": {
            "gcc": {
                "/modules/spack/core/gcc/9.1.lua":
                    {"mpath": "/modules/spack/core", "Version": "9.1", "hidden": false},
                "/modules/spack/core/gcc/latest.lua":
                    {"mpath": "/modules/spack/core", "Version": "latest", "hidden": false}
            }
        },
        "legacy": {"gcc": Value::Object(legacy)}
    })
}

fn run_with_stdin(cwd: &Path, stdin: &[u8]) -> Output {
    let bin = env!("CARGO_BIN_EXE_modhier");
    let mut child = Command::new(bin)
        .current_dir(cwd)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn modhier");
    child
        .stdin
        .take()
        .expect("child stdin")
        .write_all(stdin)
        .expect("write stdin");
    child.wait_with_output().expect("wait modhier")
}

fn read_json(path: &Path) -> Value {
    serde_json::from_slice(&std::fs::read(path).expect("read output")).expect("parse output")
}

#[test]
fn writes_both_files_and_reports_on_stderr_only() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = serde_json::to_vec(&spider_doc()).expect("encode input");

    let out = run_with_stdin(tmp.path(), &input);
    assert!(
        out.status.success(),
        "status={}\nstderr={}",
        out.status,
        String::from_utf8_lossy(&out.stderr)
    );
    assert!(out.stdout.is_empty(), "stdout must stay empty");
    assert_eq!(
        String::from_utf8_lossy(&out.stderr).trim_end(),
        "files created in your current working directory."
    );

    assert_eq!(
        read_json(&tmp.path().join("hierarchy.json")),
        json!({"linux-ubuntu20.04-x86_64": {"/modules/spack/core": {"gcc": "9.1"}}})
    );
    let hidden = read_json(&tmp.path().join("hidden-hierarchy.json"));
    assert_eq!(
        hidden
            .get("legacy")
            .and_then(|d| d.get(LEGACY))
            .and_then(|n| n.get("gcc")),
        Some(&json!("8.0"))
    );
    assert_eq!(
        hidden
            .get("legacy")
            .and_then(|d| d.as_object())
            .map(|d| d.len()),
        Some(9)
    );
}

#[test]
fn invalid_json_fails_with_parse_exit_code() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = run_with_stdin(tmp.path(), b"{\"x86_64\": ");
    assert_eq!(out.status.code(), Some(4));
    assert!(String::from_utf8_lossy(&out.stderr).contains("parse spider JSON"));
    assert!(!tmp.path().join("hierarchy.json").exists());
    assert!(!tmp.path().join("hidden-hierarchy.json").exists());
}

#[test]
fn missing_record_key_fails_with_structural_exit_code() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = br#"{"x86_64": {"gcc": {"/m/gcc/9.1.lua": {"mpath": "/m", "hidden": false}}}}"#;
    let out = run_with_stdin(tmp.path(), input);
    assert_eq!(out.status.code(), Some(5));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Version"));
    assert!(!tmp.path().join("hierarchy.json").exists());
}

#[test]
fn stale_hidden_directory_fails_before_writing() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = serde_json::to_vec(&json!({
        "x86_64": {
            "gcc": {
                "/m/core/gcc/9.1.lua": {"mpath": "/m/core", "Version": "9.1", "hidden": false}
            }
        }
    }))
    .expect("encode input");

    let out = run_with_stdin(tmp.path(), &input);
    assert_eq!(out.status.code(), Some(6));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("linux-ubuntu20.04-cascadelake"), "{stderr}");
    assert!(!tmp.path().join("hierarchy.json").exists());
    assert!(!tmp.path().join("hidden-hierarchy.json").exists());
}

#[test]
fn empty_document_fails_on_builtin_hidden_list() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = run_with_stdin(tmp.path(), b"{}");
    assert_eq!(out.status.code(), Some(6));
}

#[test]
fn rejects_positional_arguments() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let bin = env!("CARGO_BIN_EXE_modhier");
    let out = Command::new(bin)
        .current_dir(tmp.path())
        .arg("input.json")
        .stdin(Stdio::null())
        .output()
        .expect("run modhier with argument");
    assert_eq!(out.status.code(), Some(2));
}
