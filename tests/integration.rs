use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_tagdoc")));
    cmd.env_remove("TAGDOC_FORMAT")
        .env_remove("TAGDOC_CODE_LANG")
        .env_remove("RUST_LOG");
    cmd
}

const LISTING: &str = r#"[
    {"name": "geometry", "kind": "module", "docstring": "Shapes and sizes."},
    {
        "name": "area",
        "kind": "function",
        "docstring": "Computes an area.\n\n@param w width\n@param h height\n@returns w times h\n@example\narea(2, 3)"
    },
    {"name": "_helper", "docstring": "@private"},
    {"name": "broken", "docstring": "@throws [Unclosed"},
    {"name": "undocumented", "kind": "property", "docstring": null}
]"#;

fn write_listing(dir: &TempDir, name: &str, body: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path.to_string_lossy().into_owned()
}

// -- stdin mode --

#[test]
fn stdin_mode_renders_markdown() {
    cmd()
        .write_stdin("Adds numbers.\n\n@param a left\n@returns the sum\n")
        .assert()
        .success()
        .stdout(
            "> Adds numbers.\n\n|Parameter |Description |\n|---|---|\n|`a` |left |\n\n**Returns**: the sum\n",
        );
}

#[test]
fn stdin_mode_json() {
    let assert = cmd()
        .args(["-f", "json"])
        .write_stdin("@deprecated\n@throws [E] bad")
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["deprecated"], true);
    assert_eq!(value["throws"][0]["type"], "E");
}

#[test]
fn format_from_environment() {
    cmd()
        .env("TAGDOC_FORMAT", "json")
        .write_stdin("@since 1.0")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"since\": \"1.0\""));
}

#[test]
fn code_lang_sets_fence() {
    cmd()
        .args(["--code-lang", "python"])
        .write_stdin("@example\nprint(1)")
        .assert()
        .success()
        .stdout(predicate::str::contains("```python\nprint(1)\n```"));
}

#[test]
fn stdin_malformed_tag_fails() {
    cmd()
        .write_stdin("@throws [NoClose")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed @throws tag on line 0"));
}

#[test]
fn unknown_tags_warned_on_request() {
    cmd()
        .arg("--warn-unknown")
        .write_stdin("Text\n@parm x typo")
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown tag").and(predicate::str::contains("@parm")));
}

#[test]
fn unknown_format_fails() {
    cmd()
        .args(["-f", "html"])
        .write_stdin("text")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format: html"));
}

// -- file mode --

#[test]
fn file_mode_writes_page_per_listing() {
    let input = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let listing = write_listing(&input, "geometry.json", LISTING);

    cmd()
        .args(["-o", out.path().to_str().unwrap()])
        .arg(&listing)
        .assert()
        .success();

    let page = fs::read_to_string(out.path().join("geometry.md")).unwrap();
    assert!(page.starts_with("## Index\n\n* [geometry](#geometry)\n* [area](#area)\n"));
    assert!(page.contains("### area\n\n_function_\n\n> Computes an area."));
    assert!(page.contains("|`h` |height |"));
    assert!(page.contains("**Returns**: w times h"));
    assert!(page.contains("```\narea(2, 3)\n```"));
    assert!(page.contains("### undocumented\n\n_property_"));
    assert!(!page.contains("_helper"));
    assert!(!page.contains("### broken"));
}

#[test]
fn file_mode_show_private() {
    let input = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let listing = write_listing(&input, "geometry.json", LISTING);

    cmd()
        .args(["--show-private", "-o", out.path().to_str().unwrap()])
        .arg(&listing)
        .assert()
        .success();

    let page = fs::read_to_string(out.path().join("geometry.md")).unwrap();
    assert!(page.contains("### _helper"));
}

#[test]
fn file_mode_json() {
    let input = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let listing = write_listing(&input, "geometry.json", LISTING);

    cmd()
        .args(["-f", "json", "-o", out.path().to_str().unwrap()])
        .arg(&listing)
        .assert()
        .success();

    let page = fs::read_to_string(out.path().join("geometry.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&page).unwrap();
    let names: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["geometry", "area", "_helper", "undocumented"]);
    assert_eq!(value[2]["docstring"]["private"], true);
    assert_eq!(value[1]["docstring"]["parameters"][0]["name"], "w");
}

#[test]
fn file_mode_scans_directory() {
    let input = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_listing(&input, "one.json", r#"{"name": "one", "docstring": "First."}"#);
    write_listing(&input, "two.json", r#"[{"name": "two", "docstring": "Second."}]"#);
    write_listing(&input, "readme.txt", "ignored");

    cmd()
        .args(["-o", out.path().to_str().unwrap()])
        .arg(input.path())
        .assert()
        .success();

    assert!(out.path().join("one.md").exists());
    assert!(out.path().join("two.md").exists());
    assert!(!out.path().join("readme.md").exists());
}

#[test]
fn file_mode_glob() {
    let input = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_listing(&input, "a.json", r#"{"name": "a"}"#);
    write_listing(&input, "b.json", r#"{"name": "b"}"#);
    let pattern = format!("{}/*.json", input.path().display());

    cmd()
        .args(["-o", out.path().to_str().unwrap()])
        .arg(&pattern)
        .assert()
        .success();

    assert!(out.path().join("a.md").exists());
    assert!(out.path().join("b.md").exists());
}

#[test]
fn file_mode_skips_invalid_listing() {
    let input = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let bad = write_listing(&input, "bad.json", "{ not json");
    let good = write_listing(&input, "good.json", r#"{"name": "good"}"#);

    cmd()
        .args(["-o", out.path().to_str().unwrap()])
        .arg(&bad)
        .arg(&good)
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping"));

    assert!(!out.path().join("bad.md").exists());
    assert!(out.path().join("good.md").exists());
}

#[test]
fn file_mode_logs_skipped_unit() {
    let input = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let listing = write_listing(&input, "geometry.json", LISTING);

    cmd()
        .args(["-o", out.path().to_str().unwrap()])
        .arg(&listing)
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping unit").and(predicate::str::contains("broken")));
}

#[test]
fn file_mode_requires_output() {
    cmd()
        .arg("whatever.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output is required"));
}

#[test]
fn file_mode_warns_on_empty_glob() {
    let out = TempDir::new().unwrap();
    let input = TempDir::new().unwrap();
    let pattern = format!("{}/*.json", input.path().display());

    cmd()
        .args(["-o", out.path().to_str().unwrap()])
        .arg(&pattern)
        .assert()
        .success()
        .stderr(predicate::str::contains("no files matched"));
}
