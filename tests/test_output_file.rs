mod helpers;

use helpers::{path_str, Encoding, TestBundle};
use serde_json::Value;
use std::fs;

#[test]
fn test_full_definition_written_to_directory() {
    let bundle = TestBundle::example(Encoding::Binary);
    let out = tempfile::tempdir().unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("patchstarter");
    cmd.arg(path_str(&bundle.path)).arg("--output").arg(out.path());
    cmd.assert().success().stdout("");

    let written = out.path().join("Example.json");
    let text = fs::read_to_string(&written).unwrap();
    assert!(!text.contains('\n'), "file output should be compact");

    let json: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["id"], "Example");
    assert_eq!(json["currentVersion"], "2.1");
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 1);
}

#[test]
fn test_file_contents_match_stdout_document() {
    let bundle = TestBundle::example(Encoding::Xml);
    let out = tempfile::tempdir().unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("patchstarter");
    cmd.arg(path_str(&bundle.path)).arg("-o").arg(out.path()).arg("-p").arg("Example Inc");
    cmd.assert().success();

    let mut from_file: Value =
        serde_json::from_str(&fs::read_to_string(out.path().join("Example.json")).unwrap())
            .unwrap();
    let mut from_stdout = helpers::run_json(&[path_str(&bundle.path), "-p", "Example Inc"]);

    from_file["lastModified"] = Value::Null;
    from_stdout["lastModified"] = Value::Null;
    assert_eq!(from_file, from_stdout);
}

#[test]
fn test_blank_name_override_keeps_bundle_name() {
    let bundle = TestBundle::example(Encoding::Xml);
    let out = tempfile::tempdir().unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("patchstarter");
    cmd.arg(path_str(&bundle.path)).arg("-n").arg("   ").arg("-o").arg(out.path());
    cmd.assert().success();

    assert!(out.path().join("Example.json").exists());
    assert!(!out.path().join(".json").exists());
}
