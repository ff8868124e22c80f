mod helpers;

use helpers::{path_str, run_json, Encoding, TestBundle};

#[test]
fn test_patch_only_has_no_wrapper() {
    let bundle = TestBundle::example(Encoding::Xml);
    let json = run_json(&[path_str(&bundle.path), "--patch-only"]);
    let obj = json.as_object().unwrap();

    assert!(obj.get("id").is_none());
    assert!(obj.get("name").is_none());
    assert!(obj.get("patches").is_none());
    assert!(obj.get("extensionAttributes").is_none());
    assert_eq!(obj.len(), 9);
    assert_eq!(json["version"], "2.1");
    assert_eq!(json["minimumOperatingSystem"], "10.14");
    assert_eq!(json["killApps"][0]["bundleId"], "com.example.app");
}

#[test]
fn test_patch_only_matches_full_definition_patch() {
    let bundle = TestBundle::example(Encoding::Xml);
    let patch = run_json(&[path_str(&bundle.path), "--patch-only"]);
    let full = run_json(&[path_str(&bundle.path)]);

    assert_eq!(patch, full["patches"][0]);
}

#[test]
fn test_patch_only_written_with_suffix() {
    let bundle = TestBundle::new(
        "Example App.app",
        &[
            ("CFBundleName", "Example App"),
            ("CFBundleIdentifier", "com.example.app"),
            ("CFBundleShortVersionString", "1.4"),
            ("LSMinimumSystemVersion", "11.0"),
        ],
        helpers::Encoding::Xml,
    );
    let out = tempfile::tempdir().unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("patchstarter");
    cmd.arg(path_str(&bundle.path))
        .arg("--output")
        .arg(out.path())
        .arg("--patch-only");
    cmd.assert().success().stdout("");

    let written = out.path().join("ExampleApp-patch.json");
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(written).unwrap()).unwrap();
    assert_eq!(json["version"], "1.4");
    assert!(!out.path().join("ExampleApp.json").exists());
}

#[test]
fn test_patch_only_warns_about_extension_attributes() {
    let bundle = TestBundle::example(Encoding::Xml);
    let script = bundle.write_file("ea.sh", b"echo hi");

    let mut cmd = assert_cmd::cargo_bin_cmd!("patchstarter");
    cmd.env_remove("RUST_LOG")
        .arg(path_str(&bundle.path))
        .arg("--patch-only")
        .arg("-e")
        .arg(&script);

    cmd.assert()
        .success()
        .stderr(predicates::str::contains("ignoring"))
        .stderr(predicates::str::contains("ea.sh"));
}
