#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

/// Plist encoding used for a fixture bundle
#[derive(Debug, Clone, Copy)]
pub enum Encoding {
    Xml,
    Binary,
}

/// Test helper for creating application bundles on disk
pub struct TestBundle {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestBundle {
    /// Create `<tmp>/<name>` with an Info.plist holding `fields`
    pub fn new(name: &str, fields: &[(&str, &str)], encoding: Encoding) -> Self {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(name);
        fs::create_dir_all(path.join("Contents")).unwrap();

        let mut dict = plist::Dictionary::new();
        for (key, value) in fields {
            dict.insert(key.to_string(), plist::Value::from(*value));
        }
        let value = plist::Value::Dictionary(dict);
        let plist_path = path.join("Contents").join("Info.plist");
        match encoding {
            Encoding::Xml => plist::to_file_xml(&plist_path, &value).unwrap(),
            Encoding::Binary => plist::to_file_binary(&plist_path, &value).unwrap(),
        }

        TestBundle { temp_dir, path }
    }

    /// The standard example bundle
    pub fn example(encoding: Encoding) -> Self {
        Self::new("Example.app", EXAMPLE_FIELDS, encoding)
    }

    /// Write an extra file next to the bundle
    pub fn write_file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }
}

pub const EXAMPLE_FIELDS: &[(&str, &str)] = &[
    ("CFBundleName", "Example"),
    ("CFBundleIdentifier", "com.example.app"),
    ("CFBundleShortVersionString", "2.1"),
    ("CFBundleVersion", "210"),
    ("LSMinimumSystemVersion", "10.14"),
];

/// Run patchstarter with `args` and parse its stdout as JSON
pub fn run_json(args: &[&str]) -> Value {
    let mut cmd = assert_cmd::cargo_bin_cmd!("patchstarter");
    cmd.args(args);

    let output = cmd.assert().success().get_output().stdout.clone();
    let json_str = String::from_utf8(output).unwrap();
    serde_json::from_str(&json_str).expect("Invalid JSON output")
}

pub fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}
