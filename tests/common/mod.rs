//! Hermetic filesystem fixtures for generation tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const REPOSITORY_DIR: &str = "internal/transport/repository/postgres";
pub const SERVICE_DIR: &str = "internal/service";
pub const CONTROLLER_DIR: &str = "internal/transport/http/rest/controller/v1";

/// The four files the default registry writes for `camel`.
pub fn expected_paths(camel: &str) -> [String; 4] {
    [
        format!("{REPOSITORY_DIR}/{camel}.go"),
        format!("{SERVICE_DIR}/{camel}.go"),
        format!("{CONTROLLER_DIR}/{camel}/controller.go"),
        format!("{CONTROLLER_DIR}/{camel}/request.go"),
    ]
}

/// A throwaway target project. The directory is removed on drop.
pub struct TestProject {
    temp_dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(path, content).expect("Failed to write file");
    }

    pub fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).expect("Failed to read file")
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    /// Puts a regular file where generation needs a directory.
    pub fn block_dir(&self, relative: &str) {
        self.write_file(relative, "blocker");
    }

    pub fn remove_file(&self, relative: &str) {
        fs::remove_file(self.path(relative)).expect("Failed to remove file");
    }

    /// Contents of every regular file under the root, keyed by relative path.
    pub fn snapshot(&self) -> BTreeMap<PathBuf, String> {
        let mut files = BTreeMap::new();
        collect_files(self.root(), self.root(), &mut files);
        files
    }
}

fn collect_files(root: &Path, dir: &Path, files: &mut BTreeMap<PathBuf, String>) {
    let entries = fs::read_dir(dir).expect("Failed to read dir");
    for entry in entries {
        let path = entry.expect("Failed to read dir entry").path();
        if path.is_dir() {
            collect_files(root, &path, files);
        } else {
            let relative = path.strip_prefix(root).unwrap().to_path_buf();
            files.insert(relative, fs::read_to_string(&path).unwrap_or_default());
        }
    }
}
