#![allow(dead_code)]

pub mod architecture;

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Scratch directory holding a config file and its SQLite database.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn database_path(&self) -> PathBuf {
        self.dir.path().join("hindsight.db")
    }

    /// Write `config.toml` with the given registry settings and return its path.
    pub fn write_config(&self, owner: &str, threshold: u64) -> PathBuf {
        self.write_raw_config(&format!(
            "[registry]\nowner = \"{owner}\"\nthreshold = {threshold}\n\n[database]\nurl = \"{}\"\n\n[logging]\nlevel = \"warn\"\nformat = \"pretty\"\n",
            self.database_path().display()
        ))
    }

    /// Write arbitrary TOML to `config.toml` and return its path.
    pub fn write_raw_config(&self, contents: &str) -> PathBuf {
        let path = self.dir.path().join("config.toml");
        fs::write(&path, contents).expect("write temp config");
        path
    }
}
