//! Test environment for isolated camera-menu runs.
//!
//! Every run gets its own data directory, record store and config home, so
//! nothing leaks in from (or out to) the developer's machine.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as one JSON document
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim()).unwrap_or_else(|e| {
            panic!(
                "stdout is not JSON ({e}):\n{}\nstderr:\n{}",
                self.stdout, self.stderr
            )
        })
    }
}

pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("data")).unwrap();
        fs::create_dir_all(root.path().join("home")).unwrap();
        fs::create_dir_all(root.path().join("work")).unwrap();
        Self {
            root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_camera-menu")),
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.path().join("data")
    }

    pub fn work_dir(&self) -> PathBuf {
        self.root.path().join("work")
    }

    pub fn store_path(&self) -> PathBuf {
        self.root.path().join("home/.camera-menu/cameras.toml")
    }

    /// Add a built-in document `<id>.csv`
    pub fn with_document(self, id: &str, csv: &str) -> Self {
        fs::write(self.data_dir().join(format!("{id}.csv")), csv).unwrap();
        self
    }

    /// Add a stylesheet `<name>.css` next to the documents
    pub fn with_stylesheet(self, name: &str, css: &str) -> Self {
        fs::write(self.data_dir().join(format!("{name}.css")), css).unwrap();
        self
    }

    /// Write a project config into the working directory
    pub fn with_project_config(self, toml: &str) -> Self {
        fs::write(self.work_dir().join(".camera-menu.toml"), toml).unwrap();
        self
    }

    pub fn read_document(&self, id: &str) -> String {
        fs::read_to_string(self.data_dir().join(format!("{id}.csv"))).unwrap()
    }

    pub fn write_file(&self, relative: &str, bytes: &[u8]) -> PathBuf {
        let path = self.work_dir().join(relative);
        fs::write(&path, bytes).unwrap();
        path
    }

    /// Run with `--data-dir` pointing at this environment
    pub fn run(&self, args: &[&str]) -> TestResult {
        let data_dir = self.data_dir();
        let mut full: Vec<&str> = vec!["--data-dir", data_dir.to_str().unwrap()];
        full.extend_from_slice(args);
        self.run_raw(&full)
    }

    /// Run exactly the given arguments
    pub fn run_raw(&self, args: &[&str]) -> TestResult {
        self.run_in(&self.work_dir(), args)
    }

    fn run_in(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let home = self.root.path().join("home");
        let output = Command::new(&self.bin)
            .args(args)
            .current_dir(cwd)
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("CAMERA_MENU_STORE_PATH", self.store_path())
            .env("NO_COLOR", "1")
            .env("LANG", "en_US.UTF-8")
            .env_remove("RUST_LOG")
            .env_remove("CAMERA_MENU_DATA_DIR")
            .env_remove("CAMERA_MENU_PLACEHOLDER")
            .env_remove("CAMERA_MENU_FULL_FIDELITY")
            .env_remove("CAMERA_MENU_CASE_INSENSITIVE")
            .output()
            .unwrap();

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
