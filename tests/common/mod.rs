//! Shared testing utilities for maxgpt CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated home and config directories for one CLI exercise.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(root.path().join("config")).expect("Failed to create config directory");
        Self { root, work_dir }
    }

    /// Emulated `$HOME`.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Directory exposed as `MAXGPT_CONFIG_HOME`.
    pub fn config_home(&self) -> PathBuf {
        self.root.path().join("config")
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn settings_path(&self) -> PathBuf {
        self.config_home().join("maxgpt").join("openai.toml")
    }

    /// Write a raw settings file.
    pub fn write_settings(&self, content: &str) {
        let path = self.settings_path();
        fs::create_dir_all(path.parent().expect("settings path has a parent"))
            .expect("Failed to create settings directory");
        fs::write(path, content).expect("Failed to write settings");
    }

    /// Settings pointing the chat client at `url` with `api_key`.
    pub fn write_api_settings(&self, url: &str, api_key: &str) {
        self.write_settings(&format!(
            "api_key = \"{}\"\n\n[api]\nurl = \"{}\"\ntimeout_secs = 5\n",
            api_key, url
        ));
    }

    /// Write a script file into the work directory and return its path.
    pub fn write_script(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write script");
        path
    }

    /// Command for the compiled `maxgpt` binary with isolated settings and no
    /// clipboard access.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("maxgpt").expect("Failed to locate maxgpt binary");
        cmd.current_dir(self.work_dir())
            .env("HOME", self.home())
            .env("MAXGPT_CONFIG_HOME", self.config_home())
            .env_remove("MAXGPT_API_KEY")
            .env_remove("XDG_CONFIG_HOME")
            .env_remove("RUST_LOG")
            .arg("--no-clipboard");
        cmd
    }
}
