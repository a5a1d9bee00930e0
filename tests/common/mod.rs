//! Shared testing utilities for ngxconf tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Config with one certificate and one plain domain.
pub const EXAMPLE_CONFIG: &str = r#"{
  "ssl": { "example": { "certDomain": "example.com" } },
  "domains": ["example.com"]
}"#;

/// Testing harness providing an isolated home and nginx root.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        root.child("home").create_dir_all().expect("Failed to create test home");
        Self { root }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> PathBuf {
        self.root.path().join("home")
    }

    /// Output root passed to the generator.
    pub fn nginx_root(&self) -> PathBuf {
        self.root.path().join("etc/nginx")
    }

    /// Write the default `~/.nginxconf` config.
    pub fn write_home_config(&self, content: &str) -> PathBuf {
        let path = self.home().join(".nginxconf");
        fs::write(&path, content).expect("Failed to write home config");
        path
    }

    /// Write a config file at a path relative to the temp root.
    pub fn write_config(&self, relative: &str, content: &str) -> PathBuf {
        let child = self.root.child(relative);
        child.write_str(content).expect("Failed to write config");
        child.path().to_path_buf()
    }

    /// Build a command for invoking the compiled `ngxconf` binary with an isolated `$HOME`.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("ngxconf").expect("Failed to locate ngxconf binary");
        cmd.current_dir(self.root.path()).env("HOME", self.home()).env_remove("NGXCONF_LOG");
        cmd
    }

    /// All files under the nginx root, relative to it, sorted.
    pub fn generated_files(&self) -> Vec<String> {
        let mut files = Vec::new();
        collect_files(&self.nginx_root(), &self.nginx_root(), &mut files);
        files.sort();
        files
    }

    pub fn read_generated(&self, relative: &str) -> String {
        fs::read_to_string(self.nginx_root().join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }
}

fn collect_files(base: &Path, dir: &Path, out: &mut Vec<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries {
        let path = entry.expect("Failed to read dir entry").path();
        if path.is_dir() {
            collect_files(base, &path, out);
        } else {
            let relative = path.strip_prefix(base).expect("path under base");
            out.push(relative.to_string_lossy().replace('\\', "/"));
        }
    }
}
