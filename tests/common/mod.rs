//! Shared test utilities for file-backed registry tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use shorts::{Config, Context, Registry};
use tempfile::TempDir;

/// A temp "machine": a global directory plus a project with a local marker
pub struct Sandbox {
    pub temp: TempDir,
    pub global: PathBuf,
    pub project: PathBuf,
    pub outside: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let global = temp.path().join("home/.shorts");
        let project = temp.path().join("work/project");
        let outside = temp.path().join("work/other");

        std::fs::create_dir_all(project.join(".shorts")).expect("Failed to create local marker");
        std::fs::create_dir_all(project.join("src/bin")).expect("Failed to create project dirs");
        std::fs::create_dir_all(&outside).expect("Failed to create outside dir");

        Self {
            temp,
            global,
            project,
            outside,
        }
    }

    pub fn registry(&self) -> Registry {
        Registry::open(&self.global, &Config::default())
    }

    pub fn project_ctx(&self) -> Context {
        Context::new(self.project.join("src/bin"))
    }

    pub fn outside_ctx(&self) -> Context {
        Context::new(&self.outside)
    }

    /// Run the `sc` binary in `dir` against this sandbox's global directory
    pub fn sc(&self, dir: &Path, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_sc"))
            .args(args)
            .current_dir(dir)
            .env("SHORTS_HOME", &self.global)
            .env_remove("RUST_LOG")
            .output()
            .unwrap_or_else(|e| panic!("failed to run sc {:?}: {}", args, e))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
