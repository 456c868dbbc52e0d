//! Shared test infrastructure for integration tests.

use serde_json::json;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Scratch directory holding session and candidates files for one test.
pub struct Workspace {
    dir: TempDir,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a candidates file with `count` ranked snippets for d1/s1.
    pub fn write_candidates(&self, name: &str, count: usize) -> PathBuf {
        let candidates: Vec<_> = (0..count)
            .map(|n| {
                json!({
                    "id": format!("d1_paragraph_{n}"),
                    "document": "d1",
                    "text": format!("candidate text {n}"),
                })
            })
            .collect();
        let body = json!({
            "schema_version": 1,
            "document_id": "d1",
            "snippet_id": "s1",
            "candidates": candidates,
        });
        let path = self.path(name);
        std::fs::write(
            &path,
            serde_json::to_string_pretty(&body).expect("serialize candidates"),
        )
        .expect("write candidates");
        path
    }
}

/// Run the relrev binary with the given arguments.
pub fn relrev(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_relrev"))
        .args(args)
        .output()
        .expect("run relrev")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "relrev failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}
