//! Shared test utilities for integration tests.
//!
//! Provides site fixtures and helpers for running the blogroll binary
//! against temporary directories.

#![allow(dead_code)]

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Fixture with two categories, one local and one external image.
pub const SITE_FIXTURE: &str = r#"{
    "bookmarks": [
        {
            "url": "https://rust-lang.org/",
            "name": "Rust",
            "description": "A language empowering everyone",
            "image": "https://blog.example/uploads/rust.png",
            "categories": ["Languages"]
        },
        {
            "url": "https://news.example/",
            "name": "Daily <News>",
            "description": "Headlines & more",
            "image": "https://cdn.news.example/favicon.ico",
            "categories": ["News"]
        },
        {
            "url": "https://archive.example/",
            "name": "Archive",
            "categories": ["News"]
        }
    ],
    "media": {
        "https://blog.example/uploads/rust.png": 12
    },
    "options": {}
}"#;

/// Creates temporary directory holding `site.json` with `content`.
///
/// # Returns
///
/// Temporary directory and path to the written fixture
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn create_site(content: &str) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("site.json");
    std::fs::write(&path, content)?;
    Ok((dir, path))
}

/// Runs the blogroll binary against a site fixture.
///
/// # Arguments
///
/// * `site`: Path to site fixture
/// * `args`: Subcommand and its arguments
///
/// # Errors
///
/// Returns error if the binary cannot be spawned
pub fn run_blogroll(site: &Path, args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_blogroll"))
        .arg("--site")
        .arg(site)
        .args(args)
        .env("RUST_LOG", "off")
        .output()?;
    Ok(output)
}

/// Returns stdout of a successful run, failing with stderr otherwise.
///
/// # Errors
///
/// Returns error if the process exited unsuccessfully
pub fn stdout_of(output: Output) -> Result<String> {
    if !output.status.success() {
        anyhow::bail!(
            "blogroll failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(String::from_utf8(output.stdout)?)
}
