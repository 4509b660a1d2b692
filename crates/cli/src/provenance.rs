//! Provenance sidecars: `<out-stem>.provenance.json` next to each output,
//! recording code revision, call site, input and the beam options used.

use anyhow::{Context, Result};
use beams::BeamOptions;
use serde::Serialize;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Debug, Serialize)]
pub struct Sidecar {
    code_rev: String,
    version: &'static str,
    callsite: Callsite,
    input: String,
    options: BeamOptions,
    outputs: Vec<String>,
}

impl Sidecar {
    /// Record for `output`, produced from `input` with `options`; the call
    /// site is the caller's location.
    #[track_caller]
    pub fn new(input: &str, options: BeamOptions, output: &Path) -> Self {
        let callsite = Location::caller();
        Self {
            code_rev: current_git_rev(),
            version: beams::VERSION,
            callsite: Callsite {
                file: callsite.file(),
                line: callsite.line(),
            },
            input: input.to_string(),
            options,
            outputs: vec![output.to_string_lossy().into_owned()],
        }
    }

    /// Write next to the first output; returns the sidecar path.
    pub fn write(&self) -> Result<PathBuf> {
        let artifact = self
            .outputs
            .first()
            .map(PathBuf::from)
            .context("sidecar without outputs")?;
        let path = sidecar_path(&artifact);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating provenance dir {}", parent.display()))?;
            }
        }
        fs::write(&path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit from `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
