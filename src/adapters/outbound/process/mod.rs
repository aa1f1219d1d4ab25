//! Package-manager invocation adapters.
//!
//! Every invocation is a blocking `std::process::Command` call; a
//! non-zero exit of the underlying tool aborts the run for that
//! ecosystem. Isolation (temp dirs, virtualenvs) keeps the host
//! project untouched.

mod maven;
mod npm;
mod pip;

pub use maven::MavenCycloneDxProducer;
pub use npm::NpmLockfileProducer;
pub use pip::PipDependencyTreeProducer;

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::shared::error::SbomError;
use crate::shared::Result;

/// Locates a package-manager binary on PATH, preferring the `.cmd` shim
/// on Windows.
fn resolve_binary(name: &str) -> Result<PathBuf> {
    if cfg!(windows) {
        if let Ok(path) = which::which(format!("{}.cmd", name)) {
            return Ok(path);
        }
    }
    which::which(name).map_err(|_| {
        SbomError::ToolNotFound {
            tool: name.to_string(),
        }
        .into()
    })
}

/// Runs a command to completion and turns a non-zero exit into the
/// fatal `ToolInvocationFailed` error, with stderr as the detail text.
fn run_checked(command: &mut Command, tool: &str) -> Result<Output> {
    let output = command.output().map_err(|error| SbomError::ToolInvocationFailed {
        tool: tool.to_string(),
        details: error.to_string(),
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SbomError::ToolInvocationFailed {
            tool: tool.to_string(),
            details: stderr.trim().to_string(),
        }
        .into());
    }

    Ok(output)
}

/// Fails fast when the input manifest is missing, before any tool runs.
fn require_manifest(path: &Path, suggestion: &str) -> Result<()> {
    if !path.exists() {
        return Err(SbomError::ManifestNotFound {
            path: path.to_path_buf(),
            suggestion: suggestion.to_string(),
        }
        .into());
    }
    Ok(())
}

fn read_to_string(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|error| {
        SbomError::FileReadError {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
        .into()
    })
}
