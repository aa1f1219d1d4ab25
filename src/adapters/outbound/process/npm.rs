use std::fs;
use std::path::PathBuf;
use std::process::Command;

use super::{read_to_string, require_manifest, resolve_binary, run_checked};
use crate::ports::outbound::LockfileProducer;
use crate::sbom_generation::ecosystems::npm::{NpmManifest, PackageLock};
use crate::shared::error::SbomError;
use crate::shared::Result;

/// NpmLockfileProducer adapter: resolves a package.json to a
/// package-lock.json in a throwaway directory, without installing
/// anything into the host project.
pub struct NpmLockfileProducer {
    manifest_path: PathBuf,
}

impl NpmLockfileProducer {
    pub fn new(manifest_path: PathBuf) -> Self {
        Self { manifest_path }
    }
}

impl LockfileProducer for NpmLockfileProducer {
    fn produce(&self) -> Result<(PackageLock, NpmManifest)> {
        require_manifest(
            &self.manifest_path,
            "place the project's package.json under the input directory",
        )?;

        let manifest_content = read_to_string(&self.manifest_path)?;
        let manifest: NpmManifest = serde_json::from_str(&manifest_content).map_err(|error| {
            SbomError::ToolOutputParseError {
                kind: "package.json".to_string(),
                path: self.manifest_path.clone(),
                details: error.to_string(),
            }
        })?;

        // Resolve in isolation; the temp dir is removed on drop.
        let temp_dir = tempfile::tempdir()?;
        fs::copy(&self.manifest_path, temp_dir.path().join("package.json")).map_err(|error| {
            SbomError::FileReadError {
                path: self.manifest_path.clone(),
                details: error.to_string(),
            }
        })?;

        let npm = resolve_binary("npm")?;
        run_checked(
            Command::new(npm)
                .args(["install", "--package-lock-only", "--legacy-peer-deps", "--force"])
                .current_dir(temp_dir.path()),
            "npm",
        )?;

        let lockfile_path = temp_dir.path().join("package-lock.json");
        let lockfile_content = read_to_string(&lockfile_path)?;
        let lockfile: PackageLock =
            serde_json::from_str(&lockfile_content).map_err(|error| {
                SbomError::ToolOutputParseError {
                    kind: "package-lock.json".to_string(),
                    path: lockfile_path,
                    details: error.to_string(),
                }
            })?;

        Ok((lockfile, manifest))
    }
}
