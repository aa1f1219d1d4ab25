use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::{read_to_string, require_manifest, run_checked};
use crate::ports::outbound::{DependencyTreeProducer, DependencyTreeReport};
use crate::shared::error::SbomError;
use crate::shared::Result;

/// PipDependencyTreeProducer adapter: installs the requirements into a
/// fresh virtualenv and captures pipdeptree's report.
///
/// The snapshot of `pip list --format=freeze` taken before and after the
/// install determines the "relevant" set; packages that ship with the
/// virtualenv itself (pip, setuptools) are thereby excluded from the
/// document.
pub struct PipDependencyTreeProducer {
    requirements_path: PathBuf,
}

impl PipDependencyTreeProducer {
    pub fn new(requirements_path: PathBuf) -> Self {
        Self { requirements_path }
    }

    fn resolve_host_python() -> Result<PathBuf> {
        which::which("python3")
            .or_else(|_| which::which("python"))
            .map_err(|_| {
                SbomError::ToolNotFound {
                    tool: "python".to_string(),
                }
                .into()
            })
    }

    fn venv_python(env_dir: &Path) -> PathBuf {
        if cfg!(windows) {
            env_dir.join("Scripts").join("python.exe")
        } else {
            env_dir.join("bin").join("python")
        }
    }

    fn freeze(python: &Path) -> Result<BTreeSet<String>> {
        let output = run_checked(
            Command::new(python).args(["-m", "pip", "list", "--no-cache-dir", "--format=freeze"]),
            "pip",
        )?;
        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect())
    }
}

impl DependencyTreeProducer for PipDependencyTreeProducer {
    fn produce(&self) -> Result<DependencyTreeReport> {
        require_manifest(
            &self.requirements_path,
            "place the project's requirements.txt under the input directory",
        )?;
        let requirements = read_to_string(&self.requirements_path)?;

        let temp_dir = tempfile::tempdir()?;
        let env_dir = temp_dir.path().join("venv");

        let host_python = Self::resolve_host_python()?;
        run_checked(
            Command::new(&host_python).args(["-m", "venv"]).arg(&env_dir),
            "python",
        )?;
        let python = Self::venv_python(&env_dir);

        let pre_install = Self::freeze(&python)?;

        run_checked(
            Command::new(&python)
                .args(["-m", "pip", "install", "--no-cache-dir", "-r"])
                .arg(&self.requirements_path),
            "pip",
        )?;

        let post_install = Self::freeze(&python)?;
        let relevant_packages = post_install
            .difference(&pre_install)
            .cloned()
            .collect::<BTreeSet<_>>();

        // pipdeptree goes in after the snapshots so it never counts as a
        // project dependency.
        run_checked(
            Command::new(&python).args(["-m", "pip", "install", "pipdeptree"]),
            "pip",
        )?;
        let output = run_checked(
            Command::new(&python).args(["-m", "pipdeptree", "--warn", "silence"]),
            "pipdeptree",
        )?;

        Ok(DependencyTreeReport {
            tree: String::from_utf8_lossy(&output.stdout).to_string(),
            relevant_packages,
            requirements,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_requirements_aborts_before_invocation() {
        let producer = PipDependencyTreeProducer::new(PathBuf::from("/no/such/requirements.txt"));
        let result = producer.produce();
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("Manifest not found"));
    }

    #[test]
    fn test_venv_python_layout() {
        let python = PipDependencyTreeProducer::venv_python(Path::new("/tmp/env"));
        if cfg!(windows) {
            assert!(python.ends_with("Scripts/python.exe"));
        } else {
            assert!(python.ends_with("bin/python"));
        }
    }
}
