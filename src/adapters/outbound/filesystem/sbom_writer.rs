use std::fs;
use std::path::{Path, PathBuf};

use crate::ports::outbound::OutputPresenter;
use crate::shared::error::SbomError;
use crate::shared::Result;

/// FileSystemWriter adapter: writes the finished document to its fixed
/// per-ecosystem path, fully overwriting any previous run's output.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(SbomError::FileWriteError {
                    path: self.output_path.clone(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_parent_directory()?;

        fs::write(&self.output_path, content).map_err(|error| SbomError::FileWriteError {
            path: self.output_path.clone(),
            details: error.to_string(),
        })?;

        eprintln!("✅ SBOM written to {}", self.output_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_content() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("npm_sbom.json");

        let writer = FileSystemWriter::new(output_path.clone());
        writer.present("{\"bomFormat\": \"CycloneDX\"}").unwrap();

        let written = fs::read_to_string(&output_path).unwrap();
        assert!(written.contains("CycloneDX"));
    }

    #[test]
    fn test_overwrites_previous_output() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("out.json");
        fs::write(&output_path, "old").unwrap();

        let writer = FileSystemWriter::new(output_path.clone());
        writer.present("new").unwrap();
        assert_eq!(fs::read_to_string(&output_path).unwrap(), "new");
    }

    #[test]
    fn test_missing_parent_directory_is_an_error() {
        let writer = FileSystemWriter::new(PathBuf::from("/nonexistent/dir/out.json"));
        let result = writer.present("content");
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("Parent directory does not exist"));
    }
}
