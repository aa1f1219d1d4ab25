use std::path::PathBuf;
use std::process::Command;

use super::{read_to_string, require_manifest, resolve_binary, run_checked};
use crate::ports::outbound::CycloneDxProducer;
use crate::sbom_generation::ecosystems::maven::CycloneDxBom;
use crate::shared::error::SbomError;
use crate::shared::Result;

/// Maven goal that writes an aggregate CycloneDX document to
/// `target/bom.json` next to the pom.
const CYCLONEDX_GOAL: &str = "org.cyclonedx:cyclonedx-maven-plugin:makeAggregateBom";

/// MavenCycloneDxProducer adapter: drives the Maven CycloneDX plugin
/// against a pom.xml and parses the document it leaves behind.
pub struct MavenCycloneDxProducer {
    pom_path: PathBuf,
}

impl MavenCycloneDxProducer {
    pub fn new(pom_path: PathBuf) -> Self {
        Self { pom_path }
    }

    fn bom_output_path(&self) -> PathBuf {
        let project_dir = self.pom_path.parent().unwrap_or_else(|| "".as_ref());
        project_dir.join("target").join("bom.json")
    }
}

impl CycloneDxProducer for MavenCycloneDxProducer {
    fn produce(&self) -> Result<CycloneDxBom> {
        require_manifest(
            &self.pom_path,
            "place the project's pom.xml under the input directory",
        )?;

        let mvn = resolve_binary("mvn")?;
        run_checked(
            Command::new(mvn)
                .arg(CYCLONEDX_GOAL)
                .arg(format!("-f={}", self.pom_path.display())),
            "mvn",
        )?;

        let bom_path = self.bom_output_path();
        let content = read_to_string(&bom_path)?;
        let bom: CycloneDxBom =
            serde_json::from_str(&content).map_err(|error| SbomError::ToolOutputParseError {
                kind: "CycloneDX".to_string(),
                path: bom_path,
                details: error.to_string(),
            })?;

        Ok(bom)
    }
}
