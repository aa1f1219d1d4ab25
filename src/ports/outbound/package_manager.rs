use std::collections::BTreeSet;

use crate::sbom_generation::ecosystems::maven::CycloneDxBom;
use crate::sbom_generation::ecosystems::npm::{NpmManifest, PackageLock};
use crate::shared::Result;

/// Produces a CycloneDX document by driving the Maven toolchain.
///
/// # Errors
/// A non-zero exit of the underlying tool is fatal for the run; the
/// adapter must not proceed with a partial document.
pub trait CycloneDxProducer {
    fn produce(&self) -> Result<CycloneDxBom>;
}

/// Produces a resolved lock-file (and the project manifest it was
/// resolved from) via an isolated npm install step.
pub trait LockfileProducer {
    fn produce(&self) -> Result<(PackageLock, NpmManifest)>;
}

/// Raw output of the pip path: the dependency-tree report, the set of
/// packages the isolated install actually added (packages present in the
/// environment beforehand are excluded), and the literal requirements
/// text for the top-level edge.
#[derive(Debug, Clone)]
pub struct DependencyTreeReport {
    pub tree: String,
    pub relevant_packages: BTreeSet<String>,
    pub requirements: String,
}

/// Produces a dependency-tree report via an isolated virtual
/// environment.
pub trait DependencyTreeProducer {
    fn produce(&self) -> Result<DependencyTreeReport>;
}
