use crate::sbom_generation::domain::PackageMetadata;
use crate::shared::Result;

/// RegistryClient port for fetching descriptive package metadata
///
/// One ecosystem-specific endpoint backs each adapter (registry.npmjs.org
/// for npm, pypi.org for PyPI). Implementations translate the registry's
/// response into the neutral `PackageMetadata` record.
///
/// # Errors
/// A not-found or transport failure is returned as an error; the caller
/// (the enricher) degrades it to minimal metadata and never aborts the
/// run for a single failed lookup.
pub trait RegistryClient {
    fn fetch_metadata(&self, package_name: &str, version: &str) -> Result<PackageMetadata>;
}
