//! Metadata enrichment: per-component registry lookups with graceful
//! degradation.

use crate::ports::outbound::{ProgressReporter, RegistryClient};
use crate::sbom_generation::domain::PackageMetadata;

/// Wraps a registry client so that a failed lookup degrades to empty
/// metadata instead of aborting the run. The affected component is still
/// emitted with its locally known fields; only a warning is reported.
pub struct MetadataEnricher<'a, R, P>
where
    R: RegistryClient,
    P: ProgressReporter,
{
    registry: &'a R,
    reporter: &'a P,
}

impl<'a, R, P> MetadataEnricher<'a, R, P>
where
    R: RegistryClient,
    P: ProgressReporter,
{
    pub fn new(registry: &'a R, reporter: &'a P) -> Self {
        Self { registry, reporter }
    }

    pub fn enrich(&self, name: &str, version: &str) -> PackageMetadata {
        match self.registry.fetch_metadata(name, version) {
            Ok(metadata) => metadata,
            Err(error) => {
                self.reporter.report_error(&format!(
                    "⚠️  Could not fetch metadata for {}@{}: {}",
                    name, version, error
                ));
                PackageMetadata::default()
            }
        }
    }
}
