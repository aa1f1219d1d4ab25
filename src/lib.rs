//! polybom - multi-ecosystem SBOM generator
//!
//! This library generates a Software Bill of Materials by invoking a
//! project's native package manager (Maven, npm, or pip), extracting the
//! resulting dependency graph, and normalizing it into one
//! vendor-neutral document schema.
//!
//! # Architecture
//!
//! The library follows a hexagonal layout:
//!
//! - **Core** (`sbom_generation`): purl canonicalization, the three
//!   ecosystem adapters, and the enrich/materialize/assemble services
//! - **Application Layer** (`application`): one use case per ecosystem,
//!   generic over the ports
//! - **Ports** (`ports`): interfaces for the external collaborators
//! - **Adapters** (`adapters`): process invocation, registry clients,
//!   template store, output writer, console reporting
//! - **Shared** (`shared`): common error types
//!
//! # Example
//!
//! ```no_run
//! use polybom::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateNpmSbom::new(
//!     NpmLockfileProducer::new(PathBuf::from("input/package.json")),
//!     NpmRegistryClient::new()?,
//!     FileTemplateStore::new(PathBuf::from("templates")),
//!     FileSystemWriter::new(PathBuf::from("sboms/npm_sbom.json")),
//!     StderrProgressReporter::new(),
//! );
//! let summary = use_case.execute()?;
//! eprintln!("{} component(s)", summary.component_count);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, FileTemplateStore};
    pub use crate::adapters::outbound::network::{NpmRegistryClient, PyPiRegistryClient};
    pub use crate::adapters::outbound::process::{
        MavenCycloneDxProducer, NpmLockfileProducer, PipDependencyTreeProducer,
    };
    pub use crate::application::dto::GenerationSummary;
    pub use crate::application::use_cases::{GenerateMavenSbom, GenerateNpmSbom, GeneratePypiSbom};
    pub use crate::ports::outbound::{
        CycloneDxProducer, DependencyTreeProducer, DependencyTreeReport, LockfileProducer,
        OutputPresenter, ProgressReporter, RegistryClient, TemplateStore,
    };
    pub use crate::sbom_generation::domain::{
        DependencyEdge, ExternalReference, NormalizedComponent, PackageMetadata, SubjectInfo,
        ToolInfo,
    };
    pub use crate::shared::Result;
}
