use serde::{Deserialize, Serialize};
use serde_json::Value;

/// External link attached to a component, e.g. its VCS or homepage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalReference {
    #[serde(rename = "type")]
    pub reference_type: String,
    pub url: String,
}

impl ExternalReference {
    pub fn new(reference_type: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            reference_type: reference_type.into(),
            url: url.into(),
        }
    }
}

/// Descriptive metadata for one package, as returned by a registry.
///
/// Every field is optional: a failed lookup yields the default value and
/// the component is still emitted with locally known fields only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageMetadata {
    pub publisher: Option<String>,
    pub description: Option<String>,
    pub license: Option<String>,
    pub external_references: Vec<ExternalReference>,
}

/// One resolved package instance, normalized out of an ecosystem-specific
/// representation and ready for materialization.
///
/// `bom_ref` doubles as the internal join key: a reference that has been
/// emitted once is never emitted or enriched again.
#[derive(Debug, Clone)]
pub struct NormalizedComponent {
    /// Cleaned reference exposed as `bom-ref` in output. For npm and PyPI
    /// this is the bare `name@version`; for Maven the cleaned CycloneDX
    /// bom-ref.
    pub bom_ref: String,
    /// Cleaned purl exposed in output. Bare for npm/PyPI, full for Maven.
    pub purl: String,
    pub name: String,
    pub group: String,
    pub version: String,
    pub component_type: String,
    pub scope: String,
    pub metadata: PackageMetadata,
    /// Verbatim CycloneDX `licenses` array carried through on the Maven
    /// path. When absent, materialization renders the single
    /// `license_id` from `metadata` instead.
    pub licenses_passthrough: Option<Value>,
    /// Verbatim CycloneDX `externalReferences` carried through on the
    /// Maven path.
    pub external_references_passthrough: Option<Value>,
}

impl NormalizedComponent {
    /// Component backed by registry enrichment (npm and PyPI paths).
    pub fn from_registry(
        name: impl Into<String>,
        version: impl Into<String>,
        bare_ref: impl Into<String>,
        metadata: PackageMetadata,
    ) -> Self {
        let bare_ref = bare_ref.into();
        Self {
            bom_ref: bare_ref.clone(),
            purl: bare_ref,
            name: name.into(),
            group: String::new(),
            version: version.into(),
            component_type: "Library".to_string(),
            scope: "compile".to_string(),
            metadata,
            licenses_passthrough: None,
            external_references_passthrough: None,
        }
    }
}

/// The document's subject: the project the SBOM describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectInfo {
    pub bom_ref: String,
    pub name: String,
    pub version: String,
}

impl SubjectInfo {
    /// Synthetic subject used by the npm and PyPI pipelines, where no
    /// project-level component exists in the raw input.
    pub fn for_package_manager(package_manager: &str) -> Self {
        Self {
            bom_ref: format!("{}-packages@0.1.0", package_manager),
            name: format!("{}-packages", package_manager),
            version: "0.1.0".to_string(),
        }
    }
}

/// Identity of the generating tool, recorded in the document header.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    pub vendor: String,
    pub name: String,
    pub version: String,
}

impl Default for ToolInfo {
    fn default() -> Self {
        Self {
            vendor: "polybom".to_string(),
            name: "polybom".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
