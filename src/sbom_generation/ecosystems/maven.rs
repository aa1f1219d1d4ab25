//! Maven adapter: consumes a CycloneDX document already built by the
//! cyclonedx-maven-plugin and canonicalizes it into normalized form.
//!
//! CycloneDX input is already deduplicated by its generator, so no
//! dedup pass is needed here. Edge order and count are preserved
//! exactly; the plugin emits the root component's own edge first, which
//! is why this path needs no synthetic top-level entry.

use serde::Deserialize;
use serde_json::Value;

use crate::sbom_generation::domain::purl;
use crate::sbom_generation::domain::{
    DependencyEdge, NormalizedComponent, PackageMetadata, SubjectInfo,
};

/// CycloneDX document as produced by the Maven plugin. Only the fields
/// the pipeline consumes are modeled; `licenses` and
/// `externalReferences` are carried as raw values and passed through
/// verbatim.
#[derive(Debug, Deserialize)]
pub struct CycloneDxBom {
    #[serde(default)]
    pub metadata: CycloneDxMetadata,
    #[serde(default)]
    pub components: Vec<CycloneDxComponent>,
    #[serde(default)]
    pub dependencies: Vec<CycloneDxDependency>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CycloneDxMetadata {
    #[serde(default)]
    pub component: CycloneDxSubject,
}

#[derive(Debug, Default, Deserialize)]
pub struct CycloneDxSubject {
    #[serde(rename = "bom-ref", default)]
    pub bom_ref: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Deserialize)]
pub struct CycloneDxComponent {
    #[serde(rename = "bom-ref", default)]
    pub bom_ref: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub component_type: Option<String>,
    #[serde(default)]
    pub purl: String,
    #[serde(default = "empty_array")]
    pub licenses: Value,
    #[serde(rename = "externalReferences", default = "empty_array")]
    pub external_references: Value,
}

#[derive(Debug, Deserialize)]
pub struct CycloneDxDependency {
    #[serde(rename = "ref", default)]
    pub bom_ref: String,
    #[serde(rename = "dependsOn", default)]
    pub depends_on: Vec<String>,
}

fn empty_array() -> Value {
    Value::Array(Vec::new())
}

/// Subject component for the document header, with its reference cleaned.
pub fn subject(bom: &CycloneDxBom) -> SubjectInfo {
    let component = &bom.metadata.component;
    SubjectInfo {
        bom_ref: purl::clean(&component.bom_ref).to_string(),
        name: component.name.clone(),
        version: component.version.clone(),
    }
}

/// Canonicalizes every component and dependency entry of the document.
pub fn normalize(bom: &CycloneDxBom) -> (Vec<NormalizedComponent>, Vec<DependencyEdge>) {
    let components = bom
        .components
        .iter()
        .map(|component| NormalizedComponent {
            bom_ref: purl::clean(&component.bom_ref).to_string(),
            purl: purl::clean(&component.purl).to_string(),
            name: component.name.clone(),
            group: component.group.clone(),
            version: component.version.clone(),
            component_type: component
                .component_type
                .clone()
                .unwrap_or_else(|| "Library".to_string()),
            scope: "compile".to_string(),
            metadata: PackageMetadata {
                publisher: None,
                description: component.description.clone(),
                license: None,
                external_references: Vec::new(),
            },
            licenses_passthrough: Some(component.licenses.clone()),
            external_references_passthrough: Some(component.external_references.clone()),
        })
        .collect();

    let dependencies = bom
        .dependencies
        .iter()
        .map(|dependency| {
            DependencyEdge::new(
                purl::clean(&dependency.bom_ref).to_string(),
                dependency
                    .depends_on
                    .iter()
                    .map(|child| purl::clean(child).to_string())
                    .collect(),
            )
        })
        .collect();

    (components, dependencies)
}
