use indexmap::IndexMap;
use serde::Deserialize;

use super::{build_client, fetch_with_retry, validate_url_component};
use crate::ports::outbound::RegistryClient;
use crate::sbom_generation::domain::{ExternalReference, PackageMetadata};
use crate::shared::error::SbomError;
use crate::shared::Result;

const REGISTRY_BASE_URL: &str = "https://pypi.org/pypi";

#[derive(Debug, Deserialize)]
struct PyPiPackageDocument {
    info: PyPiInfo,
}

#[derive(Debug, Deserialize)]
struct PyPiInfo {
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    license: Option<String>,
    /// Keyed links such as Homepage or Documentation; order-preserving
    /// so the emitted references follow the registry's ordering.
    #[serde(default)]
    project_urls: Option<IndexMap<String, Option<String>>>,
}

/// PyPiRegistryClient adapter implementing the RegistryClient port
/// against the PyPI JSON API.
pub struct PyPiRegistryClient {
    client: reqwest::blocking::Client,
}

impl PyPiRegistryClient {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: build_client()?,
        })
    }

    fn fetch_package_document(&self, name: &str, version: &str) -> Result<PyPiPackageDocument> {
        validate_url_component(name, "Package name", false)?;
        validate_url_component(version, "Version", false)?;

        let url = format!(
            "{}/{}/{}/json",
            REGISTRY_BASE_URL,
            urlencoding::encode(name),
            urlencoding::encode(version)
        );

        let response = self.client.get(&url).send()?;
        if !response.status().is_success() {
            anyhow::bail!("PyPI API returned status code {}", response.status());
        }

        let document: PyPiPackageDocument = response.json()?;
        Ok(document)
    }
}

impl RegistryClient for PyPiRegistryClient {
    fn fetch_metadata(&self, package_name: &str, version: &str) -> Result<PackageMetadata> {
        let document = fetch_with_retry(|| self.fetch_package_document(package_name, version))
            .map_err(|error| SbomError::RegistryFetchError {
                package: package_name.to_string(),
                version: version.to_string(),
                details: error.to_string(),
            })?;

        Ok(into_metadata(document.info))
    }
}

fn into_metadata(info: PyPiInfo) -> PackageMetadata {
    let mut external_references = Vec::new();
    if let Some(project_urls) = &info.project_urls {
        for (key, url) in project_urls {
            let Some(url) = url else { continue };
            // GitHub links are the project's VCS regardless of how the
            // maintainer labeled them; everything else keeps its key.
            let reference_type = if url.to_lowercase().contains("github.com") {
                "vcs".to_string()
            } else {
                key.to_lowercase()
            };
            external_references.push(ExternalReference::new(reference_type, url.clone()));
        }
    }

    PackageMetadata {
        publisher: info.author.filter(|author| !author.is_empty()),
        description: info.summary,
        license: info.license.filter(|license| !license.is_empty()),
        external_references,
    }
}
