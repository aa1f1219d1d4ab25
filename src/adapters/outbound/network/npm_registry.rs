use serde::Deserialize;
use serde_json::Value;

use super::{build_client, fetch_with_retry, validate_url_component};
use crate::ports::outbound::RegistryClient;
use crate::sbom_generation::domain::{ExternalReference, PackageMetadata};
use crate::shared::error::SbomError;
use crate::shared::Result;

const REGISTRY_BASE_URL: &str = "https://registry.npmjs.org";

/// Version document of the npm registry
/// (`https://registry.npmjs.org/{name}/{version}`). Only the fields the
/// pipeline consumes are modeled.
#[derive(Debug, Deserialize)]
struct NpmVersionDocument {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    license: Option<Value>,
    #[serde(default)]
    author: Option<NpmAuthor>,
    #[serde(default)]
    repository: Option<NpmRepository>,
    #[serde(default)]
    homepage: Option<String>,
}

/// `author` can be a shorthand string or a structured object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NpmAuthor {
    Name(String),
    Detailed {
        #[serde(default)]
        name: Option<String>,
    },
}

impl NpmAuthor {
    fn name(&self) -> Option<String> {
        match self {
            NpmAuthor::Name(name) => Some(name.clone()),
            NpmAuthor::Detailed { name } => name.clone(),
        }
    }
}

/// `repository` can likewise be a bare URL string or `{type, url}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NpmRepository {
    Url(String),
    Detailed {
        #[serde(default)]
        url: Option<String>,
    },
}

impl NpmRepository {
    fn url(&self) -> Option<String> {
        match self {
            NpmRepository::Url(url) => Some(url.clone()),
            NpmRepository::Detailed { url } => url.clone(),
        }
    }
}

/// NpmRegistryClient adapter implementing the RegistryClient port
/// against registry.npmjs.org.
pub struct NpmRegistryClient {
    client: reqwest::blocking::Client,
}

impl NpmRegistryClient {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: build_client()?,
        })
    }

    fn fetch_version_document(&self, name: &str, version: &str) -> Result<NpmVersionDocument> {
        // Scoped names keep their @scope/ prefix, so '/' is allowed here.
        validate_url_component(name, "Package name", true)?;
        validate_url_component(version, "Version", false)?;

        let url = format!(
            "{}/{}/{}",
            REGISTRY_BASE_URL,
            name,
            urlencoding::encode(version)
        );

        let response = self.client.get(&url).send()?;
        if !response.status().is_success() {
            anyhow::bail!("npm registry returned status code {}", response.status());
        }

        let document: NpmVersionDocument = response.json()?;
        Ok(document)
    }
}

impl RegistryClient for NpmRegistryClient {
    fn fetch_metadata(&self, package_name: &str, version: &str) -> Result<PackageMetadata> {
        let document = fetch_with_retry(|| self.fetch_version_document(package_name, version))
            .map_err(|error| SbomError::RegistryFetchError {
                package: package_name.to_string(),
                version: version.to_string(),
                details: error.to_string(),
            })?;

        Ok(into_metadata(document))
    }
}

fn into_metadata(document: NpmVersionDocument) -> PackageMetadata {
    let mut external_references = Vec::new();
    if let Some(url) = document.repository.as_ref().and_then(NpmRepository::url) {
        if !url.is_empty() {
            external_references.push(ExternalReference::new("vcs", url));
        }
    }
    if let Some(homepage) = document.homepage.filter(|url| !url.is_empty()) {
        external_references.push(ExternalReference::new("homepage", homepage));
    }

    PackageMetadata {
        publisher: document.author.as_ref().and_then(NpmAuthor::name),
        description: document.description,
        license: document.license.as_ref().and_then(license_id),
        external_references,
    }
}

/// `license` is usually an SPDX string, but old packages use the
/// deprecated `{type, url}` object form.
fn license_id(license: &Value) -> Option<String> {
    match license {
        Value::String(id) => Some(id.clone()),
        Value::Object(object) => object
            .get("type")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}
