//! Mock implementations of the outbound ports for integration tests.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

use polybom::prelude::*;
use polybom::sbom_generation::ecosystems::maven::CycloneDxBom;
use polybom::sbom_generation::ecosystems::npm::{NpmManifest, PackageLock};
use serde_json::Value;

/// CycloneDxProducer backed by a fixed JSON document.
pub struct StaticCycloneDxProducer {
    document: &'static str,
}

impl StaticCycloneDxProducer {
    pub fn new(document: &'static str) -> Self {
        Self { document }
    }
}

impl CycloneDxProducer for StaticCycloneDxProducer {
    fn produce(&self) -> Result<CycloneDxBom> {
        Ok(serde_json::from_str(self.document)?)
    }
}

/// LockfileProducer backed by fixed lock-file and manifest JSON.
pub struct StaticLockfileProducer {
    lockfile: &'static str,
    manifest: &'static str,
}

impl StaticLockfileProducer {
    pub fn new(lockfile: &'static str, manifest: &'static str) -> Self {
        Self { lockfile, manifest }
    }
}

impl LockfileProducer for StaticLockfileProducer {
    fn produce(&self) -> Result<(PackageLock, NpmManifest)> {
        Ok((
            serde_json::from_str(self.lockfile)?,
            serde_json::from_str(self.manifest)?,
        ))
    }
}

/// DependencyTreeProducer backed by fixed report text.
pub struct StaticTreeProducer {
    tree: &'static str,
    relevant: Vec<&'static str>,
    requirements: &'static str,
}

impl StaticTreeProducer {
    pub fn new(tree: &'static str, relevant: Vec<&'static str>, requirements: &'static str) -> Self {
        Self {
            tree,
            relevant,
            requirements,
        }
    }
}

impl DependencyTreeProducer for StaticTreeProducer {
    fn produce(&self) -> Result<DependencyTreeReport> {
        Ok(DependencyTreeReport {
            tree: self.tree.to_string(),
            relevant_packages: self
                .relevant
                .iter()
                .map(|entry| entry.to_string())
                .collect::<BTreeSet<_>>(),
            requirements: self.requirements.to_string(),
        })
    }
}

/// RegistryClient with canned answers; unknown packages fail the lookup.
#[derive(Default)]
pub struct MockRegistry {
    answers: HashMap<(String, String), PackageMetadata>,
}

impl MockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_package(
        mut self,
        name: &str,
        version: &str,
        publisher: &str,
        license: &str,
    ) -> Self {
        self.answers.insert(
            (name.to_string(), version.to_string()),
            PackageMetadata {
                publisher: Some(publisher.to_string()),
                description: Some(format!("{} description", name)),
                license: Some(license.to_string()),
                external_references: vec![ExternalReference::new(
                    "vcs",
                    format!("https://github.com/example/{}", name),
                )],
            },
        );
        self
    }

}

impl RegistryClient for MockRegistry {
    fn fetch_metadata(&self, package_name: &str, version: &str) -> Result<PackageMetadata> {
        self.answers
            .get(&(package_name.to_string(), version.to_string()))
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no canned answer for {}@{}", package_name, version))
    }
}

/// TemplateStore serving the templates shipped with the crate.
pub struct EmbeddedTemplateStore;

impl TemplateStore for EmbeddedTemplateStore {
    fn document_skeleton(&self) -> Result<Value> {
        Ok(serde_json::from_str(include_str!(
            "../../templates/sbom_template.json"
        ))?)
    }

    fn component_template(&self) -> Result<Value> {
        Ok(serde_json::from_str(include_str!(
            "../../templates/sbom_component_template.json"
        ))?)
    }
}

/// OutputPresenter capturing the document for assertions.
#[derive(Clone, Default)]
pub struct CapturePresenter {
    buffer: Rc<RefCell<Option<String>>>,
}

impl CapturePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self) -> Value {
        let content = self.buffer.borrow();
        serde_json::from_str(content.as_ref().expect("no document was presented")).unwrap()
    }
}

impl OutputPresenter for CapturePresenter {
    fn present(&self, content: &str) -> Result<()> {
        *self.buffer.borrow_mut() = Some(content.to_string());
        Ok(())
    }
}

/// ProgressReporter that swallows all output.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn report(&self, _message: &str) {}
    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}
    fn report_error(&self, _message: &str) {}
    fn report_completion(&self, _message: &str) {}
}
