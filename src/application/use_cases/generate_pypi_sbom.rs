use crate::application::dto::GenerationSummary;
use crate::ports::outbound::{
    DependencyTreeProducer, OutputPresenter, ProgressReporter, RegistryClient, TemplateStore,
};
use crate::sbom_generation::domain::{NormalizedComponent, SubjectInfo, ToolInfo};
use crate::sbom_generation::ecosystems::pypi;
use crate::sbom_generation::services::{assemble, materialize_component, MetadataEnricher};
use crate::shared::Result;

const PACKAGE_MANAGER: &str = "pypi";

/// GeneratePypiSbom use case: install the requirements into a fresh
/// virtualenv, parse the dependency-tree report, enrich each parent
/// entry from PyPI, and assemble the document.
pub struct GeneratePypiSbom<D, R, T, W, P> {
    producer: D,
    registry: R,
    templates: T,
    presenter: W,
    reporter: P,
}

impl<D, R, T, W, P> GeneratePypiSbom<D, R, T, W, P>
where
    D: DependencyTreeProducer,
    R: RegistryClient,
    T: TemplateStore,
    W: OutputPresenter,
    P: ProgressReporter,
{
    pub fn new(producer: D, registry: R, templates: T, presenter: W, reporter: P) -> Self {
        Self {
            producer,
            registry,
            templates,
            presenter,
            reporter,
        }
    }

    pub fn execute(&self) -> Result<GenerationSummary> {
        self.reporter
            .report("🔧 Installing requirements into an isolated environment...");
        let report = self.producer.produce()?;

        let parent_map = pypi::parse_dependency_tree(&report.tree, &report.relevant_packages);
        self.reporter.report(&format!(
            "✅ Detected {} relevant package(s)",
            parent_map.len()
        ));

        let subject = SubjectInfo::for_package_manager(PACKAGE_MANAGER);
        let component_template = self.templates.component_template()?;
        let enricher = MetadataEnricher::new(&self.registry, &self.reporter);

        let total = parent_map.len();
        let mut records = Vec::with_capacity(total);
        let mut dependencies = Vec::with_capacity(total + 1);

        for (index, (parent, children)) in parent_map.iter().enumerate() {
            // Parent keys come from pip freeze and pipdeptree output;
            // anything without the `==` separator is unusable.
            let Some((name, version)) = parent.split_once("==") else {
                self.reporter
                    .report_error(&format!("⚠️  Skipping malformed entry '{}'", parent));
                continue;
            };
            let name = name.to_lowercase();
            self.reporter.report_progress(index + 1, total, Some(&name));

            let metadata = enricher.enrich(&name, version);
            let component = NormalizedComponent::from_registry(
                name.clone(),
                version,
                format!("{}@{}", name, version),
                metadata,
            );
            records.push(materialize_component(
                &component_template,
                &component,
                PACKAGE_MANAGER,
            )?);

            if let Some(edge) = pypi::edge_for_parent(parent, children) {
                dependencies.push(edge);
            }
        }
        self.reporter.report_completion("✅ Enrichment complete");

        dependencies.insert(
            0,
            pypi::top_level_edge(&report.requirements, &subject.bom_ref),
        );

        let summary = GenerationSummary::new(PACKAGE_MANAGER, records.len(), dependencies.len());

        let skeleton = self.templates.document_skeleton()?;
        let document = assemble(
            &skeleton,
            PACKAGE_MANAGER,
            &subject,
            &ToolInfo::default(),
            records,
            dependencies,
        )?;

        self.presenter
            .present(&serde_json::to_string_pretty(&document)?)?;
        self.reporter
            .report_completion("🎉 PyPI SBOM generated successfully");

        Ok(summary)
    }
}
