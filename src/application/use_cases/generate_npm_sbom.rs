use crate::application::dto::GenerationSummary;
use crate::ports::outbound::{
    LockfileProducer, OutputPresenter, ProgressReporter, RegistryClient, TemplateStore,
};
use crate::sbom_generation::domain::{DependencyEdge, NormalizedComponent, SubjectInfo, ToolInfo};
use crate::sbom_generation::ecosystems::npm;
use crate::sbom_generation::services::{assemble, materialize_component, MetadataEnricher};
use crate::shared::Result;

const PACKAGE_MANAGER: &str = "npm";

/// GenerateNpmSbom use case: resolve the manifest to a lock-file in an
/// isolated directory, normalize the flat package map, enrich each
/// surviving entry from the npm registry, and assemble the document.
pub struct GenerateNpmSbom<L, R, T, W, P> {
    producer: L,
    registry: R,
    templates: T,
    presenter: W,
    reporter: P,
}

impl<L, R, T, W, P> GenerateNpmSbom<L, R, T, W, P>
where
    L: LockfileProducer,
    R: RegistryClient,
    T: TemplateStore,
    W: OutputPresenter,
    P: ProgressReporter,
{
    pub fn new(producer: L, registry: R, templates: T, presenter: W, reporter: P) -> Self {
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
            .report("🔧 Resolving package.json to a lock-file...");
        let (lockfile, manifest) = self.producer.produce()?;

        let packages = npm::normalize_lockfile(&lockfile);
        self.reporter.report(&format!(
            "✅ Detected {} unique package(s)",
            packages.len()
        ));

        let subject = SubjectInfo::for_package_manager(PACKAGE_MANAGER);
        let component_template = self.templates.component_template()?;
        let enricher = MetadataEnricher::new(&self.registry, &self.reporter);

        let total = packages.len();
        let mut records = Vec::with_capacity(total);
        let mut dependencies = Vec::with_capacity(total + 1);

        for (index, package) in packages.iter().enumerate() {
            self.reporter
                .report_progress(index + 1, total, Some(&package.name));

            let metadata = enricher.enrich(&package.name, &package.version);
            let component = NormalizedComponent::from_registry(
                package.name.clone(),
                package.version.clone(),
                package.bare_ref.clone(),
                metadata,
            );
            records.push(materialize_component(
                &component_template,
                &component,
                PACKAGE_MANAGER,
            )?);
            dependencies.push(DependencyEdge::new(
                package.identity.clone(),
                package.depends_on.clone(),
            ));
        }
        self.reporter.report_completion("✅ Enrichment complete");

        dependencies.insert(0, npm::top_level_edge(&manifest, &subject.bom_ref));

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
            .report_completion("🎉 npm SBOM generated successfully");

        Ok(summary)
    }
}
