use crate::application::dto::GenerationSummary;
use crate::ports::outbound::{CycloneDxProducer, OutputPresenter, ProgressReporter, TemplateStore};
use crate::sbom_generation::domain::ToolInfo;
use crate::sbom_generation::ecosystems::maven;
use crate::sbom_generation::services::{assemble, materialize_component};
use crate::shared::Result;

const PACKAGE_MANAGER: &str = "maven";

/// GenerateMavenSbom use case: drive the Maven toolchain, canonicalize
/// the CycloneDX document it produces, and re-emit it in the project
/// schema.
///
/// No registry enrichment on this path: the CycloneDX input already
/// carries descriptions, licenses, and external references, which are
/// passed through verbatim.
pub struct GenerateMavenSbom<B, T, W, P> {
    producer: B,
    templates: T,
    presenter: W,
    reporter: P,
}

impl<B, T, W, P> GenerateMavenSbom<B, T, W, P>
where
    B: CycloneDxProducer,
    T: TemplateStore,
    W: OutputPresenter,
    P: ProgressReporter,
{
    pub fn new(producer: B, templates: T, presenter: W, reporter: P) -> Self {
        Self {
            producer,
            templates,
            presenter,
            reporter,
        }
    }

    pub fn execute(&self) -> Result<GenerationSummary> {
        self.reporter
            .report("🔧 Invoking the Maven CycloneDX plugin...");
        let bom = self.producer.produce()?;
        self.reporter.report(&format!(
            "✅ Loaded CycloneDX document with {} component(s)",
            bom.components.len()
        ));

        let (components, dependencies) = maven::normalize(&bom);
        let subject = maven::subject(&bom);

        let component_template = self.templates.component_template()?;
        let records = components
            .iter()
            .map(|component| materialize_component(&component_template, component, PACKAGE_MANAGER))
            .collect::<Result<Vec<_>>>()?;

        let summary =
            GenerationSummary::new(PACKAGE_MANAGER, records.len(), dependencies.len());

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
            .report_completion("🎉 Maven SBOM generated successfully");

        Ok(summary)
    }
}
