/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces the generation core uses to reach
/// external systems: package-manager processes, package registries, the
/// template store, the output destination, and the console.
pub mod output_presenter;
pub mod package_manager;
pub mod progress_reporter;
pub mod registry_client;
pub mod template_store;

pub use output_presenter::OutputPresenter;
pub use package_manager::{
    CycloneDxProducer, DependencyTreeProducer, DependencyTreeReport, LockfileProducer,
};
pub use progress_reporter::ProgressReporter;
pub use registry_client::RegistryClient;
pub use template_store::TemplateStore;
