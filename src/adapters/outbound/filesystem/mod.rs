mod sbom_writer;
mod template_store;

pub use sbom_writer::FileSystemWriter;
pub use template_store::FileTemplateStore;
