use crate::shared::Result;

/// OutputPresenter port for presenting the finished document
///
/// Abstracts the output destination (a per-ecosystem file path, stdout
/// in tests) from the use cases.
pub trait OutputPresenter {
    /// Presents the serialized SBOM content to the output destination
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails.
    fn present(&self, content: &str) -> Result<()>;
}
