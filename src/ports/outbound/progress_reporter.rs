/// ProgressReporter port for reporting progress during operations
///
/// Abstracts progress reporting (e.g., to stderr) so long-running
/// enrichment loops can give feedback without tying the core to a
/// particular console library.
pub trait ProgressReporter {
    /// Reports a status message
    fn report(&self, message: &str);

    /// Reports progress against a known total
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
