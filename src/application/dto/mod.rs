/// Outcome of one ecosystem's generation run, for top-level reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub package_manager: String,
    pub component_count: usize,
    pub dependency_count: usize,
}

impl GenerationSummary {
    pub fn new(
        package_manager: impl Into<String>,
        component_count: usize,
        dependency_count: usize,
    ) -> Self {
        Self {
            package_manager: package_manager.into(),
            component_count,
            dependency_count,
        }
    }
}
