use serde::{Deserialize, Serialize};

/// Directed "depends on" relation from one component reference to the
/// references it pulls in.
///
/// An element of `depends_on` may name a component that never made it
/// into the component list (a child declared by version that was not
/// resolved). That is tolerated, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
    #[serde(rename = "ref")]
    pub bom_ref: String,
    #[serde(rename = "dependsOn")]
    pub depends_on: Vec<String>,
}

impl DependencyEdge {
    pub fn new(bom_ref: impl Into<String>, depends_on: Vec<String>) -> Self {
        Self {
            bom_ref: bom_ref.into(),
            depends_on,
        }
    }
}
