//! Document assembly: a pure structural merge of header metadata with
//! the ordered component and dependency sequences an adapter produced.
//!
//! Apart from the freshly generated serial number the merge is
//! deterministic given deterministic template input.

use std::collections::HashMap;

use serde_json::Value;
use uuid::Uuid;

use crate::sbom_generation::domain::{DependencyEdge, SubjectInfo, ToolInfo};
use crate::sbom_generation::services::materializer::substitute;
use crate::shared::Result;

/// Fills the document skeleton and attaches the component records and
/// dependency edges in the order given. The caller is responsible for
/// placing the top-level edge first in `dependencies`.
pub fn assemble(
    skeleton: &Value,
    package_manager: &str,
    subject: &SubjectInfo,
    tool: &ToolInfo,
    components: Vec<Value>,
    dependencies: Vec<DependencyEdge>,
) -> Result<Value> {
    let replacements: HashMap<&str, String> = HashMap::from([
        ("serialNumber", Uuid::new_v4().to_string()),
        ("component_bom_ref", subject.bom_ref.clone()),
        ("component_name", subject.name.clone()),
        ("component_version", subject.version.clone()),
        ("tool_vendor", tool.vendor.clone()),
        ("tool_name", tool.name.clone()),
        ("tool_version", tool.version.clone()),
        ("package_manager", package_manager.to_string()),
    ]);

    let mut document = substitute(skeleton, &replacements)?;

    if let Some(object) = document.as_object_mut() {
        object.insert("components".to_string(), Value::Array(components));
        object.insert(
            "dependencies".to_string(),
            serde_json::to_value(dependencies)?,
        );
    }

    Ok(document)
}
