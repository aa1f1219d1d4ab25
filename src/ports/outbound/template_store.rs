use serde_json::Value;

use crate::shared::Result;

/// TemplateStore port for loading the document skeleton and the
/// per-component field template.
///
/// # Errors
/// A missing or unparsable template file is fatal: without the schema
/// there is nothing meaningful to emit.
pub trait TemplateStore {
    /// The empty document skeleton with header placeholders.
    fn document_skeleton(&self) -> Result<Value>;

    /// The fixed component schema with field placeholders.
    fn component_template(&self) -> Result<Value>;
}
