//! Component materialization: merging a normalized component into the
//! document's component record via the fixed template schema.
//!
//! Placeholder substitution is a typed visitor over the JSON variants
//! (object, array, string, scalar) rather than duck-typed recursion.
//! `{{` and `}}` escape to literal braces; a placeholder with no value
//! is a fatal formatting error, never silently passed through.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::sbom_generation::domain::NormalizedComponent;
use crate::shared::error::SbomError;
use crate::shared::Result;

const DEFAULT_PUBLISHER: &str = "Unknown";
const DEFAULT_DESCRIPTION: &str = "No description available";
const DEFAULT_LICENSE: &str = "Unknown";

/// Recursively substitutes `{placeholder}` markers in every string of a
/// JSON tree.
pub fn substitute(value: &Value, replacements: &HashMap<&str, String>) -> Result<Value> {
    match value {
        Value::Object(map) => {
            let mut rendered = Map::with_capacity(map.len());
            for (key, item) in map {
                rendered.insert(key.clone(), substitute(item, replacements)?);
            }
            Ok(Value::Object(rendered))
        }
        Value::Array(items) => {
            let rendered = items
                .iter()
                .map(|item| substitute(item, replacements))
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::Array(rendered))
        }
        Value::String(text) => Ok(Value::String(render(text, replacements)?)),
        scalar => Ok(scalar.clone()),
    }
}

/// Renders one template string, resolving `{name}` markers.
fn render(template: &str, replacements: &HashMap<&str, String>) -> Result<String> {
    let mut output = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(character) = chars.next() {
        match character {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                output.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                output.push('}');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(inner) => name.push(inner),
                        None => {
                            return Err(SbomError::MalformedTemplate {
                                details: format!("unterminated placeholder in '{}'", template),
                            }
                            .into())
                        }
                    }
                }
                let value = replacements.get(name.as_str()).ok_or_else(|| {
                    SbomError::UnresolvedPlaceholder {
                        placeholder: name.clone(),
                    }
                })?;
                output.push_str(value);
            }
            '}' => {
                return Err(SbomError::MalformedTemplate {
                    details: format!("single '}}' encountered in '{}'", template),
                }
                .into())
            }
            other => output.push(other),
        }
    }

    Ok(output)
}

/// Fills the component template for one normalized component.
///
/// All canonical placeholders are always supplied, so the template is
/// free to use any subset of them. Maven's verbatim `licenses` and
/// `externalReferences` arrays override the templated fields after
/// substitution; on the registry-backed paths the enrichment links
/// replace the template's empty `externalReferences` array.
pub fn materialize_component(
    template: &Value,
    component: &NormalizedComponent,
    package_manager: &str,
) -> Result<Value> {
    let metadata = &component.metadata;
    let replacements: HashMap<&str, String> = HashMap::from([
        ("component_bom_ref", component.bom_ref.clone()),
        ("component_name", component.name.clone()),
        ("component_group", component.group.clone()),
        ("component_version", component.version.clone()),
        (
            "component_publisher",
            metadata
                .publisher
                .clone()
                .unwrap_or_else(|| DEFAULT_PUBLISHER.to_string()),
        ),
        (
            "component_description",
            metadata
                .description
                .clone()
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        ),
        ("component_type", component.component_type.clone()),
        ("component_purl", component.purl.clone()),
        ("component_scope", component.scope.clone()),
        ("package_manager", package_manager.to_string()),
        (
            "license_id",
            metadata
                .license
                .clone()
                .unwrap_or_else(|| DEFAULT_LICENSE.to_string()),
        ),
    ]);

    let mut record = substitute(template, &replacements)?;

    if let Some(object) = record.as_object_mut() {
        if let Some(licenses) = &component.licenses_passthrough {
            object.insert("licenses".to_string(), licenses.clone());
        }
        let external_references = match &component.external_references_passthrough {
            Some(raw) => raw.clone(),
            None => serde_json::to_value(&metadata.external_references)?,
        };
        object.insert("externalReferences".to_string(), external_references);
    }

    Ok(record)
}
