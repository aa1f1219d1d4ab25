use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::ports::outbound::TemplateStore;
use crate::shared::error::SbomError;
use crate::shared::Result;

const DOCUMENT_TEMPLATE_FILE: &str = "sbom_template.json";
const COMPONENT_TEMPLATE_FILE: &str = "sbom_component_template.json";

/// FileTemplateStore adapter: loads the document skeleton and component
/// template from a templates directory.
pub struct FileTemplateStore {
    templates_dir: PathBuf,
}

impl FileTemplateStore {
    pub fn new(templates_dir: PathBuf) -> Self {
        Self { templates_dir }
    }

    fn load(&self, file_name: &str) -> Result<Value> {
        let path = self.templates_dir.join(file_name);
        if !path.exists() {
            return Err(SbomError::TemplateNotFound { path }.into());
        }
        let content = std::fs::read_to_string(&path).map_err(|error| SbomError::FileReadError {
            path: path.clone(),
            details: error.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|error| {
            SbomError::TemplateParseError {
                path,
                details: error.to_string(),
            }
            .into()
        })
    }
}

impl TemplateStore for FileTemplateStore {
    fn document_skeleton(&self) -> Result<Value> {
        self.load(DOCUMENT_TEMPLATE_FILE)
    }

    fn component_template(&self) -> Result<Value> {
        self.load(COMPONENT_TEMPLATE_FILE)
    }
}
