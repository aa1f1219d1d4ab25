use std::path::PathBuf;
use thiserror::Error;

/// Application-specific errors for SBOM generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping user-facing messages with actionable hints in one place.
///
/// The taxonomy matters: tool invocation failures, missing manifests and
/// template mismatches abort a run; a single registry lookup failure does
/// not (the enricher catches it and degrades to local fields).
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Manifest not found: {path}\n\n💡 Hint: {suggestion}")]
    ManifestNotFound { path: PathBuf, suggestion: String },

    #[error("'{tool}' is not installed or not on PATH\n\n💡 Hint: install {tool} and make sure it is reachable from your shell")]
    ToolNotFound { tool: String },

    #[error("'{tool}' exited with an error\nDetails: {details}")]
    ToolInvocationFailed { tool: String, details: String },

    #[error("Failed to parse {kind} output: {path}\nDetails: {details}")]
    ToolOutputParseError {
        kind: String,
        path: PathBuf,
        details: String,
    },

    #[error("Template file not found: {path}\n\n💡 Hint: point --templates-dir at a directory containing the document and component templates")]
    TemplateNotFound { path: PathBuf },

    #[error("Failed to parse template file: {path}\nDetails: {details}")]
    TemplateParseError { path: PathBuf, details: String },

    #[error("Template references placeholder '{placeholder}' which has no value")]
    UnresolvedPlaceholder { placeholder: String },

    #[error("Malformed template string: {details}")]
    MalformedTemplate { details: String },

    #[error("Failed to fetch registry metadata for {package}@{version}\nDetails: {details}")]
    RegistryFetchError {
        package: String,
        version: String,
        details: String,
    },

    #[error("Failed to read file: {path}\nDetails: {details}")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_not_found_display() {
        let error = SbomError::ManifestNotFound {
            path: PathBuf::from("/project/input/pom.xml"),
            suggestion: "place pom.xml under the input directory".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Manifest not found"));
        assert!(display.contains("/project/input/pom.xml"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_tool_invocation_failed_display() {
        let error = SbomError::ToolInvocationFailed {
            tool: "mvn".to_string(),
            details: "BUILD FAILURE".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("'mvn' exited with an error"));
        assert!(display.contains("BUILD FAILURE"));
    }

    #[test]
    fn test_unresolved_placeholder_display() {
        let error = SbomError::UnresolvedPlaceholder {
            placeholder: "component_flavor".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("component_flavor"));
        assert!(display.contains("no value"));
    }

    #[test]
    fn test_registry_fetch_error_display() {
        let error = SbomError::RegistryFetchError {
            package: "left-pad".to_string(),
            version: "1.3.0".to_string(),
            details: "status 404".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("left-pad@1.3.0"));
        assert!(display.contains("status 404"));
    }
}
