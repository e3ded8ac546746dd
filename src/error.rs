//! Error types for knowledge loading and prompt rendering

use std::path::PathBuf;
use thiserror::Error;

/// Broad class of a [`GenbaError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The knowledge file is missing, malformed, or lacks required structure
    Data,
    /// The assistant type or its template cannot be resolved
    Configuration,
}

/// Errors that can occur while loading knowledge or rendering prompts
#[derive(Debug, Error)]
pub enum GenbaError {
    #[error("Knowledge file not found: {path}")]
    KnowledgeNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read knowledge file {path}")]
    KnowledgeRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed knowledge document {path}: {source}")]
    KnowledgeParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Knowledge document {path} has no projects")]
    NoProjects { path: PathBuf },

    #[error("Project not found: {name}")]
    ProjectNotFound { name: String },

    #[error("Unknown assistant type: {name} (expected one of: copilot, claude)")]
    UnknownAssistant { name: String },

    #[error("Template for {assistant} not found (searched: {})", format_paths(.searched))]
    TemplateNotFound { assistant: String, searched: Vec<PathBuf> },

    #[error("Failed to read template {path}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid template {name}: {source}")]
    TemplateSyntax {
        name: String,
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    #[error("Failed to render template {name}: {source}")]
    Render {
        name: String,
        #[source]
        source: Box<handlebars::RenderError>,
    },
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths.iter().map(|p| p.display().to_string()).collect::<Vec<_>>().join(", ")
}

impl GenbaError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenbaError::KnowledgeNotFound { .. }
            | GenbaError::KnowledgeRead { .. }
            | GenbaError::KnowledgeParse { .. }
            | GenbaError::NoProjects { .. }
            | GenbaError::ProjectNotFound { .. } => ErrorKind::Data,
            GenbaError::UnknownAssistant { .. }
            | GenbaError::TemplateNotFound { .. }
            | GenbaError::TemplateRead { .. }
            | GenbaError::TemplateSyntax { .. }
            | GenbaError::Render { .. } => ErrorKind::Configuration,
        }
    }

    /// Check if this error comes from the knowledge data
    pub fn is_data_error(&self) -> bool {
        self.kind() == ErrorKind::Data
    }

    /// Check if this error comes from assistant or template configuration
    pub fn is_configuration_error(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }
}

pub type Result<T> = std::result::Result<T, GenbaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert!(GenbaError::NoProjects { path: PathBuf::from("k.json") }.is_data_error());
        assert!(
            GenbaError::ProjectNotFound {
                name: "Foo".to_string()
            }
            .is_data_error()
        );
        assert!(
            GenbaError::UnknownAssistant {
                name: "gpt".to_string()
            }
            .is_configuration_error()
        );
        assert!(
            GenbaError::TemplateNotFound {
                assistant: "claude".to_string(),
                searched: vec![],
            }
            .is_configuration_error()
        );
    }

    #[test]
    fn test_template_not_found_lists_searched_paths() {
        let err = GenbaError::TemplateNotFound {
            assistant: "copilot".to_string(),
            searched: vec![
                PathBuf::from(".genba/templates/copilot_prompt.md.hbs"),
                PathBuf::from("templates/copilot_prompt.md.hbs"),
            ],
        };

        let msg = err.to_string();
        assert!(msg.contains("copilot"));
        assert!(msg.contains(".genba/templates/copilot_prompt.md.hbs"));
        assert!(msg.contains(", templates/copilot_prompt.md.hbs"));
    }

    #[test]
    fn test_unknown_assistant_message() {
        let err = GenbaError::UnknownAssistant {
            name: "gemini".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("gemini"));
        assert!(msg.contains("copilot, claude"));
    }
}
