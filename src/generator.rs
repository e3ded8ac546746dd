//! Select-then-render pipeline

use std::path::PathBuf;

use tracing::debug;

use crate::error::Result;
use crate::knowledge::KnowledgeDocument;
use crate::prompts::{AssistantType, PromptLoader};

/// Everything needed to produce one prompt
#[derive(Debug, Clone)]
pub struct PromptRequest {
    pub assistant: AssistantType,
    /// Project to select; the first project when absent
    pub project: Option<String>,
    pub knowledge_path: PathBuf,
    /// Reject unknown project names instead of falling back
    pub strict: bool,
}

/// A rendered prompt and how its project was chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPrompt {
    /// Name of the project that was rendered
    pub project: String,
    /// True when the requested project was missing and the first was used
    pub fallback: bool,
    pub text: String,
}

/// Load the knowledge file, select a project and render it
pub fn generate(request: &PromptRequest, loader: &mut PromptLoader) -> Result<GeneratedPrompt> {
    debug!(?request, "generate: called");
    let document = KnowledgeDocument::load(&request.knowledge_path)?;
    let selection = document.select(request.project.as_deref());
    let fallback = selection.is_fallback();

    let record = if request.strict {
        selection.into_strict()?
    } else {
        selection.record()
    };

    let text = loader.render(request.assistant, record)?;
    Ok(GeneratedPrompt {
        project: record.name.clone(),
        fallback,
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenbaError;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, PromptRequest, PromptLoader) {
        let temp = TempDir::new().unwrap();
        let knowledge = temp.path().join("knowledge.json");
        fs::write(
            &knowledge,
            r#"{"projects": [
                {"name": "Alpha", "design_history": "h1", "bug_reports": "b1", "rules": "r1", "prompts": "p1"},
                {"name": "Beta", "design_history": "h2", "bug_reports": "b2", "rules": "r2", "prompts": "p2"}
            ]}"#,
        )
        .unwrap();
        fs::write(
            temp.path().join("copilot_prompt.md.hbs"),
            "{{project_name}}: {{design_history}}",
        )
        .unwrap();

        let request = PromptRequest {
            assistant: AssistantType::Copilot,
            project: None,
            knowledge_path: knowledge,
            strict: false,
        };
        let loader = PromptLoader::with_template_dir(temp.path());
        (temp, request, loader)
    }

    #[test]
    fn test_generate_first_project() {
        let (_temp, request, mut loader) = fixture();
        let prompt = generate(&request, &mut loader).unwrap();
        assert_eq!(prompt.text, "Alpha: h1");
        assert_eq!(prompt.project, "Alpha");
        assert!(!prompt.fallback);
    }

    #[test]
    fn test_generate_named_project() {
        let (_temp, mut request, mut loader) = fixture();
        request.project = Some("Beta".to_string());
        assert_eq!(generate(&request, &mut loader).unwrap().text, "Beta: h2");
    }

    #[test]
    fn test_generate_fallback_is_reported() {
        let (_temp, mut request, mut loader) = fixture();
        request.project = Some("Gamma".to_string());

        let prompt = generate(&request, &mut loader).unwrap();
        assert_eq!(prompt.text, "Alpha: h1");
        assert!(prompt.fallback);
    }

    #[test]
    fn test_generate_strict_rejects_unknown() {
        let (_temp, mut request, mut loader) = fixture();
        request.project = Some("Gamma".to_string());
        request.strict = true;

        let err = generate(&request, &mut loader).unwrap_err();
        assert!(matches!(err, GenbaError::ProjectNotFound { .. }));
    }

    #[test]
    fn test_generate_missing_template() {
        let (_temp, mut request, mut loader) = fixture();
        request.assistant = AssistantType::Claude;
        assert!(generate(&request, &mut loader).unwrap_err().is_configuration_error());
    }
}
