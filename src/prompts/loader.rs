//! Prompt Loader
//!
//! Locates the template for an assistant and renders a project record into it.

use std::path::{Path, PathBuf};

use handlebars::{Handlebars, handlebars_helper};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use super::assistant::AssistantType;
use crate::config::TemplatesConfig;
use crate::error::{GenbaError, Result};
use crate::knowledge::ProjectRecord;

handlebars_helper!(json: |v: Json| serde_json::to_string_pretty(v).unwrap_or_default());

/// Values available to a prompt template
///
/// The four content fields are raw JSON. A plain `{{rules}}` prints strings
/// as-is but flattens arrays to `[a, b]` and objects to `[object]`; use
/// `{{#each rules}}` to walk them or `{{json rules}}` to print them whole.
#[derive(Debug, Clone, Serialize)]
pub struct PromptContext<'a> {
    /// The assistant being prompted (`copilot`, `claude`)
    pub assistant: &'static str,
    pub project_name: &'a str,
    pub design_history: &'a Value,
    pub bug_reports: &'a Value,
    pub rules: &'a Value,
    pub prompts: &'a Value,
    /// Extra keys from the project object
    pub extra: &'a Map<String, Value>,
}

impl<'a> PromptContext<'a> {
    pub fn new(assistant: AssistantType, record: &'a ProjectRecord) -> Self {
        Self {
            assistant: assistant.as_str(),
            project_name: &record.name,
            design_history: &record.design_history,
            bug_reports: &record.bug_reports,
            rules: &record.rules,
            prompts: &record.prompts,
            extra: &record.extra,
        }
    }
}

/// Loads and renders prompt templates
pub struct PromptLoader {
    /// Handlebars template engine
    hbs: Handlebars<'static>,
    /// User override directory (e.g., `.genba/templates/`)
    override_dir: Option<PathBuf>,
    /// Template directory (e.g., `templates/`)
    template_dir: PathBuf,
    /// Output extension in the file name (`md` in `copilot_prompt.md.hbs`)
    output_ext: String,
    /// Template engine extension (`hbs` in `copilot_prompt.md.hbs`)
    engine_ext: String,
}

impl PromptLoader {
    /// Create a loader from template configuration
    ///
    /// The override directory is only consulted if it exists.
    pub fn new(config: &TemplatesConfig) -> Self {
        debug!(?config, "PromptLoader::new: called");
        let override_dir = config.override_dir.exists().then(|| config.override_dir.clone());
        if override_dir.is_some() {
            debug!(override_dir = ?config.override_dir, "PromptLoader::new: user override directory found");
        }

        Self {
            hbs: build_registry(),
            override_dir,
            template_dir: config.dir.clone(),
            output_ext: config.output_ext.clone(),
            engine_ext: config.engine_ext.clone(),
        }
    }

    /// Create a loader reading only from `template_dir` with default file naming
    pub fn with_template_dir(template_dir: impl AsRef<Path>) -> Self {
        let defaults = TemplatesConfig::default();
        Self {
            hbs: build_registry(),
            override_dir: None,
            template_dir: template_dir.as_ref().to_path_buf(),
            output_ext: defaults.output_ext,
            engine_ext: defaults.engine_ext,
        }
    }

    /// Paths checked for an assistant's template, in priority order
    pub fn candidates(&self, assistant: AssistantType) -> Vec<PathBuf> {
        let file_name = assistant.template_file_name(&self.output_ext, &self.engine_ext);
        self.override_dir
            .iter()
            .chain(std::iter::once(&self.template_dir))
            .map(|dir| dir.join(&file_name))
            .collect()
    }

    /// Find the template file for an assistant
    pub fn locate(&self, assistant: AssistantType) -> Result<PathBuf> {
        debug!(%assistant, "PromptLoader::locate: called");
        let candidates = self.candidates(assistant);

        if let Some(path) = candidates.iter().find(|p| p.is_file()) {
            debug!(?path, "PromptLoader::locate: found");
            return Ok(path.clone());
        }

        debug!(%assistant, "PromptLoader::locate: not found anywhere");
        Err(GenbaError::TemplateNotFound {
            assistant: assistant.to_string(),
            searched: candidates,
        })
    }

    fn load_template(&self, assistant: AssistantType) -> Result<(PathBuf, String)> {
        let path = self.locate(assistant)?;
        let source = std::fs::read_to_string(&path).map_err(|source| GenbaError::TemplateRead {
            path: path.clone(),
            source,
        })?;
        Ok((path, source))
    }

    /// Render a project record with the assistant's template
    ///
    /// The template is registered under its path, so it is parsed once.
    pub fn render(&mut self, assistant: AssistantType, record: &ProjectRecord) -> Result<String> {
        debug!(%assistant, project = %record.name, "PromptLoader::render: called");
        let (path, source) = self.load_template(assistant)?;
        let name = path.display().to_string();

        self.hbs
            .register_template_string(&name, &source)
            .map_err(|e| GenbaError::TemplateSyntax {
                name: name.clone(),
                source: Box::new(e),
            })?;

        info!("Rendering template '{}' for project '{}'", name, record.name);
        let context = PromptContext::new(assistant, record);
        self.hbs.render(&name, &context).map_err(|e| GenbaError::Render {
            name,
            source: Box::new(e),
        })
    }

    /// Render using an assistant identifier string
    ///
    /// Fails with `UnknownAssistant` before any template is touched if the
    /// identifier is not recognized.
    pub fn render_named(&mut self, assistant: &str, record: &ProjectRecord) -> Result<String> {
        let assistant: AssistantType = assistant.parse()?;
        self.render(assistant, record)
    }
}

fn build_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(handlebars::no_escape);
    hbs.register_helper("json", Box::new(json));
    hbs
}
