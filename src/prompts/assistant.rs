//! Assistant types recognized by the renderer

use std::str::FromStr;

use serde::Serialize;

use crate::error::GenbaError;

/// The AI assistant a prompt is rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AssistantType {
    /// GitHub Copilot
    Copilot,
    /// Anthropic Claude
    Claude,
}

impl AssistantType {
    pub const ALL: [AssistantType; 2] = [AssistantType::Copilot, AssistantType::Claude];

    /// Identifier used on the command line and in template file names
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Copilot => "copilot",
            Self::Claude => "claude",
        }
    }

    /// Template file name for this assistant, e.g. `copilot_prompt.md.hbs`
    pub fn template_file_name(&self, output_ext: &str, engine_ext: &str) -> String {
        format!("{}_prompt.{}.{}", self.as_str(), output_ext, engine_ext)
    }
}

impl std::fmt::Display for AssistantType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssistantType {
    type Err = GenbaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "copilot" => Ok(Self::Copilot),
            "claude" => Ok(Self::Claude),
            _ => Err(GenbaError::UnknownAssistant { name: s.to_string() }),
        }
    }
}
