//! Genba - project knowledge prompt generator
//!
//! Reads a knowledge file describing one or more software projects (design
//! history, bug reports, rules, prior prompts) and renders a selected project
//! into a prompt for an AI assistant.
//!
//! # Modules
//!
//! - [`knowledge`] - Knowledge document loading and project selection
//! - [`prompts`] - Assistant types and template rendering
//! - [`generator`] - Select-then-render pipeline
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface
//! - [`error`] - Error taxonomy

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod knowledge;
pub mod prompts;

// Re-export commonly used types
pub use config::{Config, SelectionConfig, TemplatesConfig};
pub use error::{ErrorKind, GenbaError};
pub use generator::{GeneratedPrompt, PromptRequest, generate};
pub use knowledge::{KnowledgeDocument, ProjectRecord, Selection, load_and_select};
pub use prompts::{AssistantType, PromptContext, PromptLoader};

/// Knowledge file read when neither the CLI nor the config names one
pub const DEFAULT_KNOWLEDGE_FILE: &str = "genba_ai_knowledge.json";
