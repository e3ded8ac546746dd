//! Prompt Template System
//!
//! Renders a project record into an assistant-specific prompt.
//!
//! Template loading chain:
//! 1. `{override-dir}/{assistant}_prompt.{ext}.hbs` (user override, if the directory exists)
//! 2. `{template-dir}/{assistant}_prompt.{ext}.hbs`
//!
//! Templates use Handlebars syntax. Substitution is literal: HTML escaping is
//! turned off so record content reaches the assistant exactly as written.

mod assistant;
mod loader;

pub use assistant::AssistantType;
pub use loader::{PromptContext, PromptLoader};
