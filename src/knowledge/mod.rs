//! Knowledge Store
//!
//! Loads the project knowledge document and selects one project record.
//!
//! Document layout:
//!
//! ```text
//! {
//!   "projects": [
//!     {
//!       "name": "...",
//!       "design_history": ...,
//!       "bug_reports": ...,
//!       "rules": ...,
//!       "prompts": ...
//!     }
//!   ]
//! }
//! ```
//!
//! The four content fields are opaque JSON values handed to the renderer
//! untouched.

mod document;

pub use document::{KnowledgeDocument, ProjectRecord, Selection, load_and_select};
