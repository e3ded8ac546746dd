//! Knowledge document parsing and project selection

use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::{GenbaError, Result};

/// One named project's bundle of history, bug reports, rules and prompts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Lookup key; not guaranteed unique
    pub name: String,
    pub design_history: Value,
    pub bug_reports: Value,
    pub rules: Value,
    pub prompts: Value,
    /// Any other keys on the project object
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The parsed knowledge file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawKnowledgeDocument")]
pub struct KnowledgeDocument {
    /// Project records in document order, never empty
    projects: Vec<ProjectRecord>,
}

/// Wire shape of the knowledge file before the non-empty check
#[derive(Deserialize)]
struct RawKnowledgeDocument {
    projects: Vec<ProjectRecord>,
}

impl TryFrom<RawKnowledgeDocument> for KnowledgeDocument {
    type Error = &'static str;

    fn try_from(raw: RawKnowledgeDocument) -> std::result::Result<Self, Self::Error> {
        if raw.projects.is_empty() {
            return Err("knowledge document has no projects");
        }
        Ok(Self { projects: raw.projects })
    }
}

/// Outcome of selecting a project from a document
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection<'a> {
    /// No name was requested; the first record was taken
    First(&'a ProjectRecord),
    /// The first record with exactly the requested name
    Matched(&'a ProjectRecord),
    /// A name was requested but nothing matched; the first record stands in
    Fallback {
        requested: &'a str,
        record: &'a ProjectRecord,
    },
}

impl<'a> Selection<'a> {
    /// The record chosen by this selection
    pub fn record(&self) -> &'a ProjectRecord {
        match *self {
            Selection::First(record) | Selection::Matched(record) => record,
            Selection::Fallback { record, .. } => record,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Selection::Fallback { .. })
    }

    /// Reject a fallback selection instead of accepting the first record
    pub fn into_strict(self) -> Result<&'a ProjectRecord> {
        match self {
            Selection::Fallback { requested, .. } => Err(GenbaError::ProjectNotFound {
                name: requested.to_string(),
            }),
            other => Ok(other.record()),
        }
    }
}

impl KnowledgeDocument {
    /// Load and validate a knowledge document from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(?path, "KnowledgeDocument::load: called");

        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == IoErrorKind::NotFound {
                GenbaError::KnowledgeNotFound {
                    path: path.to_path_buf(),
                    source,
                }
            } else {
                GenbaError::KnowledgeRead {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let document = Self::parse(&content, path)?;
        info!("Loaded {} project(s) from {}", document.projects.len(), path.display());
        Ok(document)
    }

    /// Parse a knowledge document from JSON text
    pub fn from_json(content: &str) -> Result<Self> {
        Self::parse(content, Path::new("<inline>"))
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        let raw: RawKnowledgeDocument = serde_json::from_str(content).map_err(|source| GenbaError::KnowledgeParse {
            path: path.to_path_buf(),
            source,
        })?;

        Self::try_from(raw).map_err(|_| GenbaError::NoProjects {
            path: path.to_path_buf(),
        })
    }

    /// Find the first record whose name equals `name` exactly
    pub fn find(&self, name: &str) -> Option<&ProjectRecord> {
        debug!(%name, "KnowledgeDocument::find: called");
        self.projects.iter().find(|p| p.name == name)
    }

    /// Select a record, reporting whether the request was honoured
    pub fn select<'a>(&'a self, name: Option<&'a str>) -> Selection<'a> {
        let first = &self.projects[0];

        let Some(name) = name else {
            debug!(project = %first.name, "KnowledgeDocument::select: no name requested, using first");
            return Selection::First(first);
        };

        match self.find(name) {
            Some(record) => {
                debug!(project = %record.name, "KnowledgeDocument::select: matched");
                Selection::Matched(record)
            }
            None => {
                debug!("Project '{}' not found, falling back to '{}'", name, first.name);
                Selection::Fallback {
                    requested: name,
                    record: first,
                }
            }
        }
    }

    /// All project records in document order
    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// Project names in document order
    pub fn project_names(&self) -> Vec<&str> {
        self.projects.iter().map(|p| p.name.as_str()).collect()
    }
}

/// Load a knowledge file and select a project record
///
/// Without a name the first record is returned. With a name, the first
/// exact match is returned, or the first record if nothing matches.
pub fn load_and_select(path: impl AsRef<Path>, project_name: Option<&str>) -> Result<ProjectRecord> {
    let document = KnowledgeDocument::load(path)?;
    let record = document.select(project_name).record().clone();
    Ok(record)
}
