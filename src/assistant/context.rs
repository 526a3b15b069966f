//! Chat context — the typed pointer telling the assistant what the user is
//! currently viewing, and the reply types the router produces.

use serde::{Deserialize, Serialize};

/// Context attached to a chat message: the kind of entity being viewed plus
/// that entity's current state as loose JSON.
///
/// `data` is whatever the page had. The router reads individual fields
/// defensively; a missing or malformed field never fails a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatContext {
    /// Entity kind: "task", "subject", "project", or anything else (treated
    /// as no context).
    #[serde(rename = "type")]
    pub kind: String,
    /// The viewed entity's current state.
    #[serde(default)]
    pub data: serde_json::Value,
}

impl ChatContext {
    /// Convenience constructor, mostly for tests.
    pub fn new(kind: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            data,
        }
    }
}

/// Which reply strategy the router selected.
///
/// Fully determined by the context's `type` string; unrecognized or absent
/// context always lands on `General`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyStrategy {
    TaskScoped,
    SubjectScoped,
    ProjectScoped,
    General,
}

impl ReplyStrategy {
    /// Select the strategy for an optional context. First match wins.
    pub fn from_context(context: Option<&ChatContext>) -> Self {
        match context.map(|c| c.kind.as_str()) {
            Some("task") => Self::TaskScoped,
            Some("subject") => Self::SubjectScoped,
            Some("project") => Self::ProjectScoped,
            _ => Self::General,
        }
    }
}

impl std::fmt::Display for ReplyStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::TaskScoped => "task-scoped",
            Self::SubjectScoped => "subject-scoped",
            Self::ProjectScoped => "project-scoped",
            Self::General => "general",
        };
        write!(f, "{s}")
    }
}

/// A composed assistant reply.
///
/// Serializes to exactly `{text, suggested_actions?}` — the strategy marker
/// is for callers and tests, not the wire.
#[derive(Debug, Clone, Serialize)]
pub struct AssistantReply {
    /// Strategy that produced this reply.
    #[serde(skip)]
    pub strategy: ReplyStrategy,
    /// Reply text.
    pub text: String,
    /// Follow-up actions the UI can offer. These delegate to the breakdown
    /// and research collaborators; the router only names them.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggested_actions: Vec<String>,
}
