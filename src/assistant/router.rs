//! Context router — dispatches a chat message to a reply strategy.
//!
//! The router owns dispatch and field resolution; wording belongs to the
//! [`ReplyComposer`]. It is read-only with respect to the workspace store and
//! total: malformed context data degrades field by field, never errors.

use std::sync::Arc;

use chrono::DateTime;
use serde_json::Value;
use tracing::debug;

use crate::workspace::WorkspaceStore;

use super::composer::{ReplyComposer, ReplyScope, TemplateComposer};
use super::context::{AssistantReply, ChatContext, ReplyStrategy};

/// Routes `{message, context?}` to a strategy and composes the reply.
pub struct ContextRouter {
    /// Optional store handle for referential lookups (pending counts); with
    /// none, resolution uses context data alone.
    store: Option<Arc<WorkspaceStore>>,
    composer: Arc<dyn ReplyComposer>,
}

impl ContextRouter {
    /// Create a router with the default canned-template composer.
    pub fn new(store: Option<Arc<WorkspaceStore>>) -> Self {
        Self::with_composer(store, Arc::new(TemplateComposer))
    }

    /// Create a router with a custom composer.
    pub fn with_composer(
        store: Option<Arc<WorkspaceStore>>,
        composer: Arc<dyn ReplyComposer>,
    ) -> Self {
        Self { store, composer }
    }

    /// Route a message. An empty message is a valid question; an absent or
    /// unrecognized context type lands on the general strategy.
    pub async fn route(&self, message: &str, context: Option<&ChatContext>) -> AssistantReply {
        let strategy = ReplyStrategy::from_context(context);
        let scope = self.resolve(strategy, context).await;
        debug!(%strategy, message_len = message.len(), "Routing assistant message");
        self.composer.compose(strategy, message, &scope).await
    }

    async fn resolve(&self, strategy: ReplyStrategy, context: Option<&ChatContext>) -> ReplyScope {
        let data = match context {
            Some(ctx) => &ctx.data,
            None => return ReplyScope::default(),
        };

        match strategy {
            ReplyStrategy::TaskScoped => ReplyScope {
                task_title: str_field(data, "title"),
                task_due: str_field(data, "due_date").map(|raw| humanize_date(&raw)),
                ..Default::default()
            },
            ReplyStrategy::SubjectScoped => ReplyScope {
                course_title: str_field(data, "title"),
                pending_assignments: self.pending_count(data).await,
                ..Default::default()
            },
            ReplyStrategy::ProjectScoped => ReplyScope {
                project_title: str_field(data, "title"),
                project_category: str_field(data, "category"),
                ..Default::default()
            },
            ReplyStrategy::General => ReplyScope::default(),
        }
    }

    /// Pending-assignment count for the subject in `data`.
    ///
    /// Prefers a live store lookup by `data.id` (only when the course
    /// actually exists, so a stale id doesn't read as "0 pending"); falls
    /// back to a `pending_assignments` field in the context data.
    async fn pending_count(&self, data: &Value) -> Option<usize> {
        if let (Some(store), Some(id)) = (&self.store, data.get("id").and_then(Value::as_u64)) {
            if store.get_course(id).await.is_ok() {
                return Some(store.pending_assignments_for_course(id).await);
            }
        }
        data.get("pending_assignments")
            .and_then(Value::as_u64)
            .map(|n| n as usize)
    }
}

fn str_field(data: &Value, key: &str) -> Option<String> {
    data.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Render an RFC 3339 date as "Nov 12, 2026"; anything unparseable passes
/// through untouched.
fn humanize_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
