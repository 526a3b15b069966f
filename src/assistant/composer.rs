//! Reply composition.
//!
//! The router resolves what it can about the viewed entity into a
//! [`ReplyScope`]; composing the actual wording sits behind the async
//! [`ReplyComposer`] trait so the canned templates can later be swapped for a
//! model-backed generator without touching the dispatch contract.

use async_trait::async_trait;

use super::context::{AssistantReply, ReplyStrategy};

/// Entity facts the router managed to resolve for one request.
///
/// Every field is optional: a field the router could not resolve is simply
/// absent and the composer drops the clause that would have used it.
#[derive(Debug, Clone, Default)]
pub struct ReplyScope {
    /// Task title, when viewing a task.
    pub task_title: Option<String>,
    /// Human-formatted due date, when viewing a task.
    pub task_due: Option<String>,
    /// Course title, when viewing a subject.
    pub course_title: Option<String>,
    /// Pending-assignment count for the viewed subject.
    pub pending_assignments: Option<usize>,
    /// Project title, when viewing a project.
    pub project_title: Option<String>,
    /// Project category, when viewing a project.
    pub project_category: Option<String>,
}

/// Turns a strategy, the user's message, and the resolved scope into a reply.
#[async_trait]
pub trait ReplyComposer: Send + Sync {
    /// Compose the reply payload. Must be total: any combination of missing
    /// scope fields yields a usable reply.
    async fn compose(
        &self,
        strategy: ReplyStrategy,
        message: &str,
        scope: &ReplyScope,
    ) -> AssistantReply;
}

/// Default canned-template composer.
#[derive(Debug, Clone, Default)]
pub struct TemplateComposer;

impl TemplateComposer {
    fn general_text() -> String {
        "I can help with your courses, assignments, and projects — ask away.".to_string()
    }
}

#[async_trait]
impl ReplyComposer for TemplateComposer {
    async fn compose(
        &self,
        strategy: ReplyStrategy,
        _message: &str,
        scope: &ReplyScope,
    ) -> AssistantReply {
        let mut suggested_actions = Vec::new();

        let text = match strategy {
            ReplyStrategy::TaskScoped => {
                suggested_actions.push("generate breakdown".to_string());
                suggested_actions.push("find resources".to_string());
                match &scope.task_title {
                    Some(title) => {
                        let mut text = format!("You're looking at \"{title}\".");
                        if let Some(due) = &scope.task_due {
                            text.push_str(&format!(" It's due {due}."));
                        }
                        text.push_str(" I can break it into steps or pull together resources.");
                        text
                    }
                    None => Self::general_text(),
                }
            }
            ReplyStrategy::SubjectScoped => match &scope.course_title {
                Some(title) => {
                    let mut text = format!("You're viewing {title}.");
                    if let Some(pending) = scope.pending_assignments {
                        let noun = if pending == 1 { "assignment" } else { "assignments" };
                        text.push_str(&format!(" {pending} {noun} still pending."));
                    }
                    text.push_str(" Ask me about anything on this page.");
                    text
                }
                None => Self::general_text(),
            },
            ReplyStrategy::ProjectScoped => match &scope.project_title {
                Some(title) => {
                    let mut text = format!("Working on \"{title}\".");
                    if let Some(category) = &scope.project_category {
                        text.push_str(&format!(" Filed under {category}."));
                    }
                    text.push_str(" I can help you plan the next step.");
                    text
                }
                None => Self::general_text(),
            },
            ReplyStrategy::General => Self::general_text(),
        };

        AssistantReply {
            strategy,
            text,
            suggested_actions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn task_reply_mentions_title_and_due() {
        let scope = ReplyScope {
            task_title: Some("Essay".into()),
            task_due: Some("Nov 12, 2026".into()),
            ..Default::default()
        };
        let reply = TemplateComposer
            .compose(ReplyStrategy::TaskScoped, "help", &scope)
            .await;
        assert!(reply.text.contains("Essay"));
        assert!(reply.text.contains("Nov 12, 2026"));
        assert_eq!(
            reply.suggested_actions,
            vec!["generate breakdown".to_string(), "find resources".to_string()]
        );
    }

    #[tokio::test]
    async fn missing_due_date_drops_the_clause() {
        let scope = ReplyScope {
            task_title: Some("Essay".into()),
            ..Default::default()
        };
        let reply = TemplateComposer
            .compose(ReplyStrategy::TaskScoped, "help", &scope)
            .await;
        assert!(reply.text.contains("Essay"));
        assert!(!reply.text.contains("due"));
    }

    #[tokio::test]
    async fn fully_unresolved_scope_degrades_to_general_wording() {
        let general = TemplateComposer
            .compose(ReplyStrategy::General, "", &ReplyScope::default())
            .await;
        let task = TemplateComposer
            .compose(ReplyStrategy::TaskScoped, "", &ReplyScope::default())
            .await;
        assert_eq!(task.text, general.text);
        // The strategy marker is preserved even when wording degrades.
        assert_eq!(task.strategy, ReplyStrategy::TaskScoped);
    }

    #[tokio::test]
    async fn subject_reply_pluralizes_pending_count() {
        let one = ReplyScope {
            course_title: Some("History".into()),
            pending_assignments: Some(1),
            ..Default::default()
        };
        let reply = TemplateComposer
            .compose(ReplyStrategy::SubjectScoped, "", &one)
            .await;
        assert!(reply.text.contains("1 assignment still pending"));

        let two = ReplyScope {
            pending_assignments: Some(2),
            ..one
        };
        let reply = TemplateComposer
            .compose(ReplyStrategy::SubjectScoped, "", &two)
            .await;
        assert!(reply.text.contains("2 assignments still pending"));
    }
}
