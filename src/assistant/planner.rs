//! Canned planning collaborators — task breakdowns and research resources.
//!
//! These back the "generate breakdown" and "find resources" suggested
//! actions. The payloads are simulated: a fixed plan shape and a fixed
//! resource list, lightly personalized with the assignment title. Step ids
//! are local to the returned plan, not store-allocated; nothing here is
//! persisted.

use serde::Serialize;

use crate::workspace::Assignment;

/// One step of a generated task breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct PlanStep {
    /// Position within this plan (1-based).
    pub id: u64,
    /// What to do.
    pub text: String,
    /// Always starts `false`; the UI owns ticking these off.
    pub completed: bool,
}

/// What kind of resource a research suggestion points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Pdf,
    Video,
    Doc,
}

/// A suggested study resource.
#[derive(Debug, Clone, Serialize)]
pub struct StudyResource {
    /// Display title.
    pub title: String,
    /// Link target. Placeholder until a real research collaborator exists.
    pub url: String,
    /// Resource kind.
    pub kind: ResourceKind,
}

/// Generate a breakdown plan for an assignment.
pub fn breakdown(assignment: &Assignment) -> Vec<PlanStep> {
    [
        format!("Research key concepts for \"{}\"", assignment.title),
        "Draft an outline".to_string(),
        "Write the introduction".to_string(),
        "Compile references".to_string(),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, text)| PlanStep {
        id: (i + 1) as u64,
        text,
        completed: false,
    })
    .collect()
}

/// Suggest research resources for an assignment.
pub fn resources(assignment: &Assignment) -> Vec<StudyResource> {
    vec![
        StudyResource {
            title: format!("Academic paper: {}", assignment.title),
            url: "#".to_string(),
            kind: ResourceKind::Pdf,
        },
        StudyResource {
            title: "Video lecture: topic overview".to_string(),
            url: "#".to_string(),
            kind: ResourceKind::Video,
        },
        StudyResource {
            title: "Course notes: related weeks".to_string(),
            url: "#".to_string(),
            kind: ResourceKind::Doc,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workspace::AssignmentStatus;
    use chrono::Utc;

    fn assignment() -> Assignment {
        Assignment {
            id: 1,
            course_id: 1,
            title: "Essay: The Interwar Years".into(),
            due_date: Utc::now(),
            points: 150,
            status: AssignmentStatus::Pending,
        }
    }

    #[test]
    fn breakdown_steps_start_incomplete_with_sequential_ids() {
        let steps = breakdown(&assignment());
        assert_eq!(steps.len(), 4);
        assert!(steps.iter().all(|s| !s.completed));
        assert_eq!(steps.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert!(steps[0].text.contains("The Interwar Years"));
    }

    #[test]
    fn resources_cover_multiple_kinds() {
        let resources = resources(&assignment());
        assert_eq!(resources.len(), 3);
        assert!(resources.iter().any(|r| r.kind == ResourceKind::Pdf));
        assert!(resources.iter().any(|r| r.kind == ResourceKind::Video));
    }
}
