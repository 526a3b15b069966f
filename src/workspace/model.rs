//! Workspace data model — courses, assignments, projects, and their children.
//!
//! All ids are plain integers scoped per entity type, allocated by the store
//! at creation time and never reused within a process lifetime. Ordering of
//! every child collection is insertion order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A course (called a "subject" in the UI).
///
/// The store owns the course's custom sections, lecture summaries, quizzes,
/// and workflow; this struct is the course metadata handed to the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique course id.
    pub id: u64,
    /// Display title, e.g. "Linear Algebra".
    pub title: String,
    /// Catalog code, e.g. "MATH-221".
    pub code: String,
    /// Instructor name.
    pub instructor: String,
    /// Academic term, e.g. "Fall 2026".
    pub term: String,
}

/// Lifecycle status of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    /// Not yet submitted.
    Pending,
    /// Turned in, awaiting a grade.
    Submitted,
    /// Graded and closed.
    Graded,
}

/// A graded piece of coursework, tied to a course by foreign key.
///
/// Assignments are seeded reference data: there is no create/update surface,
/// so the collection is append-only from the store's point of view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique assignment id.
    pub id: u64,
    /// Owning course id. Always resolves to an existing course at seed time.
    pub course_id: u64,
    /// Assignment title.
    pub title: String,
    /// When the assignment is due.
    pub due_date: DateTime<Utc>,
    /// Points the assignment is worth.
    pub points: u32,
    /// Current lifecycle status.
    pub status: AssignmentStatus,
}

/// A note inside a custom section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// Unique note id.
    pub id: u64,
    /// Note body.
    pub content: String,
    /// When the note was added.
    pub created_at: DateTime<Utc>,
}

/// A user-created study-material section attached to a course.
///
/// Sections are mutable only by appending notes; there is no section edit or
/// delete surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomSection {
    /// Unique section id.
    pub id: u64,
    /// Owning course id.
    pub course_id: u64,
    /// Section title.
    pub title: String,
    /// Notes in append order.
    pub notes: Vec<Note>,
}

/// A lecture summary derived from a transcript. Append-only per course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LectureSummary {
    /// Unique summary id.
    pub id: u64,
    /// Owning course id.
    pub course_id: u64,
    /// Summary content, derived from the transcript by the store's
    /// [`Summarizer`](crate::workspace::summary::Summarizer).
    pub content: String,
    /// When the summary was saved.
    pub created_at: DateTime<Utc>,
}

/// A quiz attached to a course. Seeded reference data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    /// Unique quiz id.
    pub id: u64,
    /// Owning course id.
    pub course_id: u64,
    /// Quiz title.
    pub title: String,
    /// Number of questions.
    pub question_count: u32,
    /// When the quiz is due.
    pub due_date: DateTime<Utc>,
}

/// One step of a workflow, attached to a course or a project.
///
/// `completed` starts `false` and is only ever flipped by an explicit toggle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowStep {
    /// Unique step id (shared id space for course and project steps).
    pub id: u64,
    /// What the step is.
    pub text: String,
    /// Whether the step is done.
    pub completed: bool,
}

/// A note attached to a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectNote {
    /// Unique note id.
    pub id: u64,
    /// Note body.
    pub content: String,
    /// When the note was added.
    pub created_at: DateTime<Utc>,
}

/// A side project, independent of any course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique project id.
    pub id: u64,
    /// Project title.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// Free-form category, e.g. "research" or "portfolio".
    pub category: String,
    /// Notes in append order.
    pub notes: Vec<ProjectNote>,
    /// Workflow steps in append order.
    pub workflow: Vec<WorkflowStep>,
}

/// Coarse classification of an uploaded file, from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Pdf,
    Document,
    Slides,
    Spreadsheet,
    Image,
    Video,
    Audio,
    Other,
}

impl FileKind {
    /// Classify a filename by its extension (case-insensitive).
    pub fn classify(filename: &str) -> Self {
        let ext = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "pdf" => Self::Pdf,
            "doc" | "docx" | "txt" | "md" | "rtf" => Self::Document,
            "ppt" | "pptx" | "key" => Self::Slides,
            "xls" | "xlsx" | "csv" => Self::Spreadsheet,
            "png" | "jpg" | "jpeg" | "gif" | "svg" => Self::Image,
            "mp4" | "mov" | "mkv" | "webm" => Self::Video,
            "mp3" | "wav" | "m4a" | "flac" => Self::Audio,
            _ => Self::Other,
        }
    }

    /// Synthetic size used for catalog entries.
    ///
    /// No real bytes are stored (an external collaborator owns those), so the
    /// catalog reports a deterministic per-kind placeholder size.
    pub fn synthetic_size(&self) -> u64 {
        match self {
            Self::Pdf => 1_200 * 1024,
            Self::Document => 64 * 1024,
            Self::Slides => 4_800 * 1024,
            Self::Spreadsheet => 96 * 1024,
            Self::Image => 850 * 1024,
            Self::Video => 48_000 * 1024,
            Self::Audio => 9_600 * 1024,
            Self::Other => 32 * 1024,
        }
    }
}

/// Catalog entry for an uploaded file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    /// Unique file id.
    pub id: u64,
    /// Original filename.
    pub filename: String,
    /// Synthetic size in bytes.
    pub size_bytes: u64,
    /// Kind classified from the extension.
    pub kind: FileKind,
    /// When the file was registered.
    pub uploaded_at: DateTime<Utc>,
}

/// An external service and whether it is currently connected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectedService {
    /// Service key, e.g. "canvas" or "google_calendar".
    pub name: String,
    /// Current connection state.
    pub connected: bool,
}

/// Aggregate counts for the dashboard landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Number of courses.
    pub courses: u64,
    /// Assignments not yet submitted.
    pub pending_assignments: u64,
    /// Pending assignments due within the next seven days.
    pub due_this_week: u64,
    /// Services currently connected.
    pub connected_services: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_known_extensions() {
        assert_eq!(FileKind::classify("paper.pdf"), FileKind::Pdf);
        assert_eq!(FileKind::classify("notes.DOCX"), FileKind::Document);
        assert_eq!(FileKind::classify("week3.pptx"), FileKind::Slides);
        assert_eq!(FileKind::classify("grades.csv"), FileKind::Spreadsheet);
        assert_eq!(FileKind::classify("diagram.PNG"), FileKind::Image);
        assert_eq!(FileKind::classify("lecture.mp4"), FileKind::Video);
        assert_eq!(FileKind::classify("recording.m4a"), FileKind::Audio);
    }

    #[test]
    fn classify_unknown_and_missing_extensions() {
        assert_eq!(FileKind::classify("archive.zip"), FileKind::Other);
        assert_eq!(FileKind::classify("README"), FileKind::Other);
        assert_eq!(FileKind::classify(""), FileKind::Other);
    }

    #[test]
    fn synthetic_sizes_are_stable() {
        assert_eq!(FileKind::Pdf.synthetic_size(), FileKind::Pdf.synthetic_size());
        assert!(FileKind::Video.synthetic_size() > FileKind::Document.synthetic_size());
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&AssignmentStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
    }
}
