//! WorkspaceStore — in-memory state for all domain entities.
//!
//! One `RwLock` guards the whole workspace, so every operation (including
//! id-allocation-and-append) is atomic with respect to other callers and the
//! no-id-reuse / insertion-order invariants hold even when the HTTP runtime
//! drives handlers concurrently.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Duration, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::StoreError;

use super::model::{
    Assignment, AssignmentStatus, ConnectedService, Course, CustomSection, DashboardStats,
    FileKind, FileRecord, LectureSummary, Note, Project, ProjectNote, Quiz, WorkflowStep,
};
use super::summary::{ExtractiveSummarizer, Summarizer};

/// Monotonic id source for one entity type. Ids start at 1 and are never
/// handed out twice, even after the entity they named is deleted.
#[derive(Debug)]
pub struct IdAllocator {
    next: u64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdAllocator {
    fn allocate(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// One allocator per entity type, so ids are unique within their type.
#[derive(Debug, Default)]
struct IdRegistry {
    courses: IdAllocator,
    assignments: IdAllocator,
    sections: IdAllocator,
    notes: IdAllocator,
    summaries: IdAllocator,
    quizzes: IdAllocator,
    steps: IdAllocator,
    projects: IdAllocator,
    project_notes: IdAllocator,
    files: IdAllocator,
}

/// A course plus the collections it owns.
#[derive(Debug)]
struct CourseRecord {
    course: Course,
    sections: Vec<CustomSection>,
    summaries: Vec<LectureSummary>,
    quizzes: Vec<Quiz>,
    workflow: Vec<WorkflowStep>,
}

#[derive(Debug, Default)]
struct WorkspaceState {
    courses: Vec<CourseRecord>,
    assignments: Vec<Assignment>,
    projects: Vec<Project>,
    files: Vec<FileRecord>,
    /// Service name → connected flag. Unknown names are registered on first
    /// toggle with a default-false state, so an evolving service list never
    /// needs special-casing.
    services: BTreeMap<String, bool>,
    ids: IdRegistry,
}

/// In-memory workspace store.
pub struct WorkspaceStore {
    state: RwLock<WorkspaceState>,
    summarizer: Box<dyn Summarizer>,
}

impl WorkspaceStore {
    /// Create an empty store with the default summarizer.
    pub fn new() -> Arc<Self> {
        Self::with_summarizer(Box::new(ExtractiveSummarizer::default()))
    }

    /// Create an empty store with a custom summary strategy.
    pub fn with_summarizer(summarizer: Box<dyn Summarizer>) -> Arc<Self> {
        Arc::new(Self {
            state: RwLock::new(WorkspaceState::default()),
            summarizer,
        })
    }

    /// Create a store pre-populated with demo data.
    pub async fn seeded() -> Arc<Self> {
        let store = Self::new();
        super::seed::populate(&store).await;
        store
    }

    // ── Dashboard ───────────────────────────────────────────────────

    /// Aggregate counts for the dashboard landing page.
    pub async fn dashboard_stats(&self) -> DashboardStats {
        let state = self.state.read().await;
        let now = Utc::now();
        let week_out = now + Duration::days(7);

        let pending = state
            .assignments
            .iter()
            .filter(|a| a.status == AssignmentStatus::Pending)
            .count() as u64;
        let due_this_week = state
            .assignments
            .iter()
            .filter(|a| a.status == AssignmentStatus::Pending && a.due_date <= week_out)
            .count() as u64;
        let connected = state.services.values().filter(|c| **c).count() as u64;

        DashboardStats {
            courses: state.courses.len() as u64,
            pending_assignments: pending,
            due_this_week,
            connected_services: connected,
        }
    }

    // ── Courses ─────────────────────────────────────────────────────

    /// All courses in creation order.
    pub async fn list_courses(&self) -> Vec<Course> {
        let state = self.state.read().await;
        state.courses.iter().map(|r| r.course.clone()).collect()
    }

    /// Look up a course by id. Missing courses are a distinct outcome from an
    /// empty course, surfaced as `ParentNotFound`.
    pub async fn get_course(&self, id: u64) -> Result<Course, StoreError> {
        let state = self.state.read().await;
        state
            .courses
            .iter()
            .find(|r| r.course.id == id)
            .map(|r| r.course.clone())
            .ok_or_else(|| StoreError::parent("course", id))
    }

    /// Create a course with empty child collections.
    pub async fn create_course(
        &self,
        title: impl Into<String>,
        code: impl Into<String>,
        instructor: impl Into<String>,
        term: impl Into<String>,
    ) -> Course {
        let mut state = self.state.write().await;
        let course = Course {
            id: state.ids.courses.allocate(),
            title: title.into(),
            code: code.into(),
            instructor: instructor.into(),
            term: term.into(),
        };
        info!(course_id = course.id, title = %course.title, "Course created");
        state.courses.push(CourseRecord {
            course: course.clone(),
            sections: Vec::new(),
            summaries: Vec::new(),
            quizzes: Vec::new(),
            workflow: Vec::new(),
        });
        course
    }

    /// Remove a course and everything it owns, including its assignments.
    ///
    /// Best-effort: returns `false` for an unknown id. No route exposes this
    /// yet; the cascade contract exists so children can never outlive their
    /// course. Freed ids are not reused.
    pub async fn remove_course(&self, id: u64) -> bool {
        let mut state = self.state.write().await;
        let before = state.courses.len();
        state.courses.retain(|r| r.course.id != id);
        if state.courses.len() == before {
            return false;
        }
        state.assignments.retain(|a| a.course_id != id);
        info!(course_id = id, "Course removed with owned children");
        true
    }

    // ── Assignments ─────────────────────────────────────────────────

    /// All assignments in creation order.
    pub async fn list_assignments(&self) -> Vec<Assignment> {
        self.state.read().await.assignments.clone()
    }

    /// Look up an assignment by id.
    pub async fn get_assignment(&self, id: u64) -> Result<Assignment, StoreError> {
        let state = self.state.read().await;
        state
            .assignments
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| StoreError::parent("assignment", id))
    }

    /// Assignments belonging to one course, in insertion order.
    ///
    /// An unknown course yields an empty vec, not an error — callers that
    /// need to distinguish validate course existence separately.
    pub async fn list_assignments_for_course(&self, course_id: u64) -> Vec<Assignment> {
        let state = self.state.read().await;
        state
            .assignments
            .iter()
            .filter(|a| a.course_id == course_id)
            .cloned()
            .collect()
    }

    /// Pending assignments for one course.
    pub async fn pending_assignments_for_course(&self, course_id: u64) -> usize {
        let state = self.state.read().await;
        state
            .assignments
            .iter()
            .filter(|a| a.course_id == course_id && a.status == AssignmentStatus::Pending)
            .count()
    }

    /// Seed an assignment. Fails with `ParentNotFound` for an unknown course;
    /// assignments are reference data with no public create surface.
    pub async fn seed_assignment(
        &self,
        course_id: u64,
        title: impl Into<String>,
        due_date: chrono::DateTime<Utc>,
        points: u32,
        status: AssignmentStatus,
    ) -> Result<Assignment, StoreError> {
        let mut state = self.state.write().await;
        if !state.courses.iter().any(|r| r.course.id == course_id) {
            return Err(StoreError::parent("course", course_id));
        }
        let assignment = Assignment {
            id: state.ids.assignments.allocate(),
            course_id,
            title: title.into(),
            due_date,
            points,
            status,
        };
        state.assignments.push(assignment.clone());
        Ok(assignment)
    }

    // ── Custom sections ─────────────────────────────────────────────

    /// Custom sections for one course. Empty vec for an unknown course.
    pub async fn list_sections(&self, course_id: u64) -> Vec<CustomSection> {
        let state = self.state.read().await;
        state
            .courses
            .iter()
            .find(|r| r.course.id == course_id)
            .map(|r| r.sections.clone())
            .unwrap_or_default()
    }

    /// Append a new custom section to a course.
    pub async fn add_custom_section(
        &self,
        course_id: u64,
        title: impl Into<String>,
    ) -> Result<CustomSection, StoreError> {
        let mut state = self.state.write().await;
        let state = &mut *state;
        let record = state
            .courses
            .iter_mut()
            .find(|r| r.course.id == course_id)
            .ok_or_else(|| StoreError::parent("course", course_id))?;
        let section = CustomSection {
            id: state.ids.sections.allocate(),
            course_id,
            title: title.into(),
            notes: Vec::new(),
        };
        info!(course_id, section_id = section.id, title = %section.title, "Custom section added");
        record.sections.push(section.clone());
        Ok(section)
    }

    /// Append a note to a section.
    ///
    /// Returns the full updated section so the caller can re-render the note
    /// list without a second read.
    pub async fn add_note_to_section(
        &self,
        course_id: u64,
        section_id: u64,
        content: impl Into<String>,
    ) -> Result<CustomSection, StoreError> {
        let mut state = self.state.write().await;
        let state = &mut *state;
        let record = state
            .courses
            .iter_mut()
            .find(|r| r.course.id == course_id)
            .ok_or_else(|| StoreError::parent("course", course_id))?;
        let section = record
            .sections
            .iter_mut()
            .find(|s| s.id == section_id)
            .ok_or_else(|| StoreError::child("section", section_id, "course", course_id))?;
        let id = state.ids.notes.allocate();
        section.notes.push(Note {
            id,
            content: content.into(),
            created_at: Utc::now(),
        });
        debug!(course_id, section_id, note_id = id, "Note appended to section");
        Ok(section.clone())
    }

    // ── Lecture summaries ───────────────────────────────────────────

    /// Lecture summaries for one course. Empty vec for an unknown course.
    pub async fn list_lecture_summaries(&self, course_id: u64) -> Vec<LectureSummary> {
        let state = self.state.read().await;
        state
            .courses
            .iter()
            .find(|r| r.course.id == course_id)
            .map(|r| r.summaries.clone())
            .unwrap_or_default()
    }

    /// Derive and append a lecture summary from a transcript.
    pub async fn add_lecture_summary(
        &self,
        course_id: u64,
        transcript: &str,
    ) -> Result<LectureSummary, StoreError> {
        let content = self.summarizer.summarize(transcript);
        let mut state = self.state.write().await;
        let state = &mut *state;
        let record = state
            .courses
            .iter_mut()
            .find(|r| r.course.id == course_id)
            .ok_or_else(|| StoreError::parent("course", course_id))?;
        let summary = LectureSummary {
            id: state.ids.summaries.allocate(),
            course_id,
            content,
            created_at: Utc::now(),
        };
        info!(course_id, summary_id = summary.id, "Lecture summary saved");
        record.summaries.push(summary.clone());
        Ok(summary)
    }

    // ── Quizzes ─────────────────────────────────────────────────────

    /// Quizzes for one course. Empty vec for an unknown course.
    pub async fn list_quizzes(&self, course_id: u64) -> Vec<Quiz> {
        let state = self.state.read().await;
        state
            .courses
            .iter()
            .find(|r| r.course.id == course_id)
            .map(|r| r.quizzes.clone())
            .unwrap_or_default()
    }

    /// Seed a quiz onto a course.
    pub async fn seed_quiz(
        &self,
        course_id: u64,
        title: impl Into<String>,
        question_count: u32,
        due_date: chrono::DateTime<Utc>,
    ) -> Result<Quiz, StoreError> {
        let mut state = self.state.write().await;
        let state = &mut *state;
        let record = state
            .courses
            .iter_mut()
            .find(|r| r.course.id == course_id)
            .ok_or_else(|| StoreError::parent("course", course_id))?;
        let quiz = Quiz {
            id: state.ids.quizzes.allocate(),
            course_id,
            title: title.into(),
            question_count,
            due_date,
        };
        record.quizzes.push(quiz.clone());
        Ok(quiz)
    }

    // ── Course workflow ─────────────────────────────────────────────

    /// Workflow steps for one course. Empty vec for an unknown course.
    pub async fn course_workflow(&self, course_id: u64) -> Vec<WorkflowStep> {
        let state = self.state.read().await;
        state
            .courses
            .iter()
            .find(|r| r.course.id == course_id)
            .map(|r| r.workflow.clone())
            .unwrap_or_default()
    }

    /// Append a workflow step to a course. Steps start not-completed.
    pub async fn add_course_step(
        &self,
        course_id: u64,
        text: impl Into<String>,
    ) -> Result<WorkflowStep, StoreError> {
        let mut state = self.state.write().await;
        let state = &mut *state;
        let record = state
            .courses
            .iter_mut()
            .find(|r| r.course.id == course_id)
            .ok_or_else(|| StoreError::parent("course", course_id))?;
        let step = WorkflowStep {
            id: state.ids.steps.allocate(),
            text: text.into(),
            completed: false,
        };
        debug!(course_id, step_id = step.id, "Course workflow step added");
        record.workflow.push(step.clone());
        Ok(step)
    }

    /// Flip a course workflow step's completion flag.
    pub async fn toggle_course_step(
        &self,
        course_id: u64,
        step_id: u64,
    ) -> Result<WorkflowStep, StoreError> {
        let mut state = self.state.write().await;
        let record = state
            .courses
            .iter_mut()
            .find(|r| r.course.id == course_id)
            .ok_or_else(|| StoreError::parent("course", course_id))?;
        let step = record
            .workflow
            .iter_mut()
            .find(|s| s.id == step_id)
            .ok_or_else(|| StoreError::child("step", step_id, "course", course_id))?;
        step.completed = !step.completed;
        info!(course_id, step_id, completed = step.completed, "Course step toggled");
        Ok(step.clone())
    }

    // ── Projects ────────────────────────────────────────────────────

    /// All projects in creation order.
    pub async fn list_projects(&self) -> Vec<Project> {
        self.state.read().await.projects.clone()
    }

    /// Look up a project by id.
    pub async fn get_project(&self, id: u64) -> Result<Project, StoreError> {
        let state = self.state.read().await;
        state
            .projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::parent("project", id))
    }

    /// Create a project with empty note and workflow collections.
    pub async fn create_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Project {
        let mut state = self.state.write().await;
        let project = Project {
            id: state.ids.projects.allocate(),
            title: title.into(),
            description: description.into(),
            category: category.into(),
            notes: Vec::new(),
            workflow: Vec::new(),
        };
        info!(project_id = project.id, title = %project.title, "Project created");
        state.projects.push(project.clone());
        project
    }

    /// Append a note to a project.
    pub async fn add_project_note(
        &self,
        project_id: u64,
        content: impl Into<String>,
    ) -> Result<ProjectNote, StoreError> {
        let mut state = self.state.write().await;
        let state = &mut *state;
        let project = state
            .projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or_else(|| StoreError::parent("project", project_id))?;
        let note = ProjectNote {
            id: state.ids.project_notes.allocate(),
            content: content.into(),
            created_at: Utc::now(),
        };
        debug!(project_id, note_id = note.id, "Project note added");
        project.notes.push(note.clone());
        Ok(note)
    }

    /// Delete a project note.
    ///
    /// Best-effort cleanup for the dashboard's delete button: returns `false`
    /// when the project or the note does not exist, never an error. The
    /// deleted id is never reused.
    pub async fn delete_project_note(&self, project_id: u64, note_id: u64) -> bool {
        let mut state = self.state.write().await;
        let Some(project) = state.projects.iter_mut().find(|p| p.id == project_id) else {
            return false;
        };
        let before = project.notes.len();
        project.notes.retain(|n| n.id != note_id);
        let deleted = project.notes.len() != before;
        if deleted {
            info!(project_id, note_id, "Project note deleted");
        }
        deleted
    }

    /// Append a workflow step to a project. Steps start not-completed.
    pub async fn add_project_step(
        &self,
        project_id: u64,
        text: impl Into<String>,
    ) -> Result<WorkflowStep, StoreError> {
        let mut state = self.state.write().await;
        let state = &mut *state;
        let project = state
            .projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or_else(|| StoreError::parent("project", project_id))?;
        let step = WorkflowStep {
            id: state.ids.steps.allocate(),
            text: text.into(),
            completed: false,
        };
        debug!(project_id, step_id = step.id, "Project workflow step added");
        project.workflow.push(step.clone());
        Ok(step)
    }

    /// Flip a project workflow step's completion flag.
    pub async fn toggle_project_step(
        &self,
        project_id: u64,
        step_id: u64,
    ) -> Result<WorkflowStep, StoreError> {
        let mut state = self.state.write().await;
        let project = state
            .projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or_else(|| StoreError::parent("project", project_id))?;
        let step = project
            .workflow
            .iter_mut()
            .find(|s| s.id == step_id)
            .ok_or_else(|| StoreError::child("step", step_id, "project", project_id))?;
        step.completed = !step.completed;
        info!(project_id, step_id, completed = step.completed, "Project step toggled");
        Ok(step.clone())
    }

    // ── Files ───────────────────────────────────────────────────────

    /// All catalog entries in upload order.
    pub async fn list_files(&self) -> Vec<FileRecord> {
        self.state.read().await.files.clone()
    }

    /// Register an uploaded file in the catalog.
    ///
    /// The actual bytes live with an external collaborator; the catalog keeps
    /// the filename plus a synthetic size and kind from the extension.
    pub async fn add_file(&self, filename: impl Into<String>) -> FileRecord {
        let mut state = self.state.write().await;
        let filename = filename.into();
        let kind = FileKind::classify(&filename);
        let record = FileRecord {
            id: state.ids.files.allocate(),
            size_bytes: kind.synthetic_size(),
            kind,
            filename,
            uploaded_at: Utc::now(),
        };
        info!(file_id = record.id, filename = %record.filename, kind = ?record.kind, "File registered");
        state.files.push(record.clone());
        record
    }

    // ── Connected services ──────────────────────────────────────────

    /// All known services and their connection state, by name.
    pub async fn list_services(&self) -> Vec<ConnectedService> {
        let state = self.state.read().await;
        state
            .services
            .iter()
            .map(|(name, connected)| ConnectedService {
                name: name.clone(),
                connected: *connected,
            })
            .collect()
    }

    /// Mark a service connected. Unknown names are registered on the fly, so
    /// this always succeeds.
    pub async fn connect_service(&self, name: impl Into<String>) -> bool {
        let mut state = self.state.write().await;
        let name = name.into();
        info!(service = %name, "Service connected");
        state.services.insert(name, true);
        true
    }

    /// Mark a service disconnected. Unknown names are registered on the fly,
    /// so this always succeeds.
    pub async fn disconnect_service(&self, name: impl Into<String>) -> bool {
        let mut state = self.state.write().await;
        let name = name.into();
        info!(service = %name, "Service disconnected");
        state.services.insert(name, false);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn course_lookup_distinguishes_missing_from_empty() {
        let store = WorkspaceStore::new();
        let course = store.create_course("Algebra", "MATH-1", "Dr. Noether", "Fall").await;

        assert_eq!(store.get_course(course.id).await.unwrap().title, "Algebra");
        assert_eq!(
            store.get_course(999).await.unwrap_err(),
            StoreError::parent("course", 999)
        );
        // Known course with nothing in it: empty, not an error.
        assert!(store.list_assignments_for_course(course.id).await.is_empty());
    }

    #[tokio::test]
    async fn assignments_filtered_by_course_in_insertion_order() {
        let store = WorkspaceStore::new();
        let a = store.create_course("A", "A-1", "X", "Fall").await;
        let b = store.create_course("B", "B-1", "Y", "Fall").await;

        let due = Utc::now() + Duration::days(3);
        store
            .seed_assignment(a.id, "first", due, 100, AssignmentStatus::Pending)
            .await
            .unwrap();
        store
            .seed_assignment(b.id, "other", due, 50, AssignmentStatus::Pending)
            .await
            .unwrap();
        store
            .seed_assignment(a.id, "second", due, 20, AssignmentStatus::Graded)
            .await
            .unwrap();

        let for_a = store.list_assignments_for_course(a.id).await;
        assert_eq!(for_a.len(), 2);
        assert!(for_a.iter().all(|x| x.course_id == a.id));
        assert_eq!(for_a[0].title, "first");
        assert_eq!(for_a[1].title, "second");
    }

    #[tokio::test]
    async fn seed_assignment_requires_existing_course() {
        let store = WorkspaceStore::new();
        let err = store
            .seed_assignment(42, "x", Utc::now(), 10, AssignmentStatus::Pending)
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::parent("course", 42));
    }

    #[tokio::test]
    async fn section_and_note_append_flow() {
        let store = WorkspaceStore::new();
        let course = store.create_course("Chem", "CHEM-1", "Dr. Curie", "Fall").await;

        let section = store.add_custom_section(course.id, "Lab prep").await.unwrap();
        assert!(section.notes.is_empty());

        let updated = store
            .add_note_to_section(course.id, section.id, "buy goggles")
            .await
            .unwrap();
        let updated = store
            .add_note_to_section(course.id, updated.id, "read handout")
            .await
            .unwrap();

        assert_eq!(updated.notes.len(), 2);
        assert_eq!(updated.notes[0].content, "buy goggles");
        assert_eq!(updated.notes[1].content, "read handout");
        assert!(updated.notes[0].id < updated.notes[1].id);
    }

    #[tokio::test]
    async fn section_errors_carry_the_taxonomy() {
        let store = WorkspaceStore::new();
        let course = store.create_course("Chem", "CHEM-1", "Dr. Curie", "Fall").await;

        assert_eq!(
            store.add_custom_section(77, "x").await.unwrap_err(),
            StoreError::parent("course", 77)
        );
        assert_eq!(
            store
                .add_note_to_section(course.id, 12345, "x")
                .await
                .unwrap_err(),
            StoreError::child("section", 12345, "course", course.id)
        );
    }

    #[tokio::test]
    async fn lecture_summary_derives_from_transcript() {
        let store = WorkspaceStore::new();
        let course = store.create_course("Hist", "HIST-1", "Dr. Bloch", "Fall").await;

        let summary = store
            .add_lecture_summary(course.id, "First point. Second point.")
            .await
            .unwrap();
        assert_eq!(summary.content, "First point. Second point.");
        assert_eq!(store.list_lecture_summaries(course.id).await.len(), 1);

        assert_eq!(
            store.add_lecture_summary(5, "x").await.unwrap_err(),
            StoreError::parent("course", 5)
        );
    }

    #[tokio::test]
    async fn project_note_lifecycle_matches_best_effort_delete() {
        let store = WorkspaceStore::new();
        let project = store.create_project("Thesis", "draft it", "research").await;
        assert_eq!(project.id, 1);
        assert!(project.notes.is_empty() && project.workflow.is_empty());

        let note = store.add_project_note(project.id, "Outline done").await.unwrap();
        assert_eq!(note.id, 1);
        assert_eq!(note.content, "Outline done");

        assert!(store.delete_project_note(project.id, note.id).await);
        assert!(!store.delete_project_note(project.id, note.id).await);
        // Unknown project and note: false, never an error.
        assert!(!store.delete_project_note(999, 999).await);
    }

    #[tokio::test]
    async fn deleted_note_id_is_never_reused() {
        let store = WorkspaceStore::new();
        let project = store.create_project("P", "", "misc").await;

        let first = store.add_project_note(project.id, "a").await.unwrap();
        assert!(store.delete_project_note(project.id, first.id).await);

        let second = store.add_project_note(project.id, "b").await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn project_ids_stay_distinct_across_other_creations() {
        let store = WorkspaceStore::new();
        let mut ids = Vec::new();
        for i in 0..5 {
            ids.push(store.create_project(format!("p{i}"), "", "misc").await.id);
            // Interleave other entity types; project ids must not be affected.
            store.create_course(format!("c{i}"), "C", "X", "Fall").await;
            store.add_file(format!("f{i}.pdf")).await;
        }
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids, deduped);
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn workflow_steps_default_incomplete_and_toggle() {
        let store = WorkspaceStore::new();
        let course = store.create_course("C", "C-1", "X", "Fall").await;
        let project = store.create_project("P", "", "misc").await;

        let cs = store.add_course_step(course.id, "read ch. 1").await.unwrap();
        let ps = store.add_project_step(project.id, "sketch UI").await.unwrap();
        assert!(!cs.completed && !ps.completed);
        // Course and project steps share one id space.
        assert_ne!(cs.id, ps.id);

        let toggled = store.toggle_course_step(course.id, cs.id).await.unwrap();
        assert!(toggled.completed);
        let toggled = store.toggle_course_step(course.id, cs.id).await.unwrap();
        assert!(!toggled.completed);

        assert_eq!(
            store.toggle_project_step(project.id, 999).await.unwrap_err(),
            StoreError::child("step", 999, "project", project.id)
        );
        assert_eq!(
            store.toggle_project_step(999, ps.id).await.unwrap_err(),
            StoreError::parent("project", 999)
        );
    }

    #[tokio::test]
    async fn unknown_service_is_registered_on_toggle() {
        let store = WorkspaceStore::new();
        assert!(store.connect_service("zotero").await);

        let services = store.list_services().await;
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].name, "zotero");
        assert!(services[0].connected);

        assert!(store.disconnect_service("zotero").await);
        assert!(!store.list_services().await[0].connected);

        // Disconnecting a never-seen service still registers it.
        assert!(store.disconnect_service("drive").await);
        assert_eq!(store.list_services().await.len(), 2);
    }

    #[tokio::test]
    async fn file_catalog_classifies_and_counts() {
        let store = WorkspaceStore::new();
        let pdf = store.add_file("syllabus.pdf").await;
        let other = store.add_file("archive.zip").await;

        assert_eq!(pdf.kind, FileKind::Pdf);
        assert_eq!(pdf.size_bytes, FileKind::Pdf.synthetic_size());
        assert_eq!(other.kind, FileKind::Other);
        assert!(pdf.id < other.id);
        assert_eq!(store.list_files().await.len(), 2);
    }

    #[tokio::test]
    async fn remove_course_cascades_and_keeps_ids_fresh() {
        let store = WorkspaceStore::new();
        let course = store.create_course("Doomed", "D-1", "X", "Fall").await;
        store.add_custom_section(course.id, "s").await.unwrap();
        store
            .seed_assignment(course.id, "a", Utc::now(), 10, AssignmentStatus::Pending)
            .await
            .unwrap();

        assert!(store.remove_course(course.id).await);
        assert!(!store.remove_course(course.id).await);
        assert!(store.list_assignments_for_course(course.id).await.is_empty());
        assert!(store.get_course(course.id).await.is_err());

        // Ids allocated after the cascade keep climbing.
        let next = store.create_course("Next", "N-1", "Y", "Fall").await;
        assert!(next.id > course.id);
    }

    #[tokio::test]
    async fn dashboard_stats_count_pending_and_connected() {
        let store = WorkspaceStore::new();
        let course = store.create_course("C", "C-1", "X", "Fall").await;
        store
            .seed_assignment(
                course.id,
                "due soon",
                Utc::now() + Duration::days(2),
                100,
                AssignmentStatus::Pending,
            )
            .await
            .unwrap();
        store
            .seed_assignment(
                course.id,
                "far out",
                Utc::now() + Duration::days(30),
                100,
                AssignmentStatus::Pending,
            )
            .await
            .unwrap();
        store
            .seed_assignment(
                course.id,
                "done",
                Utc::now() + Duration::days(1),
                100,
                AssignmentStatus::Graded,
            )
            .await
            .unwrap();
        store.connect_service("canvas").await;
        store.disconnect_service("notion").await;

        let stats = store.dashboard_stats().await;
        assert_eq!(stats.courses, 1);
        assert_eq!(stats.pending_assignments, 2);
        assert_eq!(stats.due_this_week, 1);
        assert_eq!(stats.connected_services, 1);
    }
}
