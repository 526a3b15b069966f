//! Demo seed data — the mock state the dashboard boots with.
//!
//! Mirrors what a freshly-synced term would look like: a few courses with
//! assignments, quizzes, and workflows, the usual integrations, and a couple
//! of catalog files. Everything goes through the store's public API so seeded
//! ids come from the same allocators as runtime ids.

use chrono::{Duration, Utc};
use tracing::info;

use super::model::AssignmentStatus;
use super::store::WorkspaceStore;

/// Populate a store with demo data. Seeding an already-populated store just
/// appends; callers are expected to seed once at startup.
pub async fn populate(store: &WorkspaceStore) {
    let now = Utc::now();

    let linalg = store
        .create_course("Linear Algebra", "MATH-221", "Dr. Petrova", "Fall 2026")
        .await;
    let history = store
        .create_course("Modern European History", "HIST-310", "Prof. Okafor", "Fall 2026")
        .await;
    let ochem = store
        .create_course("Organic Chemistry", "CHEM-201", "Dr. Lindqvist", "Fall 2026")
        .await;

    // Seeded children reference courses created just above, so these cannot
    // fail; ignore the results rather than unwrap.
    let _ = store
        .seed_assignment(
            linalg.id,
            "Problem Set 4: Eigenvalues",
            now + Duration::days(3),
            100,
            AssignmentStatus::Pending,
        )
        .await;
    let _ = store
        .seed_assignment(
            linalg.id,
            "Problem Set 3: Determinants",
            now - Duration::days(4),
            100,
            AssignmentStatus::Graded,
        )
        .await;
    let _ = store
        .seed_assignment(
            history.id,
            "Essay: The Interwar Years",
            now + Duration::days(10),
            150,
            AssignmentStatus::Pending,
        )
        .await;
    let _ = store
        .seed_assignment(
            history.id,
            "Primary Source Analysis",
            now + Duration::days(2),
            50,
            AssignmentStatus::Pending,
        )
        .await;
    let _ = store
        .seed_assignment(
            ochem.id,
            "Lab Report: Distillation",
            now + Duration::days(5),
            75,
            AssignmentStatus::Submitted,
        )
        .await;

    let _ = store
        .seed_quiz(linalg.id, "Quiz 5: Diagonalization", 10, now + Duration::days(6))
        .await;
    let _ = store
        .seed_quiz(history.id, "Reading Check: Week 9", 5, now + Duration::days(1))
        .await;
    let _ = store
        .seed_quiz(ochem.id, "Nomenclature Quiz", 15, now + Duration::days(8))
        .await;

    for text in [
        "Review lecture notes",
        "Work through practice problems",
        "Attend office hours",
        "Self-test before the quiz",
    ] {
        let _ = store.add_course_step(linalg.id, text).await;
    }
    for text in ["Finish assigned reading", "Draft essay outline"] {
        let _ = store.add_course_step(history.id, text).await;
    }

    for service in ["canvas", "google_calendar", "google_drive", "notion", "zotero"] {
        store.disconnect_service(service).await;
    }
    store.connect_service("canvas").await;

    store.add_file("MATH-221-syllabus.pdf").await;
    store.add_file("week8-lecture-slides.pptx").await;
    store.add_file("interwar-sources.docx").await;

    let thesis = store
        .create_project(
            "Thesis Prototype",
            "Interactive visualization for the senior thesis",
            "research",
        )
        .await;
    let _ = store
        .add_project_note(thesis.id, "Advisor wants a demo by mid-November")
        .await;
    let _ = store.add_project_step(thesis.id, "Collect the dataset").await;
    let _ = store.add_project_step(thesis.id, "Build a first chart").await;

    info!("Workspace seeded with demo data");
}
