use std::{cell::RefCell, rc::Rc};

use project_tracker::{ProjectRepository, ProjectState, Snapshot};

/// Collects every snapshot delivered to one subscriber.
pub type Recorder = Rc<RefCell<Vec<Snapshot>>>;

/// Subscribes a recorder to the store.
pub fn record_snapshots(store: &ProjectState) -> Recorder {
    let received: Recorder = Rc::new(RefCell::new(Vec::new()));
    let sink = received.clone();
    store.subscribe(Rc::new(move |snapshot: &Snapshot| {
        sink.borrow_mut().push(snapshot.clone())
    }));
    received
}

/// Creates the two projects used throughout the tests.
pub fn seed_projects(store: &ProjectState) -> (project_tracker::ProjectId, project_tracker::ProjectId) {
    let first = store.create_project("Build API", "A backend service", 3);
    let second = store.create_project("Redesign UI", "New visuals", 2);
    (first, second)
}

/// Project fields other than status, for comparing before and after a move.
pub fn identity(project: &project_tracker::Project) -> (String, String, String, u32) {
    (
        project.id.to_string(),
        project.title.clone(),
        project.description.clone(),
        project.people,
    )
}
