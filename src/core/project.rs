use std::rc::Rc;

use crate::models::{Project, ProjectId, ProjectStatus};

/// Immutable copy of the project collection, shared by every subscriber of
/// one notification round.
pub type Snapshot = Rc<[Project]>;

/// Callback invoked with a fresh snapshot after every change.
pub type Listener = Rc<dyn Fn(&Snapshot)>;

pub trait ProjectRepository {
    /// Appends a new `Active` project and notifies subscribers.
    fn create_project(&self, title: &str, description: &str, people: u32) -> ProjectId;
    /// Moves a project to `new_status`. Unknown ids and unchanged statuses are ignored.
    fn update_project_status(&self, id: ProjectId, new_status: ProjectStatus);
    /// Registers a listener for all future changes. There is no way to unsubscribe.
    fn subscribe(&self, listener: Listener);
    fn projects(&self) -> Snapshot;
    fn get_project_by_id(&self, id: ProjectId) -> Option<Project>;
}
