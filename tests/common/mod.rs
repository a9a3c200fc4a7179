mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from project_tracker for tests
pub use project_tracker::{
    ListKind, Listener, Project, ProjectApp, ProjectId, ProjectInput, ProjectList,
    ProjectRepository, ProjectState, ProjectStatus, Snapshot,
};
