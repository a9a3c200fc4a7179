mod project;
mod state;

pub use project::{Listener, ProjectRepository, Snapshot};
pub use state::ProjectState;
