pub mod app;
pub mod board;
pub mod core;
pub mod input;
pub mod models;
pub mod shell;
pub mod validation;

pub use app::ProjectApp;
pub use board::{DragPayload, ListKind, ProjectCard, ProjectList};
pub use crate::core::{Listener, ProjectRepository, ProjectState, Snapshot};
pub use input::{InvalidInput, ProjectInput};
pub use models::{NewProject, Project, ProjectId, ProjectStatus};
pub use validation::{Validatable, Value, validate};

#[cfg(feature = "gui")]
pub mod gui;
