use std::rc::Rc;

use tracing::debug;

use crate::{
    board::{DragPayload, ListKind, ProjectList},
    core::{ProjectRepository, ProjectState},
    input::{InvalidInput, ProjectInput},
    models::{Project, ProjectId},
};

/// Owns the one project store of a running application and the views wired
/// to it: the input form and the active and finished lists.
#[derive(Debug)]
pub struct ProjectApp {
    state: Rc<ProjectState>,
    pub input: ProjectInput,
    active: Rc<ProjectList>,
    finished: Rc<ProjectList>,
    dragging: Option<DragPayload>,
}

impl Default for ProjectApp {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectApp {
    pub fn new() -> Self {
        let state = Rc::new(ProjectState::new());
        let active = ProjectList::attach(ListKind::Active, &*state);
        let finished = ProjectList::attach(ListKind::Finished, &*state);
        Self {
            state,
            input: ProjectInput::default(),
            active,
            finished,
            dragging: None,
        }
    }

    pub fn state(&self) -> &Rc<ProjectState> {
        &self.state
    }

    pub fn list(&self, kind: ListKind) -> &ProjectList {
        match kind {
            ListKind::Active => &self.active,
            ListKind::Finished => &self.finished,
        }
    }

    /// Sum of both lists' render counts; changes whenever the board redraws.
    pub fn render_generation(&self) -> u64 {
        self.active.render_count() + self.finished.render_count()
    }

    pub fn submit(&mut self) -> Result<ProjectId, InvalidInput> {
        self.input.submit(&*self.state)
    }

    pub fn dragging(&self) -> Option<&DragPayload> {
        self.dragging.as_ref()
    }

    pub fn start_drag(&mut self, project: &Project) {
        debug!(id = %project.id, "drag started");
        self.dragging = Some(DragPayload::start(project));
    }

    /// Starts a drag for a project by id; unknown ids leave nothing dragged.
    pub fn start_drag_by_id(&mut self, id: ProjectId) {
        self.dragging = self
            .state
            .get_project_by_id(id)
            .map(|project| DragPayload::start(&project));
    }

    pub fn cancel_drag(&mut self) {
        if self.dragging.take().is_some() {
            debug!("drag cancelled");
        }
    }

    /// Drops the current drag on `target`. Returns false when nothing was
    /// being dragged or the list refused the payload.
    pub fn drop_on(&mut self, target: ListKind) -> bool {
        let Some(payload) = self.dragging.take() else {
            return false;
        };
        let list = self.list(target);
        list.accepts(&payload) && list.drop_payload(&*self.state, &payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectStatus;

    #[test]
    fn submit_then_drag_to_finished() {
        let mut app = ProjectApp::new();
        app.input = ProjectInput::new("Build API", "A backend service", "3");
        let id = app.submit().unwrap();
        assert_eq!(app.input, ProjectInput::default());
        assert_eq!(app.list(ListKind::Active).len(), 1);

        let project = app.list(ListKind::Active).nth(1).unwrap();
        app.start_drag(&project);
        assert!(app.drop_on(ListKind::Finished));

        assert!(app.dragging().is_none());
        assert!(app.list(ListKind::Active).is_empty());
        assert_eq!(app.list(ListKind::Finished).nth(1).unwrap().id, id);
        assert_eq!(
            app.state().get_project_by_id(id).unwrap().status,
            ProjectStatus::Finished
        );
    }

    #[test]
    fn rejected_submit_keeps_fields() {
        let mut app = ProjectApp::new();
        app.input = ProjectInput::new("Build API", "abc", "3");
        assert!(app.submit().is_err());
        assert_eq!(app.input.description, "abc");
        assert!(app.state().is_empty());
        assert_eq!(app.render_generation(), 0);
    }

    #[test]
    fn drop_without_drag_does_nothing() {
        let mut app = ProjectApp::new();
        assert!(!app.drop_on(ListKind::Finished));
    }
}
