use crate::{app::ProjectApp, board::ListKind, gui::Message};

#[derive(Debug, Default)]
pub struct AppState {
    pub project_app: ProjectApp,
    pub alert: Option<String>,
    /// Column under the cursor, if any.
    pub hovered: Option<ListKind>,
}

impl AppState {
    pub fn update(&mut self, message: Message) {
        let app = &mut self.project_app;
        match message {
            Message::TitleChanged(value) => app.input.title = value,
            Message::DescriptionChanged(value) => app.input.description = value,
            Message::PeopleChanged(value) => app.input.people = value,
            Message::Submit => match app.submit() {
                Ok(_) => self.alert = None,
                Err(e) => self.alert = Some(e.to_string()),
            },
            Message::DismissAlert => self.alert = None,
            Message::DragStart(id) => app.start_drag_by_id(id),
            Message::HoverList(kind) => self.hovered = Some(kind),
            Message::LeaveList(kind) => {
                if self.hovered == Some(kind) {
                    self.hovered = None;
                }
            }
            Message::Drop(kind) => {
                app.drop_on(kind);
            }
            Message::CancelDrag => app.cancel_drag(),
        }
    }

    /// True for the column under the cursor while it would accept the
    /// current drag.
    pub fn is_drop_target(&self, kind: ListKind) -> bool {
        self.hovered == Some(kind)
            && self
                .project_app
                .dragging()
                .is_some_and(|payload| self.project_app.list(kind).accepts(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ProjectRepository;

    fn state_with_project() -> AppState {
        let mut state = AppState::default();
        state.update(Message::TitleChanged("Build API".into()));
        state.update(Message::DescriptionChanged("A backend service".into()));
        state.update(Message::PeopleChanged("3".into()));
        state.update(Message::Submit);
        state
    }

    #[test]
    fn only_hovered_column_is_highlighted_while_dragging() {
        let mut state = state_with_project();
        let id = state.project_app.state().projects()[0].id;

        state.update(Message::HoverList(ListKind::Finished));
        assert!(!state.is_drop_target(ListKind::Finished));

        state.update(Message::DragStart(id));
        assert!(state.is_drop_target(ListKind::Finished));
        assert!(!state.is_drop_target(ListKind::Active));

        state.update(Message::HoverList(ListKind::Active));
        assert!(state.is_drop_target(ListKind::Active));
        assert!(!state.is_drop_target(ListKind::Finished));
    }

    #[test]
    fn leaving_a_column_clears_its_highlight() {
        let mut state = state_with_project();
        let id = state.project_app.state().projects()[0].id;
        state.update(Message::DragStart(id));

        state.update(Message::HoverList(ListKind::Finished));
        // a late exit from the previous column must not clear the new one
        state.update(Message::LeaveList(ListKind::Active));
        assert!(state.is_drop_target(ListKind::Finished));

        state.update(Message::LeaveList(ListKind::Finished));
        assert_eq!(state.hovered, None);
        assert!(!state.is_drop_target(ListKind::Finished));
    }

    #[test]
    fn drop_on_hovered_column_finishes_project() {
        let mut state = state_with_project();
        let id = state.project_app.state().projects()[0].id;

        state.update(Message::DragStart(id));
        state.update(Message::HoverList(ListKind::Finished));
        state.update(Message::Drop(ListKind::Finished));
        state.update(Message::CancelDrag);

        assert!(!state.is_drop_target(ListKind::Finished));
        assert_eq!(state.project_app.list(ListKind::Finished).len(), 1);
        assert!(state.alert.is_none());
    }
}
