use iced::{
    Element, Length, Task,
    widget::{button, column, container, mouse_area, row, text, text_input},
};

use crate::{
    board::ListKind,
    gui::{AppState, Message, widgets},
};

pub struct TrackerApp {
    state: AppState,
}

pub fn run() -> iced::Result {
    iced::application(TrackerApp::new, TrackerApp::update, TrackerApp::view)
        .title(TrackerApp::title)
        .run()
}

impl TrackerApp {
    fn new() -> (Self, Task<Message>) {
        (
            Self {
                state: AppState::default(),
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        "Project Tracker".to_string()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.state.update(message);
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let app = &self.state.project_app;

        let form = column![
            text_input("Title", &app.input.title).on_input(Message::TitleChanged),
            text_input("Description", &app.input.description)
                .on_input(Message::DescriptionChanged),
            text_input("People", &app.input.people)
                .on_input(Message::PeopleChanged)
                .on_submit(Message::Submit),
            button("Add Project").on_press(Message::Submit),
        ]
        .spacing(10);

        let alert: Element<'_, Message> = match &self.state.alert {
            Some(alert) => row![
                text(alert.clone()),
                button("OK").on_press(Message::DismissAlert),
            ]
            .spacing(10)
            .into(),
            None => column![].into(),
        };

        let dragged = app.dragging().map(|payload| payload.data.as_str());
        let lists = row(ListKind::ALL.into_iter().map(|kind| {
            widgets::project_list(app.list(kind), dragged, self.state.is_drop_target(kind))
        }))
        .spacing(20)
        .height(Length::Fill);

        let content = column![form, alert, lists].spacing(20).padding(20);

        mouse_area(
            container(content)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .on_release(Message::CancelDrag)
        .into()
    }
}
