use crate::{board::ListKind, models::ProjectId};

#[derive(Debug, Clone)]
pub enum Message {
    TitleChanged(String),
    DescriptionChanged(String),
    PeopleChanged(String),
    Submit,
    DismissAlert,
    DragStart(ProjectId),
    HoverList(ListKind),
    LeaveList(ListKind),
    Drop(ListKind),
    CancelDrag,
}
