//! Status-filtered project lists and the drag and drop between them.

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
    str::FromStr,
};

use tracing::debug;

use crate::{
    core::{ProjectRepository, Snapshot},
    models::{Project, ProjectId, ProjectStatus},
};

/// MIME type a card puts on the drag payload.
pub const DRAG_MIME: &str = "text/plain";

/// What a card carries while it is being dragged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub mime: String,
    pub data: String,
}

impl DragPayload {
    pub fn start(project: &Project) -> Self {
        Self {
            mime: DRAG_MIME.to_string(),
            data: project.id.to_string(),
        }
    }

    pub fn project_id(&self) -> Option<ProjectId> {
        if self.mime != DRAG_MIME {
            return None;
        }
        self.data.parse().ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Active,
    Finished,
}

impl ListKind {
    pub const ALL: [ListKind; 2] = [ListKind::Active, ListKind::Finished];

    /// Status a project gets when dropped on this list.
    pub const fn status(self) -> ProjectStatus {
        match self {
            ListKind::Active => ProjectStatus::Active,
            ListKind::Finished => ProjectStatus::Finished,
        }
    }

    pub fn heading(self) -> String {
        format!("{} projects", self).to_uppercase()
    }
}

impl From<ProjectStatus> for ListKind {
    fn from(status: ProjectStatus) -> Self {
        match status {
            ProjectStatus::Active => ListKind::Active,
            ProjectStatus::Finished => ListKind::Finished,
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.status(), f)
    }
}

impl FromStr for ListKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<ProjectStatus>()?.into())
    }
}

/// Display form of one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub id: ProjectId,
    pub title: String,
    pub assigned: String,
    pub description: String,
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            title: project.title.clone(),
            assigned: format!("{} assigned", project.people_label()),
            description: project.description.clone(),
        }
    }
}

/// One of the two lists on the board.
///
/// Subscribes to the store on [`attach`](Self::attach) and keeps the
/// projects whose status matches its kind, in store order.
#[derive(Debug)]
pub struct ProjectList {
    kind: ListKind,
    assigned: RefCell<Vec<Project>>,
    renders: Cell<u64>,
}

impl ProjectList {
    pub fn attach<R>(kind: ListKind, repo: &R) -> Rc<Self>
    where
        R: ProjectRepository + ?Sized,
    {
        let list = Rc::new(Self {
            kind,
            assigned: RefCell::new(Vec::new()),
            renders: Cell::new(0),
        });
        let weak = Rc::downgrade(&list);
        repo.subscribe(Rc::new(move |snapshot: &Snapshot| {
            if let Some(list) = weak.upgrade() {
                list.render(snapshot);
            }
        }));
        list
    }

    fn render(&self, snapshot: &[Project]) {
        let status = self.kind.status();
        let assigned: Vec<Project> = snapshot
            .iter()
            .filter(|project| project.status == status)
            .cloned()
            .collect();
        debug!(list = %self.kind, count = assigned.len(), "rendering list");
        *self.assigned.borrow_mut() = assigned;
        self.renders.set(self.renders.get() + 1);
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    pub fn projects(&self) -> Vec<Project> {
        self.assigned.borrow().clone()
    }

    pub fn cards(&self) -> Vec<ProjectCard> {
        self.assigned.borrow().iter().map(ProjectCard::from).collect()
    }

    pub fn len(&self) -> usize {
        self.assigned.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.borrow().is_empty()
    }

    /// Project at a 1-based position, as numbered on screen.
    pub fn nth(&self, position: usize) -> Option<Project> {
        position
            .checked_sub(1)
            .and_then(|index| self.assigned.borrow().get(index).cloned())
    }

    /// Number of times this list has re-rendered.
    pub fn render_count(&self) -> u64 {
        self.renders.get()
    }

    /// Whether a drag hovering over this list may be dropped here.
    pub fn accepts(&self, payload: &DragPayload) -> bool {
        payload.mime == DRAG_MIME
    }

    /// Moves the dragged project to this list's status. Returns false when
    /// the payload is not a project drag.
    pub fn drop_payload<R>(&self, repo: &R, payload: &DragPayload) -> bool
    where
        R: ProjectRepository + ?Sized,
    {
        let Some(id) = payload.project_id() else {
            debug!(list = %self.kind, mime = %payload.mime, "ignoring foreign drop");
            return false;
        };
        repo.update_project_status(id, self.kind.status());
        true
    }
}
