use std::{cell::RefCell, rc::Rc};

use tracing::debug;

use crate::{
    core::project::{Listener, ProjectRepository, Snapshot},
    models::{Project, ProjectId, ProjectStatus},
};

/// In-memory project store with change notification.
///
/// Projects keep creation order for the lifetime of the store. Every change
/// builds one [`Snapshot`] and hands it to each listener in subscription
/// order before the mutating call returns.
///
/// The store is single-threaded (`!Send`). No borrow is held while listeners
/// run, so a listener may call back into the store; such a call completes its
/// own notification round before the outer round continues.
#[derive(Default)]
pub struct ProjectState {
    projects: RefCell<Vec<Project>>,
    listeners: RefCell<Vec<Listener>>,
}

impl std::fmt::Debug for ProjectState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectState")
            .field("projects", &self.projects.borrow())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

impl ProjectState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.projects.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.borrow().is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn snapshot(&self) -> Snapshot {
        Rc::from(self.projects.borrow().as_slice())
    }

    fn update_listeners(&self) {
        let snapshot = self.snapshot();
        // listeners registered during this round only see later rounds
        let listeners = self.listeners.borrow().clone();
        debug!(
            projects = snapshot.len(),
            listeners = listeners.len(),
            "notifying listeners"
        );
        for listener in &listeners {
            listener(&snapshot);
        }
    }
}

fn unused_id(projects: &[Project]) -> ProjectId {
    loop {
        let id = ProjectId::new_v4();
        if projects.iter().all(|project| project.id != id) {
            return id;
        }
    }
}

impl ProjectRepository for ProjectState {
    fn create_project(&self, title: &str, description: &str, people: u32) -> ProjectId {
        let id = {
            let mut projects = self.projects.borrow_mut();
            let id = unused_id(&projects);
            projects.push(Project {
                id,
                title: title.to_string(),
                description: description.to_string(),
                people,
                status: ProjectStatus::Active,
            });
            id
        };
        debug!(%id, title, people, "created project");
        self.update_listeners();
        id
    }

    fn update_project_status(&self, id: ProjectId, new_status: ProjectStatus) {
        let changed = {
            let mut projects = self.projects.borrow_mut();
            match projects.iter_mut().find(|project| project.id == id) {
                Some(project) if project.status != new_status => {
                    project.status = new_status;
                    true
                }
                Some(_) => {
                    debug!(%id, status = %new_status, "project already has status");
                    false
                }
                None => {
                    debug!(%id, "ignoring status update for unknown project");
                    false
                }
            }
        };
        if changed {
            debug!(%id, status = %new_status, "updated project status");
            self.update_listeners();
        }
    }

    fn subscribe(&self, listener: Listener) {
        self.listeners.borrow_mut().push(listener);
    }

    fn projects(&self) -> Snapshot {
        self.snapshot()
    }

    fn get_project_by_id(&self, id: ProjectId) -> Option<Project> {
        self.projects
            .borrow()
            .iter()
            .find(|project| project.id == id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn recording(store: &ProjectState) -> Rc<RefCell<Vec<Snapshot>>> {
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        store.subscribe(Rc::new(move |snapshot: &Snapshot| {
            sink.borrow_mut().push(snapshot.clone())
        }));
        received
    }

    #[test]
    fn subscribe_does_not_back_fill() {
        let store = ProjectState::new();
        store.create_project("Build API", "A backend service", 3);
        let received = recording(&store);
        assert!(received.borrow().is_empty());
    }

    #[test]
    fn listeners_run_in_subscription_order_with_the_same_snapshot() {
        let store = ProjectState::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for n in 0..3 {
            let order = order.clone();
            store.subscribe(Rc::new(move |snapshot: &Snapshot| {
                order.borrow_mut().push((n, Rc::as_ptr(snapshot) as *const Project))
            }));
        }

        store.create_project("Build API", "A backend service", 3);

        let order = order.borrow();
        assert_eq!(order.iter().map(|(n, _)| *n).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!(order.iter().all(|(_, ptr)| *ptr == order[0].1));
    }

    #[test]
    fn duplicate_registrations_are_notified_twice() {
        let store = ProjectState::new();
        let calls = Rc::new(Cell::new(0));
        let listener: Listener = {
            let calls = calls.clone();
            Rc::new(move |_: &Snapshot| calls.set(calls.get() + 1))
        };
        store.subscribe(listener.clone());
        store.subscribe(listener);

        store.create_project("Build API", "A backend service", 3);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn listener_may_reenter_the_store() {
        let store = Rc::new(ProjectState::new());
        let weak = Rc::downgrade(&store);
        store.subscribe(Rc::new(move |snapshot: &Snapshot| {
            if snapshot.len() == 1 {
                if let Some(store) = weak.upgrade() {
                    store.create_project("Follow-up", "Created by a listener", 1);
                }
            }
        }));

        store.create_project("Build API", "A backend service", 3);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn listener_added_during_notification_waits_for_next_round() {
        let store = Rc::new(ProjectState::new());
        let late_calls = Rc::new(Cell::new(0));
        let weak = Rc::downgrade(&store);
        let counter = late_calls.clone();
        let added = Cell::new(false);
        store.subscribe(Rc::new(move |_: &Snapshot| {
            if added.replace(true) {
                return;
            }
            if let Some(store) = weak.upgrade() {
                let counter = counter.clone();
                store.subscribe(Rc::new(move |_: &Snapshot| counter.set(counter.get() + 1)));
            }
        }));

        store.create_project("Build API", "A backend service", 3);
        assert_eq!(late_calls.get(), 0);
        store.create_project("Redesign UI", "New visuals", 2);
        assert_eq!(late_calls.get(), 1);
    }

    #[test]
    fn ids_are_unique() {
        let store = ProjectState::new();
        let ids: Vec<_> = (0..50)
            .map(|n| store.create_project(&format!("p{n}"), "description", 1))
            .collect();
        let mut deduped = ids.clone();
        deduped.sort_by_key(|id| id.to_string());
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }
}
