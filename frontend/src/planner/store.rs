use std::cell::RefCell;
use std::future::Future;
use std::rc::{Rc, Weak};

use log::{error, info};

use super::client::PlanService;
use super::models::{
    PlannerSnapshot, PreferenceField, APOLOGY_TEXT, PENDING_TEXT,
};

type Listener = Rc<dyn Fn(&PlannerSnapshot)>;

#[derive(Default)]
struct Listeners {
    next_id: usize,
    entries: Vec<(usize, Listener)>,
}

/// Shared state behind the preferences form and the plan viewer.
///
/// Cloning gives another handle to the same state. Every change notifies
/// subscribers with a fresh snapshot; the view re-renders from that.
#[derive(Clone, Default)]
pub struct PlannerStore {
    state: Rc<RefCell<PlannerSnapshot>>,
    listeners: Rc<RefCell<Listeners>>,
}

impl PartialEq for PlannerStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

/// Keeps a listener registered until dropped.
pub struct Subscription {
    listeners: Weak<RefCell<Listeners>>,
    id: usize,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().entries.retain(|(id, _)| *id != self.id);
        }
    }
}

impl PlannerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> PlannerSnapshot {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self, listener: impl Fn(&PlannerSnapshot) + 'static) -> Subscription {
        let listener: Listener = Rc::new(listener);
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, listener));
        Subscription {
            listeners: Rc::downgrade(&self.listeners),
            id,
        }
    }

    pub fn set_field(&self, field: PreferenceField, value: impl Into<String>) {
        self.state.borrow_mut().preferences.set(field, value.into());
        self.notify();
    }

    /// Starts a submission with the current preferences.
    ///
    /// The pending text is shown before this returns, so nothing stale is
    /// on screen while the request is out. The returned future applies the
    /// outcome; overlapping submissions are not correlated and whichever
    /// finishes last owns the display.
    pub fn generate_plan<S>(&self, service: &S) -> impl Future<Output = ()> + 'static
    where
        S: PlanService + ?Sized,
    {
        self.set_display(PENDING_TEXT);

        let request = self.state.borrow().preferences.to_request();
        info!("Requesting trip plan for destination {:?}", request.destination);
        let response = service.request_plan(request);

        let store = self.clone();
        async move {
            match response.await {
                Ok(plan) => store.set_display(plan),
                Err(err) => {
                    error!("Failed to generate plan: {}", err);
                    store.set_display(APOLOGY_TEXT);
                }
            }
        }
    }

    fn set_display(&self, text: impl Into<String>) {
        self.state.borrow_mut().display = text.into();
        self.notify();
    }

    fn notify(&self) {
        let snapshot = self.snapshot();
        // Listeners may subscribe or drop their guard while being called.
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .entries
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}
