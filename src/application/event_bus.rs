use crate::domain::entities::{AppState, OfficeApp};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, PartialEq)]
pub enum CoordinatorEvent {
    /// Published after every write to one application's record.
    AppChanged(OfficeApp, AppState),
    StatusRefreshed { ok: bool },
    BulkStarted(Vec<OfficeApp>),
    BulkFinished,
}

type Listener = Box<dyn Fn(&CoordinatorEvent) + Send + Sync>;

pub struct EventBus {
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Listeners run synchronously on the publishing task and must not subscribe.
    pub fn publish(&self, event: CoordinatorEvent) {
        let listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        for listener in listeners.iter() {
            listener(&event);
        }
    }

    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&CoordinatorEvent) + Send + Sync + 'static,
    {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(listener));
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            listeners: Arc::clone(&self.listeners),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_listeners() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        bus.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

        bus.clone().publish(CoordinatorEvent::BulkFinished);
        bus.publish(CoordinatorEvent::StatusRefreshed { ok: false });

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                CoordinatorEvent::BulkFinished,
                CoordinatorEvent::StatusRefreshed { ok: false },
            ]
        );
    }
}
