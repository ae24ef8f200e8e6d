//! Typed notifier events and synchronous listener dispatch.

use crate::error::NotifierError;

/// Result record of a completed comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateInfo {
    pub current_version: String,
    pub version: String,
    pub description_release: String,
    pub pre_release: bool,
    pub release_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifierEvent {
    CheckingForUpdate,
    UpdateAvailable(UpdateInfo),
    UpdateNotAvailable(UpdateInfo),
    ThisIsLastUpdate(UpdateInfo),
    Error(NotifierError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    CheckingForUpdate,
    UpdateAvailable,
    UpdateNotAvailable,
    ThisIsLastUpdate,
    Error,
}

impl EventKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            EventKind::CheckingForUpdate => "checking-for-update",
            EventKind::UpdateAvailable => "update-available",
            EventKind::UpdateNotAvailable => "update-not-available",
            EventKind::ThisIsLastUpdate => "this-is-last-update",
            EventKind::Error => "error",
        }
    }

    /// Whether this kind reports the result of a comparison.
    #[must_use]
    pub fn is_outcome(self) -> bool {
        matches!(
            self,
            EventKind::UpdateAvailable | EventKind::UpdateNotAvailable | EventKind::ThisIsLastUpdate
        )
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl NotifierEvent {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            NotifierEvent::CheckingForUpdate => EventKind::CheckingForUpdate,
            NotifierEvent::UpdateAvailable(_) => EventKind::UpdateAvailable,
            NotifierEvent::UpdateNotAvailable(_) => EventKind::UpdateNotAvailable,
            NotifierEvent::ThisIsLastUpdate(_) => EventKind::ThisIsLastUpdate,
            NotifierEvent::Error(_) => EventKind::Error,
        }
    }

    #[must_use]
    pub fn update_info(&self) -> Option<&UpdateInfo> {
        match self {
            NotifierEvent::UpdateAvailable(info)
            | NotifierEvent::UpdateNotAvailable(info)
            | NotifierEvent::ThisIsLastUpdate(info) => Some(info),
            NotifierEvent::CheckingForUpdate | NotifierEvent::Error(_) => None,
        }
    }
}

type Listener = Box<dyn Fn(&NotifierEvent) + Send + Sync>;

struct Subscription {
    kind: Option<EventKind>,
    listener: Listener,
}

/// Listeners in registration order.
#[derive(Default)]
pub(crate) struct EventBus {
    subscriptions: Vec<Subscription>,
}

impl EventBus {
    pub(crate) fn subscribe(&mut self, kind: Option<EventKind>, listener: Listener) {
        self.subscriptions.push(Subscription { kind, listener });
    }

    pub(crate) fn emit(&self, event: &NotifierEvent) {
        let kind = event.kind();
        for subscription in &self.subscriptions {
            if subscription.kind.is_none_or(|wanted| wanted == kind) {
                (subscription.listener)(event);
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.subscriptions.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn info() -> UpdateInfo {
        UpdateInfo {
            current_version: "1.0.0".to_string(),
            version: "1.1.0".to_string(),
            description_release: String::new(),
            pre_release: false,
            release_url: "https://github.com/octo/app/releases/tag/v1.1.0".to_string(),
        }
    }

    #[test]
    fn emit_delivers_in_registration_order_and_filters_by_kind() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut bus = EventBus::default();

        let all = Arc::clone(&seen);
        bus.subscribe(
            None,
            Box::new(move |event| all.lock().unwrap().push(format!("all:{}", event.kind()))),
        );
        let available = Arc::clone(&seen);
        bus.subscribe(
            Some(EventKind::UpdateAvailable),
            Box::new(move |event| {
                available
                    .lock()
                    .unwrap()
                    .push(format!("available:{}", event.update_info().unwrap().version));
            }),
        );

        bus.emit(&NotifierEvent::CheckingForUpdate);
        bus.emit(&NotifierEvent::UpdateAvailable(info()));

        assert_eq!(bus.len(), 2);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                "all:checking-for-update",
                "all:update-available",
                "available:1.1.0",
            ]
        );
    }

    #[test]
    fn only_comparison_results_are_outcomes() {
        assert!(EventKind::UpdateAvailable.is_outcome());
        assert!(EventKind::UpdateNotAvailable.is_outcome());
        assert!(EventKind::ThisIsLastUpdate.is_outcome());
        assert!(!EventKind::CheckingForUpdate.is_outcome());
        assert!(!EventKind::Error.is_outcome());
        assert!(NotifierEvent::CheckingForUpdate.update_info().is_none());
    }
}
