//! Synchroner Publish/Subscribe-Bus für Struktur- und Hinweis-Benachrichtigungen.
//!
//! Abonnenten registrieren sich pro Topic (`dataStore.update`) oder per
//! Präfix (`layerPanel.*`, `*`). Zustellung erfolgt in Abo-Reihenfolge.

use crate::core::{ElementId, Rejection};
use serde::Serialize;

/// Topic: Datenhaltung pro Prozess neu berechnen
pub const DATA_STORE_UPDATE: &str = "dataStore.update";
/// Topic: Prozess angelegt
pub const PROCESS_CREATED: &str = "layerPanel.processCreated";
/// Topic: Prozess entfernt
pub const PROCESS_DELETED: &str = "layerPanel.processDeleted";
/// Topic: Fokus gewechselt
pub const PROCESS_SWITCHED: &str = "layerPanel.processSwitched";
/// Topic: Import abgeschlossen, Wechsel zum Einstiegsprozess steht aus
pub const IMPORT_DONE: &str = "import.done";

/// Eine Benachrichtigung
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Notification {
    /// Datenhaltung neu berechnen
    DataStoreUpdate,
    /// Prozess angelegt
    ProcessCreated {
        /// Prozess
        process: ElementId,
    },
    /// Prozess entfernt
    ProcessDeleted {
        /// Prozess
        process: ElementId,
    },
    /// Fokus gewechselt
    ProcessSwitched {
        /// Neuer Fokus
        process: ElementId,
    },
    /// Regelverstoß (Topic je nach Art)
    Rejected(Rejection),
    /// Import abgeschlossen
    ImportDone {
        /// Vorgemerkter Einstiegsprozess
        entry: Option<ElementId>,
    },
}

impl Notification {
    /// Topic der Benachrichtigung
    pub fn topic(&self) -> &'static str {
        match self {
            Notification::DataStoreUpdate => DATA_STORE_UPDATE,
            Notification::ProcessCreated { .. } => PROCESS_CREATED,
            Notification::ProcessDeleted { .. } => PROCESS_DELETED,
            Notification::ProcessSwitched { .. } => PROCESS_SWITCHED,
            Notification::Rejected(rejection) => rejection.kind.topic(),
            Notification::ImportDone { .. } => IMPORT_DONE,
        }
    }
}

/// Handle eines Abonnements (für `unsubscribe`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&Notification)>;

struct Subscription {
    id: SubscriptionId,
    pattern: String,
    callback: Callback,
}

fn matches(pattern: &str, topic: &str) -> bool {
    match pattern.strip_suffix('*') {
        Some(prefix) => topic.starts_with(prefix),
        None => pattern == topic,
    }
}

/// Benachrichtigungs-Bus mit begrenztem Verlauf
#[derive(Default)]
pub struct NotificationBus {
    subscriptions: Vec<Subscription>,
    next_id: u64,
    recent: Vec<Notification>,
}

impl NotificationBus {
    const MAX_RECENT: usize = 500;

    /// Erstellt einen leeren Bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Callback für ein Topic oder Präfix-Muster.
    pub fn subscribe(
        &mut self,
        pattern: impl Into<String>,
        callback: impl FnMut(&Notification) + 'static,
    ) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.subscriptions.push(Subscription {
            id,
            pattern: pattern.into(),
            callback: Box::new(callback),
        });
        id
    }

    /// Entfernt ein Abonnement.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscriptions.retain(|s| s.id != id);
    }

    /// Stellt eine Benachrichtigung synchron allen passenden Abonnenten zu.
    pub fn publish(&mut self, notification: Notification) {
        let topic = notification.topic();
        log::debug!("Benachrichtigung: {}", topic);
        for subscription in self
            .subscriptions
            .iter_mut()
            .filter(|s| matches(&s.pattern, topic))
        {
            (subscription.callback)(&notification);
        }
        if self.recent.len() >= Self::MAX_RECENT {
            self.recent.drain(..Self::MAX_RECENT / 2);
        }
        self.recent.push(notification);
    }

    /// Zuletzt veröffentlichte Benachrichtigungen (älteste zuerst)
    pub fn recent(&self) -> &[Notification] {
        &self.recent
    }

    /// Anzahl aktiver Abonnements
    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn delivers_by_topic_and_prefix_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut bus = NotificationBus::new();

        let log = seen.clone();
        bus.subscribe(PROCESS_CREATED, move |n| {
            log.borrow_mut().push(format!("exact:{}", n.topic()))
        });
        let log = seen.clone();
        bus.subscribe("layerPanel.*", move |n| {
            log.borrow_mut().push(format!("prefix:{}", n.topic()))
        });

        bus.publish(Notification::ProcessCreated { process: 1 });
        bus.publish(Notification::ProcessSwitched { process: 1 });
        bus.publish(Notification::DataStoreUpdate);

        assert_eq!(
            *seen.borrow(),
            vec![
                "exact:layerPanel.processCreated".to_string(),
                "prefix:layerPanel.processCreated".to_string(),
                "prefix:layerPanel.processSwitched".to_string(),
            ]
        );
        assert_eq!(bus.recent().len(), 3);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let count = Rc::new(RefCell::new(0));
        let mut bus = NotificationBus::new();
        let counter = count.clone();
        let id = bus.subscribe("*", move |_| *counter.borrow_mut() += 1);

        bus.publish(Notification::DataStoreUpdate);
        bus.unsubscribe(id);
        bus.publish(Notification::DataStoreUpdate);

        assert_eq!(*count.borrow(), 1);
        assert_eq!(bus.subscriber_count(), 0);
    }
}
