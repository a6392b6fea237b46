//! Protokoll der vom Controller ausgeführten Commands.
//!
//! Hält die Reihenfolge der Modelländerungen und Ebenenwechsel einer Sitzung
//! fest. Importierte Modelle landen nur als leerer Platzhalter im Protokoll,
//! der Zustand selbst liegt in der Undo-Historie.

use super::AppCommand;

/// Obergrenze; beim Überlauf fällt die ältere Hälfte weg
const CAPACITY: usize = 1000;

/// Ausgeführte Commands in Ausführungsreihenfolge
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt `command` an.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= CAPACITY {
            self.entries.drain(..CAPACITY / 2);
        }
        self.entries.push(match command {
            AppCommand::ImportModel { .. } => AppCommand::ImportModel {
                model: Box::default(),
            },
            other => other.clone(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }

    /// Anzahl der Ebenenwechsel (Dekomposition, Komposition, Prozesswechsel)
    pub fn navigation_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|command| {
                matches!(
                    command,
                    AppCommand::Decompose { .. }
                        | AppCommand::Compose { .. }
                        | AppCommand::SwitchProcess { .. }
                )
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_drops_older_half_and_keeps_latest() {
        let mut log = CommandLog::new();
        for _ in 0..CAPACITY {
            log.record(&AppCommand::ZoomToFit);
        }
        log.record(&AppCommand::Compose { system_limit: 7 });
        assert_eq!(log.len(), CAPACITY / 2 + 1);
        assert!(matches!(
            log.entries().last(),
            Some(AppCommand::Compose { system_limit: 7 })
        ));
    }

    #[test]
    fn import_is_logged_without_model() {
        let mut model = crate::core::ProcessModel::new();
        model.allocate_id();
        let mut log = CommandLog::new();
        log.record(&AppCommand::ImportModel {
            model: Box::new(model),
        });
        match log.entries() {
            [AppCommand::ImportModel { model }] => assert!(model.is_empty()),
            other => panic!("Unerwartete Einträge: {other:?}"),
        }
    }

    #[test]
    fn counts_only_level_changes_as_navigation() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::Decompose { operator: 3 });
        log.record(&AppCommand::CancelLabelEdit);
        log.record(&AppCommand::SwitchProcess { process: 1 });
        log.record(&AppCommand::Undo);
        log.record(&AppCommand::Compose { system_limit: 9 });
        assert_eq!(log.navigation_count(), 3);
    }
}
