use crate::app::history::{EditHistory, Snapshot};
use crate::app::notifications::NotificationBus;
use crate::app::CommandLog;
use crate::core::{ElementId, ProcessModel};
use crate::shared::EditorOptions;
use std::sync::Arc;
use std::time::Instant;

use super::{EditorToolState, ViewState};

/// Vorgemerkter Prozesswechsel (nach einem Import)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredSwitch {
    /// Zielprozess
    pub process: ElementId,
    /// Fälligkeitszeitpunkt
    pub due: Instant,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelles Modell (zuletzt committete Version)
    pub model: Arc<ProcessModel>,
    /// Fokus-Prozess (Wurzel des gerenderten Baums)
    pub focus: Option<ElementId>,
    /// View-State
    pub view: ViewState,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// Vorgemerkter Wechsel zum Einstiegsprozess
    pub pending_switch: Option<DeferredSwitch>,
    /// Benachrichtigungs-Bus
    pub bus: NotificationBus,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit gegebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            model: Arc::new(ProcessModel::new()),
            focus: None,
            view: ViewState::new(),
            editor: EditorToolState::new(),
            pending_switch: None,
            bus: NotificationBus::new(),
            command_log: CommandLog::new(),
            history: EditHistory::with_depth(options.history_depth),
            options,
        }
    }

    /// Gibt die Anzahl der Elemente zurück (für Statusanzeige)
    pub fn element_count(&self) -> usize {
        self.model.len()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record(snap);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
