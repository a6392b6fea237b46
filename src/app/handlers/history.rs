//! Handler für Undo/Redo-Operationen.

use crate::app::history::Snapshot;
use crate::app::use_cases;
use crate::app::AppState;

fn after_restore(state: &mut AppState) {
    state.editor.label_edit = None;
    state.pending_switch = None;
    use_cases::data_changed(state);
}

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    if let Some(prev) = state.history.undo(current) {
        prev.apply_to(state);
        after_restore(state);
        log::info!("Undo ausgeführt, Fokus {:?}", state.focus);
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    if let Some(next) = state.history.redo(current) {
        next.apply_to(state);
        after_restore(state);
        log::info!("Redo ausgeführt, Fokus {:?}", state.focus);
    } else {
        log::debug!("Redo: nichts zu tun");
    }
}
