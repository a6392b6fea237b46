//! Use-Cases der Application-Layer-Orchestrierung.
//!
//! Strukturelle Use-Cases laufen in festen Phasen: Regelprüfung, Änderung
//! auf einer Arbeitskopie, Commit (Modell + Undo-Snapshot), Benachrichtigung.

pub mod editing;
pub mod import;
pub mod label;
pub mod navigation;
pub mod view;

use crate::app::notifications::Notification;
use crate::app::state::Tooltip;
use crate::app::AppState;
use crate::core::{ElementId, ProcessModel, Rejection};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Übernimmt eine Arbeitskopie als neues Modell.
///
/// Der Snapshot wird VOR dem Austausch aufgenommen, damit Undo die alte
/// Version samt Fokus wiederherstellt.
pub(crate) fn commit(state: &mut AppState, work: ProcessModel, focus: Option<ElementId>) {
    state.record_undo_snapshot();
    state.model = Arc::new(work);
    state.focus = focus;
}

/// Meldet einen Regelverstoß: Log, Tooltip und Benachrichtigung.
/// Das Modell bleibt unverändert.
pub(crate) fn reject(state: &mut AppState, rejection: Rejection) {
    log::warn!(
        "{} abgelehnt: {:?} (Element {:?}, Partner {:?})",
        rejection.kind.topic(),
        rejection.reason,
        rejection.subject,
        rejection.other
    );
    state.view.tooltip = Some(Tooltip {
        rejection: rejection.clone(),
        expires_at: Instant::now() + Duration::from_millis(state.options.tooltip_duration_ms),
    });
    state.bus.publish(Notification::Rejected(rejection));
}

/// Signalisiert, dass die Datenhaltung neu berechnet werden muss.
pub(crate) fn data_changed(state: &mut AppState) {
    state.bus.publish(Notification::DataStoreUpdate);
}
