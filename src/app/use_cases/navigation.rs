//! Use-Cases: Prozesswechsel, Dekomposition und Komposition.

use crate::app::notifications::Notification;
use crate::app::use_cases::{commit, data_changed, reject, view};
use crate::app::AppState;
use crate::core::{navigation, rules, ElementId, Navigation};

/// Übernimmt das Ergebnis eines Navigationsbefehls.
///
/// Auch ein reiner Fokuswechsel ist ein Undo-Schritt.
fn apply(state: &mut AppState, result: Navigation) {
    let Navigation {
        model,
        focus,
        created_processes,
    } = result;
    let changed = model.is_some();
    match model {
        Some(work) => commit(state, work, Some(focus)),
        None => {
            if state.focus == Some(focus) {
                log::debug!("Prozess {} ist bereits fokussiert", focus);
                return;
            }
            state.record_undo_snapshot();
            state.focus = Some(focus);
        }
    }
    state.pending_switch = None;

    for process in created_processes {
        state.bus.publish(Notification::ProcessCreated { process });
    }
    state.bus.publish(Notification::ProcessSwitched { process: focus });
    if changed {
        data_changed(state);
    }
    view::zoom_to_fit(state);
    log::info!(
        "Fokus auf Prozess '{}' ({})",
        state.model.process_name(focus),
        focus
    );
}

/// Wechselt zu einem bestehenden Prozess.
pub fn switch_process(state: &mut AppState, process: ElementId) -> anyhow::Result<()> {
    let result = navigation::switch(&state.model, process)?;
    apply(state, result);
    Ok(())
}

/// Dekomponiert einen Operator und fokussiert seinen Unterprozess.
pub fn decompose(state: &mut AppState, operator: ElementId) -> anyhow::Result<()> {
    if let Err(rejection) = rules::can_decompose(&state.model, operator) {
        reject(state, rejection);
        return Ok(());
    }
    let result = navigation::decompose(&state.model, operator, &state.options)?;
    apply(state, result);
    Ok(())
}

/// Komponiert die Ebene einer Systemgrenze und fokussiert den
/// übergeordneten Prozess.
pub fn compose(state: &mut AppState, system_limit: ElementId) -> anyhow::Result<()> {
    let result = navigation::compose(&state.model, system_limit, &state.options)?;
    apply(state, result);
    Ok(())
}
