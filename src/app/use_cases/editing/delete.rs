//! Use-Case: Elemente löschen.

use crate::app::notifications::Notification;
use crate::app::use_cases::{commit, data_changed, reject};
use crate::app::AppState;
use crate::core::{rules, sync, ElementId};

/// Löscht Shapes und Verbindungen.
///
/// Verbindungen eines Shapes werden mitgelöscht, ein dekomponierter Operator
/// nimmt seinen Unterprozess-Baum mit. Bereits per Kaskade entfernte IDs
/// werden übersprungen.
pub fn delete_elements(state: &mut AppState, ids: &[ElementId]) -> anyhow::Result<()> {
    if ids.is_empty() {
        log::debug!("Löschen: keine Elemente angegeben");
        return Ok(());
    }
    for &id in ids {
        state.model.require(id)?;
    }
    if let Err(rejection) = rules::can_delete(&state.model, ids) {
        reject(state, rejection);
        return Ok(());
    }

    let mut work = (*state.model).clone();
    let mut removed_processes = Vec::new();
    for &id in ids {
        let Some(element_type) = work.element_type(id) else {
            continue;
        };
        if element_type.is_connection() {
            sync::delete_connection(&mut work, id)?;
        } else {
            removed_processes.extend(sync::delete_shape(&mut work, id)?);
        }
    }

    let focus = match state.focus {
        Some(process) if work.process(process).is_ok() => Some(process),
        Some(_) => work.project().and_then(|p| p.entry_point),
        None => None,
    };
    commit(state, work, focus);
    log::info!(
        "{} Element(e) gelöscht, {} Prozess(e) entfernt",
        ids.len(),
        removed_processes.len()
    );

    for process in removed_processes {
        state.bus.publish(Notification::ProcessDeleted { process });
    }
    data_changed(state);
    Ok(())
}
