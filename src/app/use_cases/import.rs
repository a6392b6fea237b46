//! Use-Case: extern aufgebautes Modell übernehmen.

use crate::app::notifications::Notification;
use crate::app::state::DeferredSwitch;
use crate::app::use_cases::{commit, data_changed};
use crate::app::AppState;
use crate::core::ProcessModel;
use std::time::{Duration, Instant};

/// Übernimmt ein importiertes Modell.
///
/// Der Wechsel zum Einstiegsprozess wird um
/// `import_switch_delay_ms` verzögert und vom Controller in
/// `poll_deferred` ausgeführt.
pub fn import_model(state: &mut AppState, model: ProcessModel, now: Instant) -> anyhow::Result<()> {
    let entry = model.project().and_then(|p| p.entry_point);
    if let Some(entry) = entry {
        model.process(entry)?;
        model.system_limit_of(entry)?;
    }

    state.editor.label_edit = None;
    let count = model.len();
    commit(state, model, None);
    state.pending_switch = entry.map(|process| DeferredSwitch {
        process,
        due: now + Duration::from_millis(state.options.import_switch_delay_ms),
    });
    log::info!(
        "Modell mit {} Elementen importiert, Einstieg {:?}",
        count,
        entry
    );

    state.bus.publish(Notification::ImportDone { entry });
    data_changed(state);
    Ok(())
}
