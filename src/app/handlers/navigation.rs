//! Handler für Prozesswechsel, Dekomposition, Komposition und Import.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{ElementId, ProcessModel};
use std::time::Instant;

/// Fokussiert einen Prozess.
pub fn switch_process(state: &mut AppState, process: ElementId) -> anyhow::Result<()> {
    use_cases::navigation::switch_process(state, process)
}

/// Dekomponiert einen Operator.
pub fn decompose(state: &mut AppState, operator: ElementId) -> anyhow::Result<()> {
    use_cases::navigation::decompose(state, operator)
}

/// Komponiert die Ebene einer Systemgrenze.
pub fn compose(state: &mut AppState, system_limit: ElementId) -> anyhow::Result<()> {
    use_cases::navigation::compose(state, system_limit)
}

/// Übernimmt ein importiertes Modell; der Einstiegswechsel folgt verzögert.
pub fn import(state: &mut AppState, model: ProcessModel) -> anyhow::Result<()> {
    use_cases::import::import_model(state, model, Instant::now())
}
