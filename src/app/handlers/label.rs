//! Handler für direktes Label-Editing.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::ElementId;

/// Startet das Label-Editing eines Elements.
pub fn begin(state: &mut AppState, id: ElementId) {
    use_cases::label::begin(state, id);
}

/// Übernimmt den bearbeiteten Text.
pub fn commit(state: &mut AppState, text: &str) {
    use_cases::label::commit_edit(state, text);
}

/// Bricht das Label-Editing ab.
pub fn cancel(state: &mut AppState) {
    use_cases::label::cancel(state);
}
