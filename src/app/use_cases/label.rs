//! Use-Cases: direktes Label-Editing (einzige abbrechbare Interaktion).

use crate::app::state::LabelEdit;
use crate::app::use_cases::{commit, data_changed};
use crate::app::AppState;
use crate::core::{BusinessObject, ElementId, ProcessModel};

/// Aktueller Label-Text eines Elements (Langname bzw. Name der Systemgrenze)
pub fn label_text(model: &ProcessModel, id: ElementId) -> Option<String> {
    match model.get(id)? {
        BusinessObject::SystemLimit(sl) => Some(sl.name.clone()),
        object => object
            .connectable()
            .map(|core| core.identification.long_name.clone()),
    }
}

fn set_label_text(model: &mut ProcessModel, id: ElementId, text: &str) -> bool {
    match model.get_mut(id) {
        Some(BusinessObject::SystemLimit(sl)) => {
            sl.name = text.to_string();
            true
        }
        Some(object) => match object.connectable_mut() {
            Some(core) => {
                core.identification.long_name = text.to_string();
                true
            }
            None => false,
        },
        None => false,
    }
}

/// Startet das Label-Editing; ein offenes Editing wird verworfen.
pub fn begin(state: &mut AppState, id: ElementId) {
    let Some(original) = label_text(&state.model, id) else {
        log::warn!("Element {} hat kein editierbares Label", id);
        return;
    };
    if let Some(previous) = state.editor.label_edit.take() {
        log::debug!("Label-Editing von {} verworfen", previous.element);
    }
    state.editor.label_edit = Some(LabelEdit {
        element: id,
        original,
    });
    log::debug!("Label-Editing von {} gestartet", id);
}

/// Übernimmt den Text des offenen Label-Editings.
pub fn commit_edit(state: &mut AppState, text: &str) {
    let Some(edit) = state.editor.label_edit.take() else {
        log::debug!("Label übernehmen: kein Editing offen");
        return;
    };
    if edit.original == text {
        log::debug!("Label von {} unverändert", edit.element);
        return;
    }

    let mut work = (*state.model).clone();
    if !set_label_text(&mut work, edit.element, text) {
        log::warn!("Label von {} nicht übernommen: Element fehlt", edit.element);
        return;
    }
    commit(state, work, state.focus);
    log::info!("Label von {} gesetzt: '{}'", edit.element, text);
    data_changed(state);
}

/// Bricht das offene Label-Editing ohne Änderung ab.
pub fn cancel(state: &mut AppState) {
    match state.editor.label_edit.take() {
        Some(edit) => log::debug!("Label-Editing von {} abgebrochen", edit.element),
        None => log::debug!("Label-Editing abbrechen: nichts offen"),
    }
}
