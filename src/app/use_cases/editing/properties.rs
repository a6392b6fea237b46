//! Use-Cases: Eigenschaften aus dem Properties-Panel übernehmen.

use crate::app::use_cases::{commit, data_changed};
use crate::app::AppState;
use crate::core::{
    BusinessObject, Characteristic, Connectable, ElementId, ElementType, EngineError,
    Identification, ProcessModel,
};

fn connectable_mut(model: &mut ProcessModel, id: ElementId) -> anyhow::Result<&mut Connectable> {
    let object = model.require_mut(id)?;
    let actual = object.element_type();
    Ok(object.connectable_mut().ok_or(EngineError::WrongType {
        id,
        expected: ElementType::ProcessOperator,
        actual,
    })?)
}

/// Übernimmt eine bearbeitete Identifikation.
///
/// Ein leerer `unique_ident` behält den bisherigen Bezeichner.
pub fn update_identification(
    state: &mut AppState,
    id: ElementId,
    mut identification: Identification,
) -> anyhow::Result<()> {
    let mut work = (*state.model).clone();
    let core = connectable_mut(&mut work, id)?;
    if identification.unique_ident.is_empty() {
        identification.unique_ident = core.identification.unique_ident.clone();
    }
    if core.identification == identification {
        log::debug!("Identifikation von {} unverändert", id);
        return Ok(());
    }
    core.identification = identification;
    commit(state, work, state.focus);
    log::info!("Identifikation von {} aktualisiert", id);
    data_changed(state);
    Ok(())
}

/// Ersetzt die Merkmalsliste eines Elements.
pub fn update_characteristics(
    state: &mut AppState,
    id: ElementId,
    characteristics: Vec<Characteristic>,
) -> anyhow::Result<()> {
    let mut work = (*state.model).clone();
    let core = connectable_mut(&mut work, id)?;
    core.characteristics = characteristics;
    let count = core.characteristics.len();
    commit(state, work, state.focus);
    log::info!("{} Merkmal(e) für {} gesetzt", count, id);
    data_changed(state);
    Ok(())
}

/// Benennt eine Systemgrenze um.
pub fn rename_system_limit(state: &mut AppState, id: ElementId, name: &str) -> anyhow::Result<()> {
    let mut work = (*state.model).clone();
    let object = work.require_mut(id)?;
    let actual = object.element_type();
    let BusinessObject::SystemLimit(system_limit) = object else {
        return Err(EngineError::WrongType {
            id,
            expected: ElementType::SystemLimit,
            actual,
        }
        .into());
    };
    if system_limit.name == name {
        log::debug!("Systemgrenze {} heißt bereits '{}'", id, name);
        return Ok(());
    }
    system_limit.name = name.to_string();
    commit(state, work, state.focus);
    log::info!("Systemgrenze {} umbenannt in '{}'", id, name);
    data_changed(state);
    Ok(())
}
