//! Use-Cases: Shapes verschieben und Systemgrenzen skalieren.

use crate::app::use_cases::{commit, data_changed, reject};
use crate::app::AppState;
use crate::core::{rules, sync, Bounds, ElementId};
use glam::Vec2;

/// Verschiebt Shapes um `delta`. Eine Systemgrenze nimmt ihren Inhalt mit,
/// alle angehängten Verbindungen werden neu geroutet.
pub fn move_shapes(state: &mut AppState, ids: &[ElementId], delta: Vec2) -> anyhow::Result<()> {
    if ids.is_empty() || delta == Vec2::ZERO {
        log::debug!("Verschieben: nichts zu tun");
        return Ok(());
    }
    for &id in ids {
        state.model.require(id)?;
    }
    if let Err(rejection) = rules::can_move(&state.model, ids, delta) {
        reject(state, rejection);
        return Ok(());
    }

    let mut work = (*state.model).clone();
    let moved = sync::move_shapes(&mut work, ids, delta)?;
    commit(state, work, state.focus);
    log::info!("{} Shape(s) um {:?} verschoben", moved.len(), delta);
    data_changed(state);
    Ok(())
}

/// Setzt neue Grenzen für eine Systemgrenze.
pub fn resize_shape(state: &mut AppState, id: ElementId, bounds: Bounds) -> anyhow::Result<()> {
    state.model.require(id)?;
    if state.model.bounds(id) == Some(bounds) {
        log::debug!("Skalieren von {}: Grenzen unverändert", id);
        return Ok(());
    }
    if let Err(rejection) = rules::can_resize(&state.model, id, bounds) {
        reject(state, rejection);
        return Ok(());
    }

    let mut work = (*state.model).clone();
    sync::set_shape_bounds(&mut work, id, bounds)?;
    commit(state, work, state.focus);
    log::info!("Systemgrenze {} skaliert auf {:?}", id, bounds);
    data_changed(state);
    Ok(())
}
