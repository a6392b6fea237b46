//! Handler für Shapes, Verbindungen und Eigenschaften.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{Bounds, Characteristic, ConnectTarget, ElementId, FlowHint, Identification};
use glam::Vec2;

/// Legt ein Shape des Typ-Tags an der Diagrammposition an.
pub fn create_shape(state: &mut AppState, type_tag: &str, position: Vec2) -> anyhow::Result<()> {
    use_cases::editing::create_shape(state, type_tag, position)
}

/// Setzt den Flusstyp für neue Verbindungen.
pub fn set_flow_hint(state: &mut AppState, hint: FlowHint) {
    state.editor.flow_hint = hint;
    log::info!("Flusstyp: {:?}", hint);
}

/// Verbindet zwei Elemente mit dem übergebenen Flusstyp.
pub fn connect(
    state: &mut AppState,
    source: ElementId,
    target: ConnectTarget,
    hint: FlowHint,
) -> anyhow::Result<()> {
    use_cases::editing::connect(state, source, target, hint)
}

/// Hängt eine Verbindung um.
pub fn reconnect(
    state: &mut AppState,
    connection: ElementId,
    source: ElementId,
    target: ConnectTarget,
) -> anyhow::Result<()> {
    use_cases::editing::reconnect(state, connection, source, target)
}

/// Löscht die übergebenen Elemente.
pub fn delete(state: &mut AppState, ids: &[ElementId]) -> anyhow::Result<()> {
    use_cases::editing::delete_elements(state, ids)
}

/// Verschiebt Shapes.
pub fn move_shapes(state: &mut AppState, ids: &[ElementId], delta: Vec2) -> anyhow::Result<()> {
    use_cases::editing::move_shapes(state, ids, delta)
}

/// Skaliert eine Systemgrenze.
pub fn resize(state: &mut AppState, id: ElementId, bounds: Bounds) -> anyhow::Result<()> {
    use_cases::editing::resize_shape(state, id, bounds)
}

/// Übernimmt eine Identifikation aus dem Properties-Panel.
pub fn update_identification(
    state: &mut AppState,
    id: ElementId,
    identification: Identification,
) -> anyhow::Result<()> {
    use_cases::editing::update_identification(state, id, identification)
}

/// Übernimmt Merkmale aus dem Properties-Panel.
pub fn update_characteristics(
    state: &mut AppState,
    id: ElementId,
    characteristics: Vec<Characteristic>,
) -> anyhow::Result<()> {
    use_cases::editing::update_characteristics(state, id, characteristics)
}

/// Benennt eine Systemgrenze um.
pub fn rename_system_limit(state: &mut AppState, id: ElementId, name: &str) -> anyhow::Result<()> {
    use_cases::editing::rename_system_limit(state, id, name)
}
