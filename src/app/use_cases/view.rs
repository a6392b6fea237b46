//! Use-Cases für den sichtbaren Ausschnitt (Pan/Zoom).

use crate::app::AppState;
use crate::core::Bounds;

/// Setzt den Ausschnitt wie vom Canvas gemeldet.
pub fn set_viewbox(state: &mut AppState, viewbox: Bounds) {
    if viewbox.width <= 0.0 || viewbox.height <= 0.0 {
        log::warn!("Ungültiger Ausschnitt ignoriert: {:?}", viewbox);
        return;
    }
    state.view.viewbox = Some(viewbox);
}

/// Passt den Ausschnitt an die Systemgrenze des Fokus-Prozesses an.
pub fn zoom_to_fit(state: &mut AppState) {
    let fitted = state
        .focus
        .and_then(|process| state.model.system_limit_of(process).ok())
        .and_then(|sl| state.model.bounds(sl))
        .map(|bounds| bounds.expanded(state.options.viewbox_padding));
    match fitted {
        Some(viewbox) => state.view.viewbox = Some(viewbox),
        None => log::debug!("Zoom-to-Fit: keine Systemgrenze im Fokus"),
    }
}
