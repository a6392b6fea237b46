//! Handler für Ausschnitt und Zoom.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Bounds;

/// Übernimmt den vom Canvas gemeldeten Ausschnitt.
pub fn set_viewbox(state: &mut AppState, viewbox: Bounds) {
    use_cases::view::set_viewbox(state, viewbox);
}

/// Zoomt auf die Systemgrenze des Fokus-Prozesses.
pub fn zoom_to_fit(state: &mut AppState) {
    use_cases::view::zoom_to_fit(state);
}
