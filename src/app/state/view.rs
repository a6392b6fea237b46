use crate::core::{Bounds, Rejection};
use std::time::Instant;

/// Hinweis-Tooltip nach einem Regelverstoß
#[derive(Debug, Clone)]
pub struct Tooltip {
    /// Abgelehnte Operation
    pub rejection: Rejection,
    /// Ausblendzeitpunkt
    pub expires_at: Instant,
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Aktueller Pan/Zoom-Ausschnitt in Diagrammkoordinaten
    pub viewbox: Option<Bounds>,
    /// Sichtbarer Regel-Hinweis
    pub tooltip: Option<Tooltip>,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
