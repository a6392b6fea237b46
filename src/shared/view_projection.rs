//! Projektion des fokussierten Prozesses als Übergabevertrag an Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und externe Renderer sie
//! konsumieren.

use crate::core::{BoundaryRole, Bounds, ElementId, ElementType};
use glam::Vec2;
use serde::Serialize;

/// Ein Shape im gerenderten Baum
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedShape {
    /// Element-ID
    pub id: ElementId,
    /// Typ
    pub element_type: ElementType,
    /// Angezeigtes Label
    pub label: String,
    /// Geometrie
    pub bounds: Bounds,
    /// Parent auf der Zeichenfläche (Systemgrenze oder Prozess)
    pub parent: ElementId,
    /// Rolle bei gespiegelten Randzuständen
    pub boundary: Option<BoundaryRole>,
    /// Operator besitzt einen Unterprozess
    pub decomposed: bool,
}

/// Eine Verbindung im gerenderten Baum
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedConnection {
    /// Element-ID
    pub id: ElementId,
    /// Typ
    pub element_type: ElementType,
    /// Quelle
    pub source: ElementId,
    /// Ziel
    pub target: ElementId,
    /// Wegpunkte
    pub waypoints: Vec<Vec2>,
    /// Container (Systemgrenze oder Prozess)
    pub parent: ElementId,
}

/// Read-only Sicht auf einen Prozess.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewProjection {
    /// Wurzel des gerenderten Baums (`None` = leere Zeichenfläche)
    pub root: Option<ElementId>,
    /// Anzeigename der Wurzel
    pub root_name: String,
    /// Shapes in Zeichenreihenfolge (Systemgrenze zuerst)
    pub shapes: Vec<ProjectedShape>,
    /// Verbindungen
    pub connections: Vec<ProjectedConnection>,
    /// Aktueller Ausschnitt
    pub viewbox: Option<Bounds>,
}

impl ViewProjection {
    /// Shape zu einer ID
    pub fn shape(&self, id: ElementId) -> Option<&ProjectedShape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Verbindung zu einer ID
    pub fn connection(&self, id: ElementId) -> Option<&ProjectedConnection> {
        self.connections.iter().find(|c| c.id == id)
    }
}
