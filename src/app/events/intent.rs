use crate::core::{
    Bounds, Characteristic, ConnectTarget, ElementId, FlowHint, Identification, ProcessModel,
};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppIntent {
    /// Shape aus der Palette auf der Zeichenfläche ablegen
    CreateShapeRequested {
        /// Typ-Tag, z.B. `fpb:Product`
        type_tag: String,
        /// Mittelpunkt in Diagrammkoordinaten
        position: Vec2,
    },
    /// Verbindungsgeste von `source` auf ein Ziel
    ConnectRequested {
        /// Quelle
        source: ElementId,
        /// Getroffenes Ziel (Shape oder Label)
        target: ConnectTarget,
    },
    /// Flusstyp des Verbinden-Werkzeugs wählen
    FlowHintSelected {
        /// Neuer Flusstyp
        hint: FlowHint,
    },
    /// Endpunkte einer Verbindung umhängen
    ReconnectRequested {
        /// Verbindung
        connection: ElementId,
        /// Neue Quelle
        source: ElementId,
        /// Neues Ziel
        target: ElementId,
    },
    /// Elemente löschen
    DeleteRequested {
        /// Shapes und/oder Verbindungen
        ids: Vec<ElementId>,
    },
    /// Shapes verschieben
    MoveRequested {
        /// Shapes
        ids: Vec<ElementId>,
        /// Verschiebung
        delta: Vec2,
    },
    /// Shape skalieren
    ResizeRequested {
        /// Shape
        id: ElementId,
        /// Neue Geometrie
        bounds: Bounds,
    },
    /// Operator dekomponieren
    DecomposeRequested {
        /// Operator
        operator: ElementId,
    },
    /// Ebene einer Systemgrenze komponieren
    ComposeRequested {
        /// Systemgrenze
        system_limit: ElementId,
    },
    /// Prozess im Ebenen-Panel gewählt
    ProcessSelected {
        /// Prozess
        process: ElementId,
    },
    /// Doppelklick auf ein Label
    LabelEditStarted {
        /// Element
        id: ElementId,
    },
    /// Label-Eingabe bestätigt
    LabelEditCommitted {
        /// Neuer Text
        text: String,
    },
    /// Label-Eingabe abgebrochen (Escape, Klick daneben)
    LabelEditCancelled,
    /// Identifikation im Properties-Panel geändert
    IdentificationEdited {
        /// Element
        id: ElementId,
        /// Neue Identifikation
        identification: Identification,
    },
    /// Merkmale im Properties-Panel geändert
    CharacteristicsEdited {
        /// Element
        id: ElementId,
        /// Neue Merkmale
        characteristics: Vec<Characteristic>,
    },
    /// Name einer Systemgrenze geändert
    SystemLimitRenamed {
        /// Systemgrenze
        id: ElementId,
        /// Neuer Name
        name: String,
    },
    /// Von einem Import-Mapper aufgebautes Modell übernehmen
    ImportRequested {
        /// Importiertes Modell
        model: Box<ProcessModel>,
    },
    /// Rückgängig
    UndoRequested,
    /// Wiederholen
    RedoRequested,
    /// Ausschnitt durch Pan/Zoom geändert
    ViewboxChanged {
        /// Neuer Ausschnitt
        viewbox: Bounds,
    },
    /// Ausschnitt auf die Systemgrenze einpassen
    ZoomToFitRequested,
}
