use crate::core::{
    Bounds, Characteristic, ConnectTarget, ElementId, FlowHint, Identification, ProcessModel,
};
use glam::Vec2;
use serde::Serialize;

/// Mutierende Commands, die zentral vom Controller ausgeführt werden.
#[derive(Debug, Clone, Serialize)]
pub enum AppCommand {
    // ── Struktur ────────────────────────────────────────────────────
    /// Shape anlegen
    CreateShape {
        /// Typ-Tag
        type_tag: String,
        /// Mittelpunkt
        position: Vec2,
    },
    /// Verbindung anlegen
    Connect {
        /// Quelle
        source: ElementId,
        /// Ziel
        target: ConnectTarget,
        /// Flusstyp-Vorgabe
        hint: FlowHint,
    },
    /// Verbindung umhängen
    Reconnect {
        /// Verbindung
        connection: ElementId,
        /// Neue Quelle
        source: ElementId,
        /// Neues Ziel
        target: ElementId,
    },
    /// Elemente löschen
    DeleteElements {
        /// Shapes und/oder Verbindungen
        ids: Vec<ElementId>,
    },
    /// Shapes verschieben
    MoveShapes {
        /// Shapes
        ids: Vec<ElementId>,
        /// Verschiebung
        delta: Vec2,
    },
    /// Shape skalieren
    ResizeShape {
        /// Shape
        id: ElementId,
        /// Neue Geometrie
        bounds: Bounds,
    },

    // ── Navigation ──────────────────────────────────────────────────
    /// Operator dekomponieren
    Decompose {
        /// Operator
        operator: ElementId,
    },
    /// Ebene komponieren
    Compose {
        /// Systemgrenze
        system_limit: ElementId,
    },
    /// Zu Prozess wechseln
    SwitchProcess {
        /// Prozess
        process: ElementId,
    },

    // ── Werkzeug & Labels ───────────────────────────────────────────
    /// Flusstyp-Vorgabe setzen
    SetFlowHint {
        /// Flusstyp
        hint: FlowHint,
    },
    /// Direktes Label-Editing beginnen
    BeginLabelEdit {
        /// Element
        id: ElementId,
    },
    /// Label-Editing übernehmen
    CommitLabelEdit {
        /// Neuer Text
        text: String,
    },
    /// Label-Editing abbrechen
    CancelLabelEdit,

    // ── Eigenschaften ───────────────────────────────────────────────
    /// Identifikation setzen
    UpdateIdentification {
        /// Element
        id: ElementId,
        /// Identifikation
        identification: Identification,
    },
    /// Merkmale setzen
    UpdateCharacteristics {
        /// Element
        id: ElementId,
        /// Merkmale
        characteristics: Vec<Characteristic>,
    },
    /// Systemgrenze umbenennen
    RenameSystemLimit {
        /// Systemgrenze
        id: ElementId,
        /// Name
        name: String,
    },

    // ── Import & History ────────────────────────────────────────────
    /// Modell übernehmen und Wechsel zum Einstiegsprozess vormerken
    ImportModel {
        /// Importiertes Modell
        #[serde(skip)]
        model: Box<ProcessModel>,
    },
    /// Rückgängig
    Undo,
    /// Wiederholen
    Redo,

    // ── Ansicht ─────────────────────────────────────────────────────
    /// Ausschnitt setzen
    SetViewbox {
        /// Ausschnitt
        viewbox: Bounds,
    },
    /// Ausschnitt einpassen
    ZoomToFit,
}
