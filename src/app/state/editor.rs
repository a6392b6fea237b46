use crate::core::{ElementId, FlowHint};

/// Laufendes direktes Label-Editing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEdit {
    /// Bearbeitetes Element
    pub element: ElementId,
    /// Text beim Start (für Abbruch)
    pub original: String,
}

/// Zustand der Editor-Werkzeuge
#[derive(Debug, Clone, Default)]
pub struct EditorToolState {
    /// Flusstyp für neue Verbindungen zwischen Zustand und Operator
    pub flow_hint: FlowHint,
    /// Offenes Label-Editing (einzige abbrechbare Interaktion)
    pub label_edit: Option<LabelEdit>,
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (einfacher Fluss, kein Editing).
    pub fn new() -> Self {
        Self::default()
    }
}
