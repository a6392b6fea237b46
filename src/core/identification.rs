//! Identifikations- und Merkmalsdaten der FPB-Objekte (VDI 3682 Blatt 2).

use serde::{Deserialize, Serialize};

/// Identifikation eines Objekts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identification {
    /// Eindeutiger Bezeichner (vom Factory vergeben)
    pub unique_ident: String,
    /// Langname (wird als Label angezeigt)
    pub long_name: String,
    /// Kurzname
    pub short_name: String,
    /// Versionsnummer
    pub version_number: String,
    /// Revisionsnummer
    pub revision_number: String,
}

impl Identification {
    /// Erstellt eine Identifikation mit gegebenem Bezeichner und leeren Namen.
    pub fn new(unique_ident: impl Into<String>) -> Self {
        Self {
            unique_ident: unique_ident.into(),
            ..Self::default()
        }
    }

    /// Anzeigename: Langname, sonst Kurzname, sonst Bezeichner.
    pub fn display_name(&self) -> &str {
        if !self.long_name.is_empty() {
            &self.long_name
        } else if !self.short_name.is_empty() {
            &self.short_name
        } else {
            &self.unique_ident
        }
    }
}

/// Gültigkeitsgrenzen eines Merkmals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidityLimits {
    /// Untere Grenze
    pub lower: Option<f64>,
    /// Obere Grenze
    pub upper: Option<f64>,
}

/// Beschreibender Teil eines Merkmals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptiveElement {
    /// Ermittlungsverfahren
    pub determination_process: String,
    /// Repräsentativität
    pub representivity: String,
    /// Sollwert
    pub setpoint_value: Option<f64>,
    /// Gültigkeitsgrenzen
    pub validity_limits: ValidityLimits,
    /// Istwerte
    pub actual_values: Vec<f64>,
}

/// Relationaler Teil eines Merkmals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationalElement {
    /// Sicht
    pub view: String,
    /// Modell
    pub model: String,
    /// Bildungsvorschriften
    pub generation_rules: String,
}

/// Merkmal eines Zustands, Prozessoperators oder technischen Ressource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Characteristic {
    /// Kategorie des Merkmals
    pub category: Identification,
    /// Beschreibender Teil
    pub descriptive_element: DescriptiveElement,
    /// Relationaler Teil
    pub relational_element: RelationalElement,
}
