//! Zentrale Konfiguration für den FPB-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Shape-Größen ────────────────────────────────────────────────────

/// Kantenlänge eines Zustands (quadratisch).
pub const STATE_SIZE: f32 = 50.0;
/// Breite von Prozessoperator und technischer Ressource.
pub const OPERATOR_WIDTH: f32 = 150.0;
/// Höhe von Prozessoperator und technischer Ressource.
pub const OPERATOR_HEIGHT: f32 = 80.0;
/// Breite einer neuen Systemgrenze.
pub const SYSTEM_LIMIT_WIDTH: f32 = 650.0;
/// Höhe einer neuen Systemgrenze.
pub const SYSTEM_LIMIT_HEIGHT: f32 = 700.0;
/// Linke obere Ecke synthetisierter Systemgrenzen (Dekomposition/Komposition).
pub const SYSTEM_LIMIT_ORIGIN: [f32; 2] = [100.0, 100.0];

// ── Randzustände ────────────────────────────────────────────────────

/// Horizontaler Abstand zwischen gespiegelten Randzuständen.
pub const BOUNDARY_SPACING: f32 = 40.0;
/// Abstand der Nachbarzustände zum Operator bei der Komposition.
pub const NEIGHBOR_DISTANCE: f32 = 120.0;

// ── Ablauf ──────────────────────────────────────────────────────────

/// Verzögerung zwischen Import und Wechsel zum Einstiegsprozess.
pub const IMPORT_SWITCH_DELAY_MS: u64 = 300;
/// Anzeigedauer des Regel-Tooltips.
pub const TOOLTIP_DURATION_MS: u64 = 2000;
/// Maximale Undo-Tiefe.
pub const HISTORY_DEPTH: usize = 200;
/// Rand um die Systemgrenze beim Einpassen der Ansicht.
pub const VIEWBOX_PADDING: f32 = 50.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `fpb_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Shapes ──────────────────────────────────────────────────
    /// Kantenlänge eines Zustands
    pub state_size: f32,
    /// Breite von Operator/Ressource
    pub operator_width: f32,
    /// Höhe von Operator/Ressource
    pub operator_height: f32,
    /// Breite einer neuen Systemgrenze
    pub system_limit_width: f32,
    /// Höhe einer neuen Systemgrenze
    pub system_limit_height: f32,
    /// Ursprung synthetisierter Systemgrenzen
    pub system_limit_origin: [f32; 2],

    // ── Hierarchie ──────────────────────────────────────────────
    /// Abstand zwischen Randzuständen entlang der Grenze
    pub boundary_spacing: f32,
    /// Abstand der Nachbarzustände zum Operator bei der Komposition
    #[serde(default = "default_neighbor_distance")]
    pub neighbor_distance: f32,

    // ── Ablauf ──────────────────────────────────────────────────
    /// Verzögerung vor dem Wechsel zum Einstiegsprozess nach einem Import
    pub import_switch_delay_ms: u64,
    /// Anzeigedauer des Regel-Tooltips
    pub tooltip_duration_ms: u64,
    /// Maximale Undo-Tiefe
    pub history_depth: usize,
    /// Rand beim Einpassen der Ansicht
    #[serde(default = "default_viewbox_padding")]
    pub viewbox_padding: f32,

    // ── Projekt ─────────────────────────────────────────────────
    /// Name neu angelegter Projekte
    pub project_name: String,
    /// Ziel-Namespace neu angelegter Projekte
    pub target_namespace: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            state_size: STATE_SIZE,
            operator_width: OPERATOR_WIDTH,
            operator_height: OPERATOR_HEIGHT,
            system_limit_width: SYSTEM_LIMIT_WIDTH,
            system_limit_height: SYSTEM_LIMIT_HEIGHT,
            system_limit_origin: SYSTEM_LIMIT_ORIGIN,

            boundary_spacing: BOUNDARY_SPACING,
            neighbor_distance: NEIGHBOR_DISTANCE,

            import_switch_delay_ms: IMPORT_SWITCH_DELAY_MS,
            tooltip_duration_ms: TOOLTIP_DURATION_MS,
            history_depth: HISTORY_DEPTH,
            viewbox_padding: VIEWBOX_PADDING,

            project_name: "FPB Project".to_string(),
            target_namespace: "urn:fpb:project".to_string(),
        }
    }
}

/// Serde-Default für `neighbor_distance` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_neighbor_distance() -> f32 {
    NEIGHBOR_DISTANCE
}

/// Serde-Default für `viewbox_padding` (Abwärtskompatibilität).
fn default_viewbox_padding() -> f32 {
    VIEWBOX_PADDING
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("fpb_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("fpb_editor.toml")
    }

    /// Standardgröße eines Zustands als Vektor
    pub fn state_dimensions(&self) -> glam::Vec2 {
        glam::Vec2::splat(self.state_size)
    }

    /// Standardgröße von Operator/Ressource als Vektor
    pub fn operator_dimensions(&self) -> glam::Vec2 {
        glam::Vec2::new(self.operator_width, self.operator_height)
    }

    /// Standardgröße einer Systemgrenze als Vektor
    pub fn system_limit_dimensions(&self) -> glam::Vec2 {
        glam::Vec2::new(self.system_limit_width, self.system_limit_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_round_trip_keeps_values() {
        let mut options = EditorOptions::default();
        options.import_switch_delay_ms = 5;
        options.project_name = "Montage".into();

        let text = toml::to_string_pretty(&options).expect("serialisierbar");
        let parsed: EditorOptions = toml::from_str(&text).expect("parsebar");
        assert_eq!(parsed, options);
    }

    #[test]
    fn missing_optional_fields_use_defaults() {
        let mut value = toml::Value::try_from(EditorOptions::default()).expect("serialisierbar");
        let table = value.as_table_mut().expect("Tabelle");
        table.remove("neighbor_distance");
        table.remove("viewbox_padding");

        let parsed: EditorOptions = value.try_into().expect("parsebar");
        assert_eq!(parsed.neighbor_distance, NEIGHBOR_DISTANCE);
        assert_eq!(parsed.viewbox_padding, VIEWBOX_PADDING);
    }

    #[test]
    fn load_from_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("fpb_editor_does_not_exist.toml");
        let _ = std::fs::remove_file(&path);
        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }
}
