//! Fehler bei verletzten Modell-Invarianten.
//!
//! Regelverstöße bei Benutzeraktionen sind keine Fehler, sondern
//! [`Rejection`](super::rules::Rejection)s.

use super::{ElementId, ElementType};

/// Fehler der Modell-Engine
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum EngineError {
    /// ID ist nicht in der Arena
    #[error("Element {0} existiert nicht")]
    UnknownElement(ElementId),
    /// Element hat einen anderen Typ als erwartet
    #[error("Element {id} ist {actual:?}, erwartet {expected:?}")]
    WrongType {
        /// Betroffenes Element
        id: ElementId,
        /// Erwarteter Typ
        expected: ElementType,
        /// Tatsächlicher Typ
        actual: ElementType,
    },
    /// Shape ohne Fachobjekt und ohne bekanntes Typ-Tag angefordert
    #[error("Unbekannter Shape-Typ: {0:?}")]
    UnknownShapeType(Option<String>),
    /// Typ hat keine Geometrie auf der Zeichenfläche
    #[error("{0:?} ist kein Shape-Typ")]
    NotAShape(ElementType),
    /// Prozess ohne (eindeutige) Systemgrenze
    #[error("Prozess {0} hat keine Systemgrenze")]
    MissingSystemLimit(ElementId),
    /// Element gehört zu keinem Prozess
    #[error("Element {0} gehört zu keinem Prozess")]
    OrphanElement(ElementId),
    /// Shape ohne Geometrie-Eintrag
    #[error("Element {0} hat keine Geometrie")]
    MissingBounds(ElementId),
    /// Kein Projekt vorhanden
    #[error("Kein Projekt vorhanden")]
    MissingProject,
}

/// Kurzform für Engine-Ergebnisse
pub type EngineResult<T> = Result<T, EngineError>;
