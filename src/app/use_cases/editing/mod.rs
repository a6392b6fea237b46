//! Use-Case-Funktionen für strukturelles Editing.
//!
//! Aufgeteilt nach Operation:
//! - `create_shape` — Shape anlegen (inkl. Wurzelprozess beim ersten Mal)
//! - `connect` — Verbindungen anlegen und umhängen
//! - `delete` — Elemente löschen (mit Kaskade)
//! - `transform` — Verschieben und Skalieren
//! - `properties` — Identifikation, Merkmale, Name der Systemgrenze

mod connect;
mod create_shape;
mod delete;
mod properties;
mod transform;

pub use connect::{connect, reconnect};
pub use create_shape::create_shape;
pub use delete::delete_elements;
pub use properties::{rename_system_limit, update_characteristics, update_identification};
pub use transform::{move_shapes, resize_shape};
