//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und externen Kollaborateuren
//! (Renderer, Panels, Export) geteilt werden.

pub mod options;
mod view_projection;

pub use options::EditorOptions;
pub use options::{STATE_SIZE, SYSTEM_LIMIT_ORIGIN};
pub use view_projection::{ProjectedConnection, ProjectedShape, ViewProjection};
