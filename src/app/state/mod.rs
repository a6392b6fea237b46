//! Application State: zentrale Datenhaltung.

mod app_state;
mod editor;
mod view;

pub use app_state::{AppState, DeferredSwitch};
pub use editor::{EditorToolState, LabelEdit};
pub use view::{Tooltip, ViewState};
