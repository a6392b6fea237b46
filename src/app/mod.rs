//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod data_store;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod layer_tree;
pub mod notifications;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Modell, Fokus, Werkzeuge, View).
pub mod state;
pub mod use_cases;
pub mod view_projection;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use data_store::DataStore;
pub use events::{AppCommand, AppIntent};
pub use layer_tree::LayerNode;
pub use notifications::{Notification, NotificationBus, SubscriptionId};
pub use state::{AppState, EditorToolState, LabelEdit, ViewState};
pub use view_projection::build as build_view_projection;
