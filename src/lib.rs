//! FPB Editor Library.
//! Modell-, Regel- und Navigations-Engine für hierarchische Prozessdiagramme
//! nach VDI 3682, als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DataStore, EditorToolState, Notification,
    NotificationBus, ViewState,
};
pub use core::{
    BusinessObject, ConnectTarget, ElementId, ElementType, EngineError, FlowHint, FlowKind,
    ProcessModel, Rejection, RejectionKind,
};
pub use core::{Bounds, Navigation};
pub use shared::{EditorOptions, ViewProjection};
