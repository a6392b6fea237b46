//! Core-Domäne: Fachobjekte, Modell-Arena, Regeln, Layout, Synchronisation
//! und Navigation.

pub mod element;
pub mod error;
pub mod factory;
pub mod geometry;
pub mod identification;
pub mod layout;
pub mod model;
pub mod navigation;
pub mod replace_connection;
pub mod rules;
pub mod sync;

#[cfg(test)]
pub(crate) mod test_support;

pub use element::{
    Boundary, BoundaryRole, BusinessObject, Connectable, ElementId, ElementType, Flow, FlowKind,
    Process, ProcessOperator, Project, State, StateKind, SystemLimit, TechnicalResource, Usage,
};
pub use error::{EngineError, EngineResult};
pub use factory::ShapeRequest;
pub use geometry::Bounds;
pub use identification::{
    Characteristic, DescriptiveElement, Identification, RelationalElement, ValidityLimits,
};
pub use model::{ProcessModel, Visual};
pub use navigation::Navigation;
pub use rules::{ConnectTarget, FlowHint, RejectReason, Rejection, RejectionKind};
