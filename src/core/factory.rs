//! Business Object Factory: erzeugt vollständig initialisierte Fachobjekte.
//!
//! Jede Sammlung wird leer vorbelegt, identifizierbare Objekte erhalten eine
//! [`Identification`]. Die Factory fügt nichts in die Arena ein; sie reserviert
//! nur die ID.

use super::{
    Bounds, BusinessObject, Connectable, ElementId, ElementType, EngineError, EngineResult, Flow,
    FlowKind, Identification, Process, ProcessModel, ProcessOperator, Project, State, StateKind,
    SystemLimit, TechnicalResource, Usage,
};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Anforderung eines Shapes: bestehendes Fachobjekt oder Typ-Tag plus Position.
#[derive(Debug, Clone, Default)]
pub struct ShapeRequest {
    /// Vorhandenes Fachobjekt (z.B. aus dem Import)
    pub business_object: Option<BusinessObject>,
    /// Typ-Tag wie `fpb:Product`
    pub type_tag: Option<String>,
    /// Mittelpunkt des neuen Shapes
    pub position: Vec2,
}

impl ShapeRequest {
    /// Anforderung per Typ-Tag
    pub fn from_tag(tag: impl Into<String>, position: Vec2) -> Self {
        Self {
            business_object: None,
            type_tag: Some(tag.into()),
            position,
        }
    }

    /// Anforderung per Typ
    pub fn from_type(element_type: ElementType, position: Vec2) -> Self {
        Self::from_tag(element_type.tag(), position)
    }

    /// Aufgelöster Shape-Typ
    pub fn element_type(&self) -> EngineResult<ElementType> {
        let ty = match (&self.business_object, &self.type_tag) {
            (Some(object), _) => object.element_type(),
            (None, Some(tag)) => ElementType::from_tag(tag)
                .ok_or_else(|| EngineError::UnknownShapeType(Some(tag.clone())))?,
            (None, None) => return Err(EngineError::UnknownShapeType(None)),
        };
        if ty.is_shape() {
            Ok(ty)
        } else {
            Err(EngineError::NotAShape(ty))
        }
    }
}

/// Standardgröße eines Shape-Typs
pub fn default_size(element_type: ElementType, options: &EditorOptions) -> Vec2 {
    match element_type {
        ElementType::Product | ElementType::Energy | ElementType::Information => {
            options.state_dimensions()
        }
        ElementType::ProcessOperator | ElementType::TechnicalResource => {
            options.operator_dimensions()
        }
        ElementType::SystemLimit => options.system_limit_dimensions(),
        _ => Vec2::ZERO,
    }
}

fn identification_for(element_type: ElementType, id: ElementId) -> Identification {
    let name = element_type.tag().trim_start_matches("fpb:");
    Identification::new(format!("{name}_{id}"))
}

fn connectable(element_type: ElementType, id: ElementId) -> Connectable {
    Connectable {
        identification: identification_for(element_type, id),
        ..Connectable::default()
    }
}

/// Erzeugt ein Fachobjekt eines Typs mit neuer ID.
///
/// Verbindungen werden ohne Endpunkte (0) erzeugt; dafür gibt es
/// [`new_connection`].
pub fn new_object(
    model: &mut ProcessModel,
    element_type: ElementType,
    options: &EditorOptions,
) -> BusinessObject {
    let id = model.allocate_id();
    match element_type {
        ElementType::Project => BusinessObject::Project(Project {
            id,
            name: options.project_name.clone(),
            target_namespace: options.target_namespace.clone(),
            entry_point: None,
        }),
        ElementType::Process => BusinessObject::Process(Process {
            id,
            ..Process::default()
        }),
        ElementType::SystemLimit => BusinessObject::SystemLimit(SystemLimit {
            id,
            ..SystemLimit::default()
        }),
        ElementType::ProcessOperator => BusinessObject::ProcessOperator(ProcessOperator {
            id,
            core: connectable(element_type, id),
            decomposed_view: None,
        }),
        ElementType::TechnicalResource => BusinessObject::TechnicalResource(TechnicalResource {
            id,
            core: connectable(element_type, id),
        }),
        ElementType::Product | ElementType::Energy | ElementType::Information => {
            let kind = match element_type {
                ElementType::Product => StateKind::Product,
                ElementType::Energy => StateKind::Energy,
                _ => StateKind::Information,
            };
            BusinessObject::State(State {
                id,
                kind,
                core: connectable(element_type, id),
                boundary: None,
            })
        }
        ElementType::Flow | ElementType::AlternativeFlow | ElementType::ParallelFlow => {
            new_connection(model, id, element_type, 0, 0)
        }
        ElementType::Usage => new_connection(model, id, element_type, 0, 0),
    }
}

/// Erzeugt eine Verbindung mit gegebener ID (0 = neue ID) und Endpunkten.
pub fn new_connection(
    model: &mut ProcessModel,
    id: ElementId,
    element_type: ElementType,
    source: ElementId,
    target: ElementId,
) -> BusinessObject {
    let id = if id == 0 { model.allocate_id() } else { id };
    let kind = match element_type {
        ElementType::Usage => {
            return BusinessObject::Usage(Usage {
                id,
                source_ref: source,
                target_ref: target,
            })
        }
        ElementType::AlternativeFlow => FlowKind::Alternative,
        ElementType::ParallelFlow => FlowKind::Parallel,
        _ => FlowKind::Flow,
    };
    BusinessObject::Flow(Flow {
        id,
        kind,
        source_ref: source,
        target_ref: target,
        in_tandem_with: Default::default(),
    })
}

/// Erzeugt ein Projekt mit Standardname und -Namespace.
pub fn create_project(model: &mut ProcessModel, options: &EditorOptions) -> BusinessObject {
    new_object(model, ElementType::Project, options)
}

/// Erzeugt einen leeren Prozess unter `parent` (Projekt oder Prozess).
pub fn create_process(model: &mut ProcessModel, parent: Option<ElementId>) -> BusinessObject {
    BusinessObject::Process(Process {
        id: model.allocate_id(),
        parent,
        ..Process::default()
    })
}

/// Erzeugt Fachobjekt und Standardgeometrie für ein Shape.
///
/// Schlägt fehl, wenn weder Fachobjekt noch bekanntes Typ-Tag angegeben ist.
pub fn create_shape(
    model: &mut ProcessModel,
    request: ShapeRequest,
    options: &EditorOptions,
) -> EngineResult<(BusinessObject, Bounds)> {
    let element_type = request.element_type()?;
    let size = default_size(element_type, options);
    let bounds = Bounds::from_center(request.position, size);

    let object = match request.business_object {
        Some(mut object) => {
            if object.id() == 0 || model.contains(object.id()) {
                let id = model.allocate_id();
                object.set_id(id);
            }
            object
        }
        None => new_object(model, element_type, options),
    };
    Ok((object, bounds))
}
