//! Builder für die Projektion des Fokus-Prozesses.
//!
//! Die Projektion ist eine reine Funktion von Modell und Fokus; nach
//! Undo, Switch oder Import wird sie einfach neu gebaut.

use crate::core::{BusinessObject, Bounds, ElementId, ProcessModel};
use crate::shared::{ProjectedConnection, ProjectedShape, ViewProjection};

fn label_of(object: &BusinessObject) -> String {
    match object {
        BusinessObject::SystemLimit(sl) => sl.name.clone(),
        other => other
            .connectable()
            .map(|core| core.identification.long_name.clone())
            .unwrap_or_default(),
    }
}

fn project_shape(model: &ProcessModel, id: ElementId, parent: ElementId) -> Option<ProjectedShape> {
    let object = model.get(id)?;
    let bounds = model.bounds(id)?;
    Some(ProjectedShape {
        id,
        element_type: object.element_type(),
        label: label_of(object),
        bounds,
        parent,
        boundary: object.as_state().and_then(|s| s.boundary).map(|b| b.role),
        decomposed: object
            .as_operator()
            .is_some_and(|o| o.decomposed_view.is_some()),
    })
}

fn project_connection(
    model: &ProcessModel,
    id: ElementId,
    parent: ElementId,
) -> Option<ProjectedConnection> {
    let object = model.get(id)?;
    let (source, target) = object.endpoints()?;
    Some(ProjectedConnection {
        id,
        element_type: object.element_type(),
        source,
        target,
        waypoints: model.waypoints(id).map(<[_]>::to_vec).unwrap_or_default(),
        parent,
    })
}

/// Baut die Projektion des Prozesses `focus`.
///
/// Zeichenreihenfolge: Systemgrenze, deren Inhalt, dann technische
/// Ressourcen. Ein unbekannter Fokus ergibt eine leere Zeichenfläche.
pub fn build(
    model: &ProcessModel,
    focus: Option<ElementId>,
    viewbox: Option<Bounds>,
) -> ViewProjection {
    let mut projection = ViewProjection {
        viewbox,
        ..ViewProjection::default()
    };
    let Some(process_id) = focus else {
        return projection;
    };
    let Ok(process) = model.process(process_id) else {
        log::debug!("Projektion: Prozess {} existiert nicht", process_id);
        return projection;
    };
    projection.root = Some(process_id);
    projection.root_name = model.process_name(process_id);

    let system_limit = process
        .consists_of_system_limit
        .and_then(|sl| model.get(sl))
        .and_then(BusinessObject::as_system_limit);
    if let Some(sl) = system_limit {
        projection.shapes.extend(project_shape(model, sl.id, process_id));
        for &id in &sl.elements_container {
            match model.element_type(id) {
                Some(ty) if ty.is_connection() => {
                    projection.connections.extend(project_connection(model, id, sl.id));
                }
                Some(_) => projection.shapes.extend(project_shape(model, id, sl.id)),
                None => {}
            }
        }
    }
    for &id in &process.elements_container {
        if Some(id) == process.consists_of_system_limit {
            continue;
        }
        match model.element_type(id) {
            Some(ty) if ty.is_connection() => {
                projection.connections.extend(project_connection(model, id, process_id));
            }
            Some(_) => projection.shapes.extend(project_shape(model, id, process_id)),
            None => {}
        }
    }
    projection
}
