//! Model Synchronizer: hält Containment-Graph, Verbindungslisten und
//! Visual-Einträge nach jeder strukturellen Änderung konsistent.
//!
//! Alle Funktionen arbeiten auf der Arbeitskopie eines Befehls. Schlägt eine
//! fehl, wird die Arbeitskopie verworfen.

use super::{
    factory, layout, replace_connection, rules, Bounds, BusinessObject, ElementId, ElementType,
    EngineError, EngineResult, FlowKind, ProcessModel, SystemLimit,
};
use crate::shared::EditorOptions;
use glam::Vec2;
use indexmap::IndexSet;

fn system_limit_mut(model: &mut ProcessModel, id: ElementId) -> EngineResult<&mut SystemLimit> {
    let object = model.require_mut(id)?;
    let actual = object.element_type();
    object.as_system_limit_mut().ok_or(EngineError::WrongType {
        id,
        expected: ElementType::SystemLimit,
        actual,
    })
}

/// Liefert den Einstiegsprozess; legt Projekt und Wurzelprozess bei Bedarf an.
pub fn ensure_root_process(
    model: &mut ProcessModel,
    options: &EditorOptions,
) -> EngineResult<ElementId> {
    if let Some(entry) = model.project().and_then(|p| p.entry_point) {
        if model.process(entry).is_ok() {
            return Ok(entry);
        }
    }

    let project_id = match model.project_id() {
        Some(id) => id,
        None => {
            let project = factory::create_project(model, options);
            model.insert(project)
        }
    };
    let process = factory::create_process(model, Some(project_id));
    let process_id = model.insert(process);
    model.project_mut()?.entry_point = Some(process_id);
    log::info!("Wurzelprozess {} angelegt", process_id);
    Ok(process_id)
}

/// Fügt ein Shape in die Arena ein und trägt es in die Container von
/// Prozess bzw. Systemgrenze ein.
pub fn attach_shape(
    model: &mut ProcessModel,
    process_id: ElementId,
    object: BusinessObject,
    bounds: Bounds,
) -> EngineResult<ElementId> {
    let element_type = object.element_type();
    if !element_type.is_shape() {
        return Err(EngineError::NotAShape(element_type));
    }
    model.process(process_id)?;
    let system_limit = if element_type.lives_inside_system_limit() {
        Some(model.system_limit_of(process_id)?)
    } else {
        None
    };

    let id = model.insert(object);
    model.set_bounds(id, bounds);

    if let Some(sl) = system_limit {
        system_limit_mut(model, sl)?.elements_container.insert(id);
    }
    let process = model.process_mut(process_id)?;
    match element_type {
        ElementType::SystemLimit => {
            process.consists_of_system_limit = Some(id);
            process.elements_container.insert(id);
        }
        ElementType::TechnicalResource => {
            process.elements_container.insert(id);
        }
        ElementType::ProcessOperator => {
            process.consists_of_process_operator.insert(id);
        }
        _ => {
            process.consists_of_states.insert(id);
        }
    }
    Ok(id)
}

/// Entfernt ein Shape aus allen Containern (nicht aus der Arena).
pub fn detach_shape(model: &mut ProcessModel, id: ElementId) -> EngineResult<()> {
    let Some(process_id) = model.owning_process(id) else {
        return Ok(());
    };
    if let Ok(sl) = model.system_limit_of(process_id) {
        system_limit_mut(model, sl)?.elements_container.shift_remove(&id);
    }
    let process = model.process_mut(process_id)?;
    process.elements_container.shift_remove(&id);
    process.consists_of_states.shift_remove(&id);
    process.consists_of_process_operator.shift_remove(&id);
    if process.consists_of_system_limit == Some(id) {
        process.consists_of_system_limit = None;
    }
    Ok(())
}

/// Fügt eine Verbindung ein: Endpunktlisten, Zuordnung, Container,
/// Tandem-Gruppe und Wegpunkte.
pub fn attach_connection(
    model: &mut ProcessModel,
    object: BusinessObject,
) -> EngineResult<ElementId> {
    let element_type = object.element_type();
    let (source, target) = object.endpoints().ok_or(EngineError::WrongType {
        id: object.id(),
        expected: ElementType::Flow,
        actual: element_type,
    })?;
    model.require(source)?;
    model.require(target)?;
    let process_id = model
        .owning_process(source)
        .ok_or(EngineError::OrphanElement(source))?;
    let system_limit = if element_type.is_flow() {
        Some(model.system_limit_of(process_id)?)
    } else {
        None
    };

    let id = model.insert(object);
    if let Some(core) = model.get_mut(source).and_then(BusinessObject::connectable_mut) {
        core.outgoing.insert(id);
        core.is_assigned_to.insert(target);
    }
    if let Some(core) = model.get_mut(target).and_then(BusinessObject::connectable_mut) {
        core.incoming.insert(id);
        core.is_assigned_to.insert(source);
    }
    match system_limit {
        Some(sl) => {
            system_limit_mut(model, sl)?.elements_container.insert(id);
        }
        None => {
            model.process_mut(process_id)?.elements_container.insert(id);
        }
    }

    if element_type.is_flow() {
        relink_tandem_group(model, source)?;
    } else {
        layout::layout_connection(model, id)?;
    }
    Ok(id)
}

/// Baut die Tandem-Gruppe der ausgehenden Flüsse einer Quelle neu auf und
/// routet alle Flüsse der Quelle neu.
pub fn relink_tandem_group(model: &mut ProcessModel, source: ElementId) -> EngineResult<()> {
    let flows = model.outgoing_flows(source);
    let group: IndexSet<ElementId> = flows
        .iter()
        .copied()
        .filter(|id| {
            model
                .get(*id)
                .and_then(BusinessObject::as_flow)
                .is_some_and(|f| f.kind.is_tandem())
        })
        .collect();

    for &id in &flows {
        if let Some(flow) = model.get_mut(id).and_then(BusinessObject::as_flow_mut) {
            flow.in_tandem_with = if group.contains(&id) {
                group.iter().copied().filter(|other| *other != id).collect()
            } else {
                IndexSet::new()
            };
        }
    }
    for &id in &flows {
        layout::layout_connection(model, id)?;
    }
    Ok(())
}

/// Entfernt eine Verbindung aus Endpunktlisten und Containern.
fn unlink_connection(
    model: &mut ProcessModel,
    id: ElementId,
    source: ElementId,
    target: ElementId,
) -> EngineResult<()> {
    if let Some(core) = model.get_mut(source).and_then(BusinessObject::connectable_mut) {
        core.outgoing.shift_remove(&id);
    }
    if let Some(core) = model.get_mut(target).and_then(BusinessObject::connectable_mut) {
        core.incoming.shift_remove(&id);
    }
    if model.find_connection_between(source, target).is_none() {
        if let Some(core) = model.get_mut(source).and_then(BusinessObject::connectable_mut) {
            core.is_assigned_to.shift_remove(&target);
        }
        if let Some(core) = model.get_mut(target).and_then(BusinessObject::connectable_mut) {
            core.is_assigned_to.shift_remove(&source);
        }
    }

    if let Some(process_id) = model.owning_process(id) {
        if let Ok(sl) = model.system_limit_of(process_id) {
            system_limit_mut(model, sl)?.elements_container.shift_remove(&id);
        }
        model
            .process_mut(process_id)?
            .elements_container
            .shift_remove(&id);
    }
    Ok(())
}

/// Löscht eine Verbindung.
///
/// Hängt sie an einem dekomponierten Operator, werden die Spiegel des
/// anderen Endpunkts in dessen Unterprozess mitgelöscht (rekursiv über
/// alle Ebenen).
pub fn delete_connection(model: &mut ProcessModel, id: ElementId) -> EngineResult<()> {
    let object = model.require(id)?.clone();
    let (source, target) = object.endpoints().ok_or(EngineError::WrongType {
        id,
        expected: ElementType::Flow,
        actual: object.element_type(),
    })?;

    unlink_connection(model, id, source, target)?;
    model.remove(id);

    if let BusinessObject::Flow(flow) = &object {
        if model.contains(source) {
            relink_tandem_group(model, source)?;
            replace_connection::after_connection_deleted(model, source, flow.kind)?;
        }
    }

    for (operator, other) in [(source, target), (target, source)] {
        let view = model
            .get(operator)
            .and_then(BusinessObject::as_operator)
            .and_then(|o| o.decomposed_view);
        if let Some(view) = view {
            delete_boundary_mirrors(model, view, other)?;
        }
    }
    Ok(())
}

/// Randzustände eines Prozesses, die `original` spiegeln
pub fn boundary_mirrors(
    model: &ProcessModel,
    process_id: ElementId,
    original: ElementId,
) -> Vec<ElementId> {
    let Ok(process) = model.process(process_id) else {
        return Vec::new();
    };
    process
        .consists_of_states
        .iter()
        .copied()
        .filter(|id| {
            model
                .get(*id)
                .and_then(BusinessObject::as_state)
                .and_then(|s| s.boundary)
                .is_some_and(|b| b.original == original)
        })
        .collect()
}

fn delete_boundary_mirrors(
    model: &mut ProcessModel,
    process_id: ElementId,
    original: ElementId,
) -> EngineResult<()> {
    for mirror in boundary_mirrors(model, process_id, original) {
        if model.contains(mirror) {
            log::debug!("Randzustand {} in Prozess {} wird mitgelöscht", mirror, process_id);
            delete_shape(model, mirror)?;
        }
    }
    Ok(())
}

/// Löscht ein Shape samt Verbindungen. Ein dekomponierter Operator nimmt
/// seinen gesamten Unterprozess-Baum mit.
///
/// Gibt die IDs der entfernten Prozesse zurück.
pub fn delete_shape(model: &mut ProcessModel, id: ElementId) -> EngineResult<Vec<ElementId>> {
    let element_type = model.require(id)?.element_type();
    if !element_type.is_shape() {
        return Err(EngineError::NotAShape(element_type));
    }

    let mut removed_processes = Vec::new();
    if element_type == ElementType::SystemLimit {
        for inner in model.shapes_inside(id) {
            if model.contains(inner) {
                removed_processes.extend(delete_shape(model, inner)?);
            }
        }
    }
    for connection in model.connections_of(id) {
        if model.contains(connection) {
            delete_connection(model, connection)?;
        }
    }
    let view = model
        .get(id)
        .and_then(BusinessObject::as_operator)
        .and_then(|o| o.decomposed_view);
    if let Some(view) = view {
        removed_processes.extend(delete_process_tree(model, view)?);
    }

    detach_shape(model, id)?;
    model.remove(id);
    Ok(removed_processes)
}

/// Entfernt einen Prozess mit allen Unterprozessen und deren Inhalten.
///
/// Löst die Dekompositions-Paarung und den Eintrag beim Parent.
pub fn delete_process_tree(
    model: &mut ProcessModel,
    root: ElementId,
) -> EngineResult<Vec<ElementId>> {
    let (operator, parent) = {
        let process = model.process(root)?;
        (process.is_decomposed_process_operator, process.parent)
    };
    let mut processes = vec![root];
    processes.extend(model.descendant_processes(root));

    let mut members: Vec<ElementId> = Vec::new();
    for &process_id in &processes {
        let process = model.process(process_id)?;
        members.extend(process.elements_container.iter().copied());
        members.extend(process.consists_of_states.iter().copied());
        members.extend(process.consists_of_process_operator.iter().copied());
        if let Some(sl) = process
            .consists_of_system_limit
            .and_then(|sl| model.get(sl))
            .and_then(BusinessObject::as_system_limit)
        {
            members.extend(sl.elements_container.iter().copied());
        }
    }
    for id in members {
        model.remove(id);
    }
    for &process_id in &processes {
        model.remove(process_id);
    }

    if let Some(op) = operator
        .and_then(|op| model.get_mut(op))
        .and_then(BusinessObject::as_operator_mut)
    {
        op.decomposed_view = None;
    }
    match parent.and_then(|p| model.get_mut(p)) {
        Some(BusinessObject::Process(parent)) => {
            parent.consists_of_processes.shift_remove(&root);
        }
        Some(BusinessObject::Project(project)) if project.entry_point == Some(root) => {
            project.entry_point = None;
        }
        _ => {}
    }
    log::info!("Prozessbaum {} entfernt ({} Prozesse)", root, processes.len());
    Ok(processes)
}

/// Verschiebt Shapes (Inhalte einer Systemgrenze wandern mit) und routet
/// alle betroffenen Verbindungen neu.
pub fn move_shapes(
    model: &mut ProcessModel,
    ids: &[ElementId],
    delta: Vec2,
) -> EngineResult<Vec<ElementId>> {
    let moved = rules::moved_shapes(model, ids);
    for &id in &moved {
        let bounds = model.require_bounds(id)?;
        model.set_bounds(id, bounds.translated(delta));
    }
    for &id in &moved {
        layout::relayout_attached(model, id)?;
    }
    Ok(moved)
}

/// Setzt die Geometrie eines Shapes und routet seine Verbindungen neu.
pub fn set_shape_bounds(
    model: &mut ProcessModel,
    id: ElementId,
    bounds: Bounds,
) -> EngineResult<()> {
    model.require(id)?;
    model.set_bounds(id, bounds);
    layout::relayout_attached(model, id)
}

/// Ändert die Art eines Flusses unter Beibehaltung der ID.
pub fn retype_flow(model: &mut ProcessModel, id: ElementId, kind: FlowKind) -> EngineResult<()> {
    let object = model.require_mut(id)?;
    let actual = object.element_type();
    let flow = object.as_flow_mut().ok_or(EngineError::WrongType {
        id,
        expected: ElementType::Flow,
        actual,
    })?;
    flow.kind = kind;
    Ok(())
}
