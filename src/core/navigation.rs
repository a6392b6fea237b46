//! Navigation: Switch, Decompose und Compose.
//!
//! Alle drei sind reine Funktionen von `(&ProcessModel, Ziel)` auf eine
//! [`Navigation`]. Änderungen entstehen nur auf einer Arbeitskopie; ein
//! Fehler lässt das übergebene Modell also unberührt.

use super::{
    factory, replace_connection, sync, Boundary, BoundaryRole, Bounds, BusinessObject,
    Characteristic, ElementId, ElementType, EngineError, EngineResult, FlowKind, Identification,
    ProcessModel,
};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Ergebnis eines Navigationsbefehls
#[derive(Debug, Clone)]
pub struct Navigation {
    /// Geänderte Arbeitskopie (`None` = Modell unverändert)
    pub model: Option<ProcessModel>,
    /// Neuer Fokus-Prozess
    pub focus: ElementId,
    /// Neu angelegte Prozesse
    pub created_processes: Vec<ElementId>,
}

impl Navigation {
    fn focus_only(focus: ElementId) -> Self {
        Self {
            model: None,
            focus,
            created_processes: Vec::new(),
        }
    }
}

// ── Switch ──────────────────────────────────────────────────────────

/// Wechselt zu Prozess `target`, der genau eine Systemgrenze haben muss.
pub fn switch(model: &ProcessModel, target: ElementId) -> EngineResult<Navigation> {
    model.process(target)?;
    model.system_limit_of(target)?;
    Ok(Navigation::focus_only(target))
}

// ── Hilfsfunktionen ─────────────────────────────────────────────────

fn copy_names(target: &mut Identification, source: &Identification) {
    target.long_name = source.long_name.clone();
    target.short_name = source.short_name.clone();
    target.version_number = source.version_number.clone();
    target.revision_number = source.revision_number.clone();
}

fn identity_of(
    model: &ProcessModel,
    id: ElementId,
) -> EngineResult<(Identification, Vec<Characteristic>)> {
    let object = model.require(id)?;
    let core = object.connectable().ok_or(EngineError::WrongType {
        id,
        expected: ElementType::ProcessOperator,
        actual: object.element_type(),
    })?;
    Ok((core.identification.clone(), core.characteristics.clone()))
}

/// Neuer Zustand gleicher Art und gleicher Namen wie `original`
fn mirror_state(
    work: &mut ProcessModel,
    original: ElementId,
    boundary: Option<Boundary>,
    options: &EditorOptions,
) -> EngineResult<BusinessObject> {
    let object = work.require(original)?;
    let source = object.as_state().cloned().ok_or(EngineError::WrongType {
        id: original,
        expected: ElementType::Product,
        actual: object.element_type(),
    })?;
    let mut mirror = factory::new_object(work, source.kind.element_type(), options);
    if let Some(state) = mirror.as_state_mut() {
        copy_names(&mut state.core.identification, &source.core.identification);
        state.core.characteristics = source.core.characteristics.clone();
        state.boundary = boundary;
    }
    Ok(mirror)
}

fn connect(
    work: &mut ProcessModel,
    source: ElementId,
    target: ElementId,
    kind: FlowKind,
) -> EngineResult<ElementId> {
    let object = factory::new_connection(work, 0, kind.element_type(), source, target);
    let id = sync::attach_connection(work, object)?;
    replace_connection::after_connection_created(work, id)?;
    Ok(id)
}

/// Systemgrenze eines synthetisierten Prozesses am konfigurierten Ursprung
fn synthesized_system_limit(options: &EditorOptions) -> Bounds {
    let [x, y] = options.system_limit_origin;
    Bounds::new(x, y, options.system_limit_width, options.system_limit_height)
}

/// Zustände pro Reihe entlang einer Kante der Breite `width`
fn slots_per_row(width: f32, options: &EditorOptions) -> usize {
    let pitch = options.state_size + options.boundary_spacing;
    (((width - options.boundary_spacing) / pitch).floor() as usize).max(1)
}

fn row_count(count: usize, per_row: usize) -> usize {
    count.div_ceil(per_row)
}

/// Platz des `index`-ten Randzustands einer Rolle entlang der Grenze.
///
/// Eingänge liegen an der Oberkante, Ausgänge an der Unterkante; passt eine
/// Reihe nicht mehr in die Breite, wird nach innen umgebrochen. Die Grenze
/// muss hoch genug sein ([`mirror_height`]).
pub fn boundary_slot(
    system_limit: &Bounds,
    role: BoundaryRole,
    index: usize,
    options: &EditorOptions,
) -> Bounds {
    let size = options.state_size;
    let spacing = options.boundary_spacing;
    let pitch = size + spacing;
    let per_row = slots_per_row(system_limit.width, options);
    let (row, column) = (index / per_row, index % per_row);
    let x = system_limit.x + spacing + column as f32 * pitch;
    let y = match role {
        BoundaryRole::Incoming => system_limit.y + row as f32 * pitch,
        BoundaryRole::Outgoing => system_limit.max().y - size - row as f32 * pitch,
    };
    Bounds::new(x, y, size, size)
}

/// Mindesthöhe einer Unterprozess-Grenze, damit Eingangs- und
/// Ausgangsreihen den Saat-Operator in der Mitte nicht erreichen.
pub fn mirror_height(width: f32, incoming: usize, outgoing: usize, options: &EditorOptions) -> f32 {
    let per_row = slots_per_row(width, options);
    let rows = row_count(incoming, per_row).max(row_count(outgoing, per_row));
    let pitch = options.state_size + options.boundary_spacing;
    2.0 * rows as f32 * pitch + options.operator_height
}

// ── Decompose ───────────────────────────────────────────────────────

/// Dekomponiert Operator `operator` und fokussiert seinen Unterprozess.
///
/// Beim ersten Mal entstehen Prozess, Systemgrenze und ein gespiegelter
/// Operator in deren Mitte. Danach werden nur Spiegel für neu verbundene
/// Zustände ergänzt. Die Vorbedingung prüft
/// [`rules::can_decompose`](super::rules::can_decompose).
pub fn decompose(
    model: &ProcessModel,
    operator: ElementId,
    options: &EditorOptions,
) -> EngineResult<Navigation> {
    model.expect_type(operator, ElementType::ProcessOperator)?;
    let mut work = model.clone();

    let existing = work
        .get(operator)
        .and_then(BusinessObject::as_operator)
        .and_then(|o| o.decomposed_view)
        .filter(|view| work.process(*view).is_ok());
    let (view, created_processes) = match existing {
        Some(view) => (view, Vec::new()),
        None => {
            let view = create_decomposed_process(&mut work, operator, options)?;
            (view, vec![view])
        }
    };

    let added = add_missing_mirrors(&mut work, operator, view, options)?;
    log::info!(
        "Operator {} dekomponiert in Prozess {} ({} neue Randzustände)",
        operator,
        view,
        added.len()
    );
    Ok(Navigation {
        model: Some(work),
        focus: view,
        created_processes,
    })
}

fn create_decomposed_process(
    work: &mut ProcessModel,
    operator: ElementId,
    options: &EditorOptions,
) -> EngineResult<ElementId> {
    let owner = work
        .owning_process(operator)
        .ok_or(EngineError::OrphanElement(operator))?;
    let (identification, characteristics) = identity_of(work, operator)?;

    let process = factory::create_process(work, Some(owner));
    let view = work.insert(process);
    work.process_mut(view)?.is_decomposed_process_operator = Some(operator);
    work.process_mut(owner)?.consists_of_processes.insert(view);
    if let Some(op) = work.get_mut(operator).and_then(BusinessObject::as_operator_mut) {
        op.decomposed_view = Some(view);
    }

    let sl_bounds = synthesized_system_limit(options);
    let mut system_limit = factory::new_object(work, ElementType::SystemLimit, options);
    if let Some(sl) = system_limit.as_system_limit_mut() {
        sl.name = identification.display_name().to_string();
    }
    sync::attach_shape(work, view, system_limit, sl_bounds)?;

    let mut seed = factory::new_object(work, ElementType::ProcessOperator, options);
    if let Some(core) = seed.connectable_mut() {
        copy_names(&mut core.identification, &identification);
        core.characteristics = characteristics;
    }
    let seed_bounds = Bounds::from_center(sl_bounds.center(), options.operator_dimensions());
    sync::attach_shape(work, view, seed, seed_bounds)?;
    Ok(view)
}

/// Zustände, die über Flüsse an `operator` hängen, mit Rolle und Flussart
fn connected_states(
    model: &ProcessModel,
    operator: ElementId,
) -> Vec<(ElementId, BoundaryRole, FlowKind)> {
    let is_state = |id: ElementId| model.element_type(id).is_some_and(ElementType::is_state);
    let mut result = Vec::new();
    for id in model.incoming_flows(operator) {
        if let Some(flow) = model.get(id).and_then(BusinessObject::as_flow) {
            if is_state(flow.source_ref) {
                result.push((flow.source_ref, BoundaryRole::Incoming, flow.kind));
            }
        }
    }
    for id in model.outgoing_flows(operator) {
        if let Some(flow) = model.get(id).and_then(BusinessObject::as_flow) {
            if is_state(flow.target_ref) {
                result.push((flow.target_ref, BoundaryRole::Outgoing, flow.kind));
            }
        }
    }
    result
}

fn add_missing_mirrors(
    work: &mut ProcessModel,
    operator: ElementId,
    view: ElementId,
    options: &EditorOptions,
) -> EngineResult<Vec<ElementId>> {
    let system_limit = work.system_limit_of(view)?;
    let process = work.process(view)?;
    let seed = process.consists_of_process_operator.first().copied();
    let existing: Vec<(ElementId, Boundary)> = process
        .consists_of_states
        .iter()
        .filter_map(|id| {
            let boundary = work.get(*id)?.as_state()?.boundary?;
            Some((*id, boundary))
        })
        .collect();
    let missing: Vec<(ElementId, BoundaryRole, FlowKind)> = connected_states(work, operator)
        .into_iter()
        .filter(|(original, _, _)| !existing.iter().any(|(_, b)| b.original == *original))
        .collect();

    let count = |role: BoundaryRole| {
        existing.iter().filter(|(_, b)| b.role == role).count()
            + missing.iter().filter(|(_, r, _)| *r == role).count()
    };
    let sl_bounds = grow_for_mirrors(
        work,
        system_limit,
        seed,
        &existing,
        count(BoundaryRole::Incoming),
        count(BoundaryRole::Outgoing),
        options,
    )?;

    let mut incoming_count = existing
        .iter()
        .filter(|(_, b)| b.role == BoundaryRole::Incoming)
        .count();
    let mut outgoing_count = existing.len() - incoming_count;
    let mut added = Vec::new();

    for (original, role, kind) in missing {
        let counter = match role {
            BoundaryRole::Incoming => &mut incoming_count,
            BoundaryRole::Outgoing => &mut outgoing_count,
        };
        let bounds = boundary_slot(&sl_bounds, role, *counter, options);
        *counter += 1;

        let mirror = mirror_state(work, original, Some(Boundary { role, original }), options)?;
        let mirror = sync::attach_shape(work, view, mirror, bounds)?;
        if let Some(seed) = seed {
            match role {
                BoundaryRole::Incoming => connect(work, mirror, seed, FlowKind::Flow)?,
                BoundaryRole::Outgoing => connect(work, seed, mirror, kind)?,
            };
        }
        added.push(mirror);
    }
    Ok(added)
}

/// Vergrößert die Grenze nach unten, wenn die Randreihen sonst nicht
/// hineinpassen. Vorhandene Ausgangsspiegel wandern mit der Unterkante, der
/// Saat-Operator mit der Mitte.
fn grow_for_mirrors(
    work: &mut ProcessModel,
    system_limit: ElementId,
    seed: Option<ElementId>,
    existing: &[(ElementId, Boundary)],
    incoming: usize,
    outgoing: usize,
    options: &EditorOptions,
) -> EngineResult<Bounds> {
    let bounds = work.require_bounds(system_limit)?;
    let needed = mirror_height(bounds.width, incoming, outgoing, options);
    if needed <= bounds.height {
        return Ok(bounds);
    }
    let grown = Bounds::new(bounds.x, bounds.y, bounds.width, needed);
    sync::set_shape_bounds(work, system_limit, grown)?;
    let outgoing_mirrors: Vec<ElementId> = existing
        .iter()
        .filter(|(_, b)| b.role == BoundaryRole::Outgoing)
        .map(|(id, _)| *id)
        .collect();
    let delta = needed - bounds.height;
    sync::move_shapes(work, &outgoing_mirrors, Vec2::new(0.0, delta))?;
    if let Some(seed) = seed {
        sync::move_shapes(work, &[seed], Vec2::new(0.0, delta * 0.5))?;
    }
    log::debug!(
        "Systemgrenze {} auf Höhe {} vergrößert ({} Ein-, {} Ausgänge)",
        system_limit,
        needed,
        incoming,
        outgoing
    );
    Ok(grown)
}

// ── Compose ─────────────────────────────────────────────────────────

/// Komponiert die Ebene der Systemgrenze `system_limit`.
///
/// Hat der Prozess bereits einen Operator, wird nur dessen Prozess
/// fokussiert. Sonst entsteht ein umschließender Prozess mit einem Operator,
/// dessen Nachbarn die Randzustände der Systemgrenze spiegeln.
pub fn compose(
    model: &ProcessModel,
    system_limit: ElementId,
    options: &EditorOptions,
) -> EngineResult<Navigation> {
    model.expect_type(system_limit, ElementType::SystemLimit)?;
    let process = model
        .owning_process(system_limit)
        .ok_or(EngineError::OrphanElement(system_limit))?;

    if let Some(operator) = model.process(process)?.is_decomposed_process_operator {
        let owner = model
            .owning_process(operator)
            .ok_or(EngineError::OrphanElement(operator))?;
        return switch(model, owner);
    }

    let mut work = model.clone();
    let sl_bounds = work.require_bounds(system_limit)?;
    let name = work
        .get(system_limit)
        .and_then(BusinessObject::as_system_limit)
        .map(|sl| sl.name.clone())
        .unwrap_or_default();

    let project = match work.project_id() {
        Some(id) => id,
        None => {
            let project = factory::create_project(&mut work, options);
            work.insert(project)
        }
    };
    let outer = factory::create_process(&mut work, Some(project));
    let outer = work.insert(outer);
    work.project_mut()?.entry_point = Some(outer);
    work.process_mut(outer)?.consists_of_processes.insert(process);

    let (incoming, outgoing) = classify_border_states(&work, system_limit, &sl_bounds, options);
    let outer_sl_bounds = enclosing_system_limit(incoming.len(), outgoing.len(), options);
    let mut outer_sl = factory::new_object(&mut work, ElementType::SystemLimit, options);
    if let Some(sl) = outer_sl.as_system_limit_mut() {
        sl.name = name.clone();
    }
    sync::attach_shape(&mut work, outer, outer_sl, outer_sl_bounds)?;

    let mut operator = factory::new_object(&mut work, ElementType::ProcessOperator, options);
    if let BusinessObject::ProcessOperator(op) = &mut operator {
        if !name.is_empty() {
            op.core.identification.long_name = name;
        }
        op.decomposed_view = Some(process);
    }
    let operator_bounds =
        Bounds::from_center(outer_sl_bounds.center(), options.operator_dimensions());
    let operator = sync::attach_shape(&mut work, outer, operator, operator_bounds)?;
    {
        let inner = work.process_mut(process)?;
        inner.parent = Some(outer);
        inner.is_decomposed_process_operator = Some(operator);
    }

    for (role, states) in [
        (BoundaryRole::Incoming, incoming),
        (BoundaryRole::Outgoing, outgoing),
    ] {
        for (index, state) in states.iter().copied().enumerate() {
            let bounds = neighbor_slot(
                &operator_bounds,
                &outer_sl_bounds,
                role,
                index,
                states.len(),
                options,
            );
            let neighbor = mirror_state(&mut work, state, None, options)?;
            let neighbor = sync::attach_shape(&mut work, outer, neighbor, bounds)?;
            if let Some(s) = work.get_mut(state).and_then(BusinessObject::as_state_mut) {
                s.boundary = Some(Boundary {
                    role,
                    original: neighbor,
                });
            }
            match role {
                BoundaryRole::Incoming => connect(&mut work, neighbor, operator, FlowKind::Flow)?,
                BoundaryRole::Outgoing => connect(&mut work, operator, neighbor, FlowKind::Flow)?,
            };
        }
    }

    log::info!(
        "Prozess {} komponiert: neuer Prozess {} mit Operator {}",
        process,
        outer,
        operator
    );
    Ok(Navigation {
        model: Some(work),
        focus: outer,
        created_processes: vec![outer],
    })
}

/// Zustände nahe der Ober- (Eingang) bzw. Unterkante (Ausgang) der Grenze.
/// Liegt ein Zustand nahe beiden Kanten, gilt er als Eingang.
fn classify_border_states(
    model: &ProcessModel,
    system_limit: ElementId,
    sl_bounds: &Bounds,
    options: &EditorOptions,
) -> (Vec<ElementId>, Vec<ElementId>) {
    let band = options.state_size;
    let mut incoming = Vec::new();
    let mut outgoing = Vec::new();
    for id in model.shapes_inside(system_limit) {
        if !model.element_type(id).is_some_and(ElementType::is_state) {
            continue;
        }
        let Some(bounds) = model.bounds(id) else {
            continue;
        };
        if bounds.y <= sl_bounds.y + band {
            incoming.push(id);
        } else if bounds.max().y >= sl_bounds.max().y - band {
            outgoing.push(id);
        }
    }
    (incoming, outgoing)
}

/// Synthetisierte Grenze, so hoch, dass alle Nachbarreihen über und unter
/// dem mittigen Operator samt Randabstand hineinpassen.
fn enclosing_system_limit(incoming: usize, outgoing: usize, options: &EditorOptions) -> Bounds {
    let bounds = synthesized_system_limit(options);
    let per_row = slots_per_row(bounds.width, options);
    let rows = row_count(incoming, per_row)
        .max(row_count(outgoing, per_row))
        .max(1);
    let pitch = options.state_size + options.boundary_spacing;
    let half = options.neighbor_distance
        + (rows - 1) as f32 * pitch
        + options.state_size * 0.5
        + options.boundary_spacing;
    Bounds::new(
        bounds.x,
        bounds.y,
        bounds.width,
        bounds.height.max(2.0 * half),
    )
}

/// Platz eines Nachbarn über (Eingang) bzw. unter (Ausgang) dem Operator,
/// reihenweise zentriert.
fn neighbor_slot(
    operator: &Bounds,
    system_limit: &Bounds,
    role: BoundaryRole,
    index: usize,
    count: usize,
    options: &EditorOptions,
) -> Bounds {
    let size = options.state_size;
    let spacing = options.boundary_spacing;
    let pitch = size + spacing;
    let per_row = slots_per_row(system_limit.width, options);
    let (row, column) = (index / per_row, index % per_row);
    let in_row = (count - row * per_row).min(per_row);
    let row_width = in_row as f32 * size + (in_row as f32 - 1.0) * spacing;

    let center = operator.center();
    let offset = options.neighbor_distance + row as f32 * pitch;
    let y = match role {
        BoundaryRole::Incoming => center.y - offset,
        BoundaryRole::Outgoing => center.y + offset,
    };
    let x = center.x - row_width * 0.5 + column as f32 * pitch + size * 0.5;
    Bounds::from_center(Vec2::new(x, y), Vec2::splat(size))
}
