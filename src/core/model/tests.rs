use super::*;
use crate::core::{Connectable, Flow, FlowKind, ProcessOperator, State, StateKind, SystemLimit};
use indexmap::IndexSet;

fn state(id: ElementId) -> BusinessObject {
    BusinessObject::State(State {
        id,
        kind: StateKind::Product,
        core: Connectable::default(),
        boundary: None,
    })
}

fn operator(id: ElementId) -> BusinessObject {
    BusinessObject::ProcessOperator(ProcessOperator {
        id,
        core: Connectable::default(),
        decomposed_view: None,
    })
}

/// Prozess 1 mit Systemgrenze 2, Zustand 3, Operator 4 und Fluss 5 (3 → 4)
fn small_model() -> ProcessModel {
    let mut model = ProcessModel::new();
    model.insert(BusinessObject::Process(Process {
        id: 1,
        elements_container: IndexSet::from([2]),
        consists_of_states: IndexSet::from([3]),
        consists_of_process_operator: IndexSet::from([4]),
        consists_of_system_limit: Some(2),
        ..Process::default()
    }));
    model.insert(BusinessObject::SystemLimit(SystemLimit {
        id: 2,
        name: "Montage".into(),
        elements_container: IndexSet::from([3, 4, 5]),
    }));
    model.insert(state(3));
    model.insert(operator(4));
    model.insert(BusinessObject::Flow(Flow {
        id: 5,
        kind: FlowKind::Flow,
        source_ref: 3,
        target_ref: 4,
        in_tandem_with: IndexSet::new(),
    }));
    if let Some(c) = model.get_mut(3).and_then(BusinessObject::connectable_mut) {
        c.outgoing.insert(5);
    }
    if let Some(c) = model.get_mut(4).and_then(BusinessObject::connectable_mut) {
        c.incoming.insert(5);
    }
    model.set_bounds(2, Bounds::new(100.0, 100.0, 650.0, 700.0));
    model.set_bounds(3, Bounds::new(200.0, 100.0, 50.0, 50.0));
    model.set_bounds(4, Bounds::new(150.0, 300.0, 150.0, 80.0));
    model
}

#[test]
fn insert_assigns_ids_and_keeps_counter_ahead() {
    let mut model = small_model();
    let id = model.insert(state(0));
    assert_eq!(id, 6);
    assert_eq!(model.allocate_id(), 7);
    assert_eq!(model.len(), 6);
}

#[test]
fn remove_drops_visual_record() {
    let mut model = small_model();
    assert!(model.bounds(3).is_some());
    model.remove(3).expect("Zustand erwartet");
    assert!(model.bounds(3).is_none());
    assert!(!model.contains(3));
}

#[test]
fn system_limit_and_owner_lookup() {
    let model = small_model();
    assert_eq!(model.system_limit_of(1), Ok(2));
    assert_eq!(model.owning_process(3), Some(1));
    assert_eq!(model.owning_process(5), Some(1));
    assert_eq!(model.owning_process(2), Some(1));
    assert_eq!(model.canvas_parent(3), Some(2));
    assert_eq!(model.canvas_parent(2), Some(1));
}

#[test]
fn system_limit_must_be_in_container() {
    let mut model = small_model();
    model
        .process_mut(1)
        .expect("Prozess erwartet")
        .elements_container
        .clear();
    assert_eq!(model.system_limit_of(1), Err(EngineError::MissingSystemLimit(1)));
}

#[test]
fn wrong_type_is_reported() {
    let model = small_model();
    assert_eq!(
        model.process(3).unwrap_err(),
        EngineError::WrongType {
            id: 3,
            expected: ElementType::Process,
            actual: ElementType::Product,
        }
    );
    assert_eq!(model.require(99).unwrap_err(), EngineError::UnknownElement(99));
}

#[test]
fn connection_queries() {
    let model = small_model();
    assert_eq!(model.find_connection(3, 4), Some(5));
    assert_eq!(model.find_connection(4, 3), None);
    assert_eq!(model.find_connection_between(4, 3), Some(5));
    assert_eq!(model.outgoing_flows(3), vec![5]);
    assert_eq!(model.incoming_flows(4), vec![5]);
    assert_eq!(model.connections_of(4), vec![5]);
}

#[test]
fn shapes_inside_ignores_connections() {
    let model = small_model();
    assert_eq!(model.shapes_inside(2), vec![3, 4]);
}

#[test]
fn process_name_falls_back_to_system_limit() {
    let model = small_model();
    assert_eq!(model.process_name(1), "Montage");
}

#[test]
fn model_survives_json_round_trip() {
    let model = small_model();
    let json = serde_json::to_string(&model).expect("serialisierbar");
    let parsed: ProcessModel = serde_json::from_str(&json).expect("parsebar");
    assert_eq!(parsed.bounds(4), model.bounds(4));
    assert_eq!(parsed.system_limit_of(1), Ok(2));
}
