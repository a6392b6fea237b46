//! Integrationstests für die Editing-Use-Cases:
//! - Platzierungsregeln und Wurzelprozess
//! - Tandem-Gruppen und Umtypisierung
//! - Verschieben, Skalieren, Löschen, Label-Editing

mod common;

use common::{connect, create, root_with_system_limit, simple_chain};
use fpb_editor::core::{BusinessObject, RejectReason};
use fpb_editor::{
    AppController, AppIntent, AppState, Bounds, ElementType, FlowHint, FlowKind, Notification,
    RejectionKind,
};
use glam::Vec2;
use std::sync::Arc;

fn last_rejection(state: &AppState) -> Option<(RejectionKind, RejectReason)> {
    state.bus.recent().iter().rev().find_map(|n| match n {
        Notification::Rejected(r) => Some((r.kind, r.reason)),
        _ => None,
    })
}

fn flow_kind(state: &AppState, id: u64) -> FlowKind {
    state
        .model
        .get(id)
        .and_then(BusinessObject::as_flow)
        .map(|f| f.kind)
        .expect("Fluss vorhanden")
}

// ─── Wurzelprozess & Platzierung ─────────────────────────────────────────────

#[test]
fn test_first_system_limit_creates_project_and_root_process() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let sl = root_with_system_limit(&mut controller, &mut state);

    let root = state.focus.expect("Wurzelprozess sollte fokussiert sein");
    let project = state.model.project().expect("Projekt sollte existieren");
    assert_eq!(project.entry_point, Some(root));
    assert_eq!(state.model.system_limit_of(root).ok(), Some(sl));
    assert_eq!(state.model.bounds(sl), Some(Bounds::new(100.0, 100.0, 650.0, 700.0)));
    assert!(state
        .bus
        .recent()
        .contains(&Notification::ProcessCreated { process: root }));
}

#[test]
fn test_state_without_system_limit_is_rejected_without_side_effects() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CreateShapeRequested {
                type_tag: "fpb:Product".into(),
                position: Vec2::new(300.0, 300.0),
            },
        )
        .expect("Ablehnung ist kein Fehler");

    assert!(state.model.is_empty());
    assert_eq!(state.focus, None);
    assert_eq!(
        last_rejection(&state),
        Some((RejectionKind::IllegalCreate, RejectReason::NoSystemLimit))
    );
    assert!(state.view.tooltip.is_some());
}

#[test]
fn test_state_outside_system_limit_is_rejected() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    root_with_system_limit(&mut controller, &mut state);
    let before = state.model.clone();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CreateShapeRequested {
                type_tag: "fpb:Energy".into(),
                position: Vec2::new(760.0, 300.0),
            },
        )
        .expect("Ablehnung ist kein Fehler");

    assert!(Arc::ptr_eq(&before, &state.model));
    assert_eq!(
        last_rejection(&state),
        Some((RejectionKind::IllegalCreate, RejectReason::OutsideSystemLimit))
    );
}

#[test]
fn test_resource_overlapping_system_limit_is_rejected_outside_is_accepted() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    root_with_system_limit(&mut controller, &mut state);
    let count = state.model.len();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CreateShapeRequested {
                type_tag: "fpb:TechnicalResource".into(),
                position: Vec2::new(760.0, 300.0),
            },
        )
        .expect("Ablehnung ist kein Fehler");
    assert_eq!(state.model.len(), count);
    assert_eq!(
        last_rejection(&state),
        Some((RejectionKind::IllegalCreate, RejectReason::InsideShape))
    );

    let tr = create(&mut controller, &mut state, "fpb:TechnicalResource", 950.0, 300.0);
    assert_eq!(state.model.element_type(tr), Some(ElementType::TechnicalResource));
}

#[test]
fn test_second_system_limit_is_rejected() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    root_with_system_limit(&mut controller, &mut state);

    controller
        .handle_intent(
            &mut state,
            AppIntent::CreateShapeRequested {
                type_tag: "fpb:SystemLimit".into(),
                position: Vec2::new(1500.0, 450.0),
            },
        )
        .expect("Ablehnung ist kein Fehler");

    assert_eq!(
        last_rejection(&state),
        Some((RejectionKind::IllegalCreate, RejectReason::SecondSystemLimit))
    );
}

#[test]
fn test_unknown_type_tag_is_an_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    root_with_system_limit(&mut controller, &mut state);

    let result = controller.handle_intent(
        &mut state,
        AppIntent::CreateShapeRequested {
            type_tag: "fpb:Unbekannt".into(),
            position: Vec2::new(300.0, 300.0),
        },
    );

    assert!(result.is_err());
}

// ─── Verbindungen & Tandem-Gruppen ───────────────────────────────────────────

#[test]
fn test_typed_flow_retypes_existing_plain_flow_and_links_group() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let (_, operator, _) = simple_chain(&mut controller, &mut state);
    let plain = state.model.outgoing_flows(operator)[0];
    let second = create(&mut controller, &mut state, "fpb:Information", 500.0, 650.0);

    let parallel = connect(&mut controller, &mut state, operator, second, FlowHint::Parallel);

    assert_eq!(flow_kind(&state, plain), FlowKind::Parallel);
    assert_eq!(flow_kind(&state, parallel), FlowKind::Parallel);
    let group_of = |id| {
        state
            .model
            .get(id)
            .and_then(BusinessObject::as_flow)
            .map(|f| f.in_tandem_with.iter().copied().collect::<Vec<_>>())
            .unwrap_or_default()
    };
    assert_eq!(group_of(plain), vec![parallel]);
    assert_eq!(group_of(parallel), vec![plain]);
}

#[test]
fn test_deleting_group_member_reverts_last_flow_to_plain() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let (_, operator, _) = simple_chain(&mut controller, &mut state);
    let first = state.model.outgoing_flows(operator)[0];
    let second = create(&mut controller, &mut state, "fpb:Information", 500.0, 650.0);
    let alternative = connect(&mut controller, &mut state, operator, second, FlowHint::Alternative);
    assert_eq!(flow_kind(&state, first), FlowKind::Alternative);

    controller
        .handle_intent(
            &mut state,
            AppIntent::DeleteRequested {
                ids: vec![alternative],
            },
        )
        .expect("DeleteRequested sollte ohne Fehler durchlaufen");

    assert!(!state.model.contains(alternative));
    assert_eq!(flow_kind(&state, first), FlowKind::Flow);
}

#[test]
fn test_duplicate_and_self_connections_are_rejected() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let (input, operator, _) = simple_chain(&mut controller, &mut state);
    let count = state.model.len();

    for (source, target, reason) in [
        (operator, input, RejectReason::AlreadyConnected),
        (operator, operator, RejectReason::SelfLoop),
    ] {
        controller
            .handle_intent(
                &mut state,
                AppIntent::ConnectRequested {
                    source,
                    target: fpb_editor::ConnectTarget::Element(target),
                },
            )
            .expect("Ablehnung ist kein Fehler");
        assert_eq!(
            last_rejection(&state),
            Some((RejectionKind::IllegalConnect, reason))
        );
    }
    assert_eq!(state.model.len(), count);
}

#[test]
fn test_operator_and_resource_are_connected_by_usage() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let (_, operator, _) = simple_chain(&mut controller, &mut state);
    let tr = create(&mut controller, &mut state, "fpb:TechnicalResource", 950.0, 400.0);

    let usage = connect(&mut controller, &mut state, operator, tr, FlowHint::Parallel);

    assert_eq!(state.model.element_type(usage), Some(ElementType::Usage));
    let root = state.focus.expect("Fokus");
    let process = state.model.process(root).expect("Prozess");
    assert!(process.elements_container.contains(&usage));
    assert_eq!(state.model.waypoints(usage).map(<[_]>::len), Some(2));
}

#[test]
fn test_reconnect_keeps_connection_id() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let (input, operator, _) = simple_chain(&mut controller, &mut state);
    let flow = state.model.find_connection(input, operator).expect("Fluss");
    let other = create(&mut controller, &mut state, "fpb:Energy", 500.0, 200.0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ReconnectRequested {
                connection: flow,
                source: other,
                target: operator,
            },
        )
        .expect("ReconnectRequested sollte ohne Fehler durchlaufen");

    assert_eq!(state.model.find_connection(other, operator), Some(flow));
    assert_eq!(state.model.find_connection(input, operator), None);
}

// ─── Verschieben, Skalieren, Löschen ─────────────────────────────────────────

#[test]
fn test_moving_system_limit_moves_its_content() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let sl = root_with_system_limit(&mut controller, &mut state);
    let product = create(&mut controller, &mut state, "fpb:Product", 300.0, 300.0);
    let before = state.model.bounds(product).expect("Geometrie");

    controller
        .handle_intent(
            &mut state,
            AppIntent::MoveRequested {
                ids: vec![sl],
                delta: Vec2::new(40.0, 10.0),
            },
        )
        .expect("MoveRequested sollte ohne Fehler durchlaufen");

    assert_eq!(
        state.model.bounds(product),
        Some(before.translated(Vec2::new(40.0, 10.0)))
    );
}

#[test]
fn test_moving_state_out_of_system_limit_is_rejected() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    root_with_system_limit(&mut controller, &mut state);
    let product = create(&mut controller, &mut state, "fpb:Product", 300.0, 300.0);
    let before = state.model.bounds(product);

    controller
        .handle_intent(
            &mut state,
            AppIntent::MoveRequested {
                ids: vec![product],
                delta: Vec2::new(-250.0, 0.0),
            },
        )
        .expect("Ablehnung ist kein Fehler");

    assert_eq!(state.model.bounds(product), before);
    assert_eq!(
        last_rejection(&state),
        Some((RejectionKind::IllegalMove, RejectReason::ParentChanged))
    );
}

#[test]
fn test_resize_cutting_content_is_rejected() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let sl = root_with_system_limit(&mut controller, &mut state);
    create(&mut controller, &mut state, "fpb:Product", 600.0, 600.0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ResizeRequested {
                id: sl,
                bounds: Bounds::new(100.0, 100.0, 300.0, 300.0),
            },
        )
        .expect("Ablehnung ist kein Fehler");

    assert_eq!(state.model.bounds(sl), Some(Bounds::new(100.0, 100.0, 650.0, 700.0)));
    assert_eq!(
        last_rejection(&state),
        Some((RejectionKind::IllegalResize, RejectReason::CutsContent))
    );
}

#[test]
fn test_system_limit_cannot_be_deleted() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let sl = root_with_system_limit(&mut controller, &mut state);

    controller
        .handle_intent(&mut state, AppIntent::DeleteRequested { ids: vec![sl] })
        .expect("Ablehnung ist kein Fehler");

    assert!(state.model.contains(sl));
    assert_eq!(
        last_rejection(&state),
        Some((RejectionKind::IllegalDelete, RejectReason::ProtectedSystemLimit))
    );
}

#[test]
fn test_deleting_operator_removes_its_connections_and_assignments() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let (input, operator, output) = simple_chain(&mut controller, &mut state);

    controller
        .handle_intent(
            &mut state,
            AppIntent::DeleteRequested {
                ids: vec![operator],
            },
        )
        .expect("DeleteRequested sollte ohne Fehler durchlaufen");

    assert!(!state.model.contains(operator));
    assert!(state.model.connections_of(input).is_empty());
    assert!(state.model.connections_of(output).is_empty());
    let assigned = state
        .model
        .get(input)
        .and_then(BusinessObject::connectable)
        .map(|c| c.is_assigned_to.len());
    assert_eq!(assigned, Some(0));
}

// ─── Undo & Label-Editing ────────────────────────────────────────────────────

#[test]
fn test_undo_and_redo_restore_model_versions() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    root_with_system_limit(&mut controller, &mut state);
    let before = state.model.clone();
    let product = create(&mut controller, &mut state, "fpb:Product", 300.0, 300.0);
    let after = state.model.clone();

    controller
        .handle_intent(&mut state, AppIntent::UndoRequested)
        .expect("Undo sollte ohne Fehler durchlaufen");
    assert!(Arc::ptr_eq(&before, &state.model));
    assert!(!state.model.contains(product));

    controller
        .handle_intent(&mut state, AppIntent::RedoRequested)
        .expect("Redo sollte ohne Fehler durchlaufen");
    assert!(Arc::ptr_eq(&after, &state.model));
}

#[test]
fn test_label_edit_commit_sets_long_name_and_cancel_keeps_it() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let (_, operator, _) = simple_chain(&mut controller, &mut state);
    let long_name = |state: &AppState| {
        state
            .model
            .get(operator)
            .and_then(BusinessObject::connectable)
            .map(|c| c.identification.long_name.clone())
            .unwrap_or_default()
    };

    controller
        .handle_intent(&mut state, AppIntent::LabelEditStarted { id: operator })
        .expect("LabelEditStarted");
    controller
        .handle_intent(
            &mut state,
            AppIntent::LabelEditCommitted {
                text: "Fräsen".into(),
            },
        )
        .expect("LabelEditCommitted");
    assert_eq!(long_name(&state), "Fräsen");
    assert!(state.editor.label_edit.is_none());

    controller
        .handle_intent(&mut state, AppIntent::LabelEditStarted { id: operator })
        .expect("LabelEditStarted");
    controller
        .handle_intent(&mut state, AppIntent::LabelEditCancelled)
        .expect("LabelEditCancelled");
    controller
        .handle_intent(
            &mut state,
            AppIntent::LabelEditCommitted {
                text: "Bohren".into(),
            },
        )
        .expect("LabelEditCommitted ohne offenes Editing");
    assert_eq!(long_name(&state), "Fräsen");
}
