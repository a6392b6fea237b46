use super::*;
use crate::core::test_support::Fixture;

#[test]
fn state_must_be_inside_system_limit() {
    let fx = Fixture::with_system_limit();
    let inside = Bounds::new(200.0, 200.0, 50.0, 50.0);
    assert!(can_create(&fx.model, Some(fx.process), ElementType::Product, inside).is_ok());

    let crossing = Bounds::new(730.0, 200.0, 50.0, 50.0);
    let rejection =
        can_create(&fx.model, Some(fx.process), ElementType::Energy, crossing).unwrap_err();
    assert_eq!(rejection.kind, RejectionKind::IllegalCreate);
    assert_eq!(rejection.reason, RejectReason::OutsideSystemLimit);
    assert_eq!(rejection.other, Some(fx.system_limit));
    assert_eq!(rejection.position, crossing.center());
}

#[test]
fn operator_without_system_limit_is_rejected() {
    let model = ProcessModel::new();
    let rejection = can_create(
        &model,
        None,
        ElementType::ProcessOperator,
        Bounds::new(0.0, 0.0, 150.0, 80.0),
    )
    .unwrap_err();
    assert_eq!(rejection.reason, RejectReason::NoSystemLimit);
}

#[test]
fn resource_may_not_overlap_system_limit_or_shapes() {
    let fx = Fixture::with_system_limit();
    let overlapping = Bounds::new(700.0, 300.0, 150.0, 80.0);
    let rejection = can_create(
        &fx.model,
        Some(fx.process),
        ElementType::TechnicalResource,
        overlapping,
    )
    .unwrap_err();
    assert_eq!(rejection.reason, RejectReason::InsideShape);
    assert_eq!(rejection.other, Some(fx.system_limit));

    let outside = Bounds::new(800.0, 300.0, 150.0, 80.0);
    assert!(
        can_create(&fx.model, Some(fx.process), ElementType::TechnicalResource, outside).is_ok()
    );
}

#[test]
fn second_system_limit_is_rejected() {
    let fx = Fixture::with_system_limit();
    let rejection = can_create(
        &fx.model,
        Some(fx.process),
        ElementType::SystemLimit,
        Bounds::new(900.0, 100.0, 650.0, 700.0),
    )
    .unwrap_err();
    assert_eq!(rejection.reason, RejectReason::SecondSystemLimit);
}

#[test]
fn connect_resolves_type_from_pairing_and_hint() {
    let mut fx = Fixture::with_system_limit();
    let state = fx.state(200.0, 150.0);
    let op = fx.operator(300.0, 400.0);
    let tr = fx.resource(900.0, 400.0);

    let plain = can_connect(&fx.model, state, ConnectTarget::Element(op), FlowHint::Plain, None);
    assert_eq!(plain, Ok(ElementType::Flow));
    let parallel = can_connect(
        &fx.model,
        op,
        ConnectTarget::Element(state),
        FlowHint::Parallel,
        None,
    );
    assert_eq!(parallel, Ok(ElementType::ParallelFlow));
    let usage = can_connect(&fx.model, tr, ConnectTarget::Element(op), FlowHint::Alternative, None);
    assert_eq!(usage, Ok(ElementType::Usage));
}

#[test]
fn illegal_pairings_are_rejected() {
    let mut fx = Fixture::with_system_limit();
    let a = fx.state(200.0, 150.0);
    let b = fx.state(400.0, 150.0);
    let tr = fx.resource(900.0, 400.0);

    let rejection =
        can_connect(&fx.model, a, ConnectTarget::Element(b), FlowHint::Plain, None).unwrap_err();
    assert_eq!(rejection.kind, RejectionKind::IllegalConnect);
    assert_eq!(rejection.reason, RejectReason::IllegalPairing);
    assert_eq!((rejection.subject, rejection.other), (Some(a), Some(b)));

    let rejection =
        can_connect(&fx.model, a, ConnectTarget::Element(tr), FlowHint::Plain, None).unwrap_err();
    assert_eq!(rejection.reason, RejectReason::IllegalPairing);

    let rejection =
        can_connect(&fx.model, a, ConnectTarget::Element(a), FlowHint::Plain, None).unwrap_err();
    assert_eq!(rejection.reason, RejectReason::SelfLoop);
}

#[test]
fn label_target_and_duplicates_are_rejected() {
    let mut fx = Fixture::with_system_limit();
    let state = fx.state(200.0, 150.0);
    let op = fx.operator(300.0, 400.0);

    let rejection =
        can_connect(&fx.model, state, ConnectTarget::Label(op), FlowHint::Plain, None).unwrap_err();
    assert_eq!(rejection.reason, RejectReason::TargetIsLabel);

    let flow = fx.flow(state, op, FlowKind::Flow);
    let rejection =
        can_connect(&fx.model, op, ConnectTarget::Element(state), FlowHint::Plain, None)
            .unwrap_err();
    assert_eq!(rejection.reason, RejectReason::AlreadyConnected);

    // Beim Umhängen zählt die eigene Verbindung nicht
    let ok = can_connect(&fx.model, op, ConnectTarget::Element(state), FlowHint::Plain, Some(flow));
    assert!(ok.is_ok());
}

#[test]
fn resize_only_for_system_limit_and_keeps_content() {
    let mut fx = Fixture::with_system_limit();
    let state = fx.state(600.0, 700.0);
    fx.resource(900.0, 400.0);

    let rejection = can_resize(&fx.model, state, Bounds::new(0.0, 0.0, 80.0, 80.0)).unwrap_err();
    assert_eq!(rejection.reason, RejectReason::NotResizable);

    let too_small = Bounds::new(100.0, 100.0, 300.0, 300.0);
    let rejection = can_resize(&fx.model, fx.system_limit, too_small).unwrap_err();
    assert_eq!(rejection.kind, RejectionKind::IllegalResize);
    assert_eq!(rejection.reason, RejectReason::CutsContent);
    assert_eq!(rejection.other, Some(state));

    let into_resource = Bounds::new(100.0, 100.0, 800.0, 700.0);
    let rejection = can_resize(&fx.model, fx.system_limit, into_resource).unwrap_err();
    assert_eq!(rejection.reason, RejectReason::OverlapsResource);

    assert!(
        can_resize(&fx.model, fx.system_limit, Bounds::new(100.0, 100.0, 700.0, 750.0)).is_ok()
    );
}

#[test]
fn move_keeps_parent_and_system_limit_carries_contents() {
    let mut fx = Fixture::with_system_limit();
    let state = fx.state(200.0, 150.0);

    let rejection = can_move(&fx.model, &[state], Vec2::new(-200.0, 0.0)).unwrap_err();
    assert_eq!(rejection.kind, RejectionKind::IllegalMove);
    assert_eq!(rejection.reason, RejectReason::ParentChanged);

    assert!(can_move(&fx.model, &[fx.system_limit], Vec2::new(-50.0, 0.0)).is_ok());
    assert_eq!(moved_shapes(&fx.model, &[fx.system_limit]), vec![fx.system_limit, state]);
}

#[test]
fn move_onto_resource_is_rejected() {
    let mut fx = Fixture::with_system_limit();
    let tr = fx.resource(900.0, 400.0);

    let rejection = can_move(&fx.model, &[tr], Vec2::new(-200.0, 0.0)).unwrap_err();
    assert_eq!(rejection.reason, RejectReason::InsideShape);

    let rejection = can_move(&fx.model, &[fx.system_limit], Vec2::new(100.0, 0.0)).unwrap_err();
    assert_eq!(rejection.reason, RejectReason::OverlapsResource);
    assert_eq!(rejection.other, Some(tr));
}

#[test]
fn system_limit_cannot_be_deleted() {
    let mut fx = Fixture::with_system_limit();
    let state = fx.state(200.0, 150.0);
    assert!(can_delete(&fx.model, &[state]).is_ok());
    let rejection = can_delete(&fx.model, &[state, fx.system_limit]).unwrap_err();
    assert_eq!(rejection.kind, RejectionKind::IllegalDelete);
    assert_eq!(rejection.reason, RejectReason::ProtectedSystemLimit);
}

#[test]
fn decompose_needs_incoming_and_outgoing_flow() {
    let mut fx = Fixture::with_system_limit();
    let a = fx.state(200.0, 150.0);
    let b = fx.state(200.0, 700.0);
    let op = fx.operator(300.0, 400.0);
    let tr = fx.resource(900.0, 400.0);
    fx.flow(a, op, FlowKind::Flow);
    fx.usage(op, tr);

    let rejection = can_decompose(&fx.model, op).unwrap_err();
    assert_eq!(rejection.kind, RejectionKind::IllegalDecompose);
    assert_eq!(rejection.reason, RejectReason::MissingFlows);

    fx.flow(op, b, FlowKind::Flow);
    assert!(can_decompose(&fx.model, op).is_ok());
}

#[test]
fn rejection_topics() {
    assert_eq!(RejectionKind::IllegalCreate.topic(), "illegalCreate");
    assert_eq!(RejectionKind::IllegalDecompose.topic(), "illegalDecompose");
}
