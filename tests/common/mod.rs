//! Gemeinsame Helfer für die Integrationstests.

#![allow(dead_code)]

use fpb_editor::{AppController, AppIntent, AppState, ConnectTarget, ElementId, FlowHint};
use glam::Vec2;

/// Zuletzt eingefügtes Element
pub fn last_id(state: &AppState) -> ElementId {
    state
        .model
        .iter()
        .last()
        .map(|object| object.id())
        .expect("Modell sollte Elemente enthalten")
}

/// Legt ein Shape per Intent an und gibt dessen ID zurück.
pub fn create(
    controller: &mut AppController,
    state: &mut AppState,
    tag: &str,
    x: f32,
    y: f32,
) -> ElementId {
    let before = state.model.len();
    controller
        .handle_intent(
            state,
            AppIntent::CreateShapeRequested {
                type_tag: tag.to_string(),
                position: Vec2::new(x, y),
            },
        )
        .expect("CreateShapeRequested sollte ohne Fehler durchlaufen");
    assert!(state.model.len() > before, "{tag} bei ({x}, {y}) wurde nicht angelegt");
    last_id(state)
}

/// Verbindet zwei Elemente mit dem gegebenen Flusstyp.
pub fn connect(
    controller: &mut AppController,
    state: &mut AppState,
    source: ElementId,
    target: ElementId,
    hint: FlowHint,
) -> ElementId {
    controller
        .handle_intent(state, AppIntent::FlowHintSelected { hint })
        .expect("FlowHintSelected sollte ohne Fehler durchlaufen");
    let before = state.model.len();
    controller
        .handle_intent(
            state,
            AppIntent::ConnectRequested {
                source,
                target: ConnectTarget::Element(target),
            },
        )
        .expect("ConnectRequested sollte ohne Fehler durchlaufen");
    assert_eq!(state.model.len(), before + 1, "Verbindung {source}→{target} fehlt");
    last_id(state)
}

/// Wurzelprozess mit Systemgrenze (100,100,650,700); gibt die Systemgrenze zurück.
pub fn root_with_system_limit(controller: &mut AppController, state: &mut AppState) -> ElementId {
    create(controller, state, "fpb:SystemLimit", 425.0, 450.0)
}

/// Eingang → Operator → Ausgang im Wurzelprozess: (Eingang, Operator, Ausgang)
pub fn simple_chain(
    controller: &mut AppController,
    state: &mut AppState,
) -> (ElementId, ElementId, ElementId) {
    root_with_system_limit(controller, state);
    let input = create(controller, state, "fpb:Product", 300.0, 200.0);
    let operator = create(controller, state, "fpb:ProcessOperator", 300.0, 400.0);
    let output = create(controller, state, "fpb:Product", 300.0, 650.0);
    connect(controller, state, input, operator, FlowHint::Plain);
    connect(controller, state, operator, output, FlowHint::Plain);
    (input, operator, output)
}
