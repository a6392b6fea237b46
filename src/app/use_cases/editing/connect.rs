//! Use-Case: Verbindungen anlegen und umhängen.

use crate::app::use_cases::{commit, data_changed, reject};
use crate::app::AppState;
use crate::core::{
    factory, replace_connection, rules, sync, BusinessObject, ConnectTarget, ElementId,
    ElementType, EngineError, FlowHint,
};

fn target_id(target: ConnectTarget) -> ElementId {
    match target {
        ConnectTarget::Element(id) | ConnectTarget::Label(id) => id,
    }
}

/// Verbindet `source` mit `target`.
///
/// Der Verbindungstyp folgt aus der Typpaarung und dem Fluss-Hinweis.
/// Danach wird die Tandem-Gruppe der Quelle typrein gehalten.
pub fn connect(
    state: &mut AppState,
    source: ElementId,
    target: ConnectTarget,
    hint: FlowHint,
) -> anyhow::Result<()> {
    let connection_type = match rules::can_connect(&state.model, source, target, hint, None) {
        Ok(ty) => ty,
        Err(rejection) => {
            reject(state, rejection);
            return Ok(());
        }
    };
    let target = target_id(target);

    let mut work = (*state.model).clone();
    let object = factory::new_connection(&mut work, 0, connection_type, source, target);
    let id = sync::attach_connection(&mut work, object)?;
    let retyped = replace_connection::after_connection_created(&mut work, id)?;
    commit(state, work, state.focus);

    log::info!(
        "Verbindung {} ({}) {}→{} erstellt, {} umtypisiert",
        id,
        connection_type.tag(),
        source,
        target,
        retyped.len()
    );
    data_changed(state);
    Ok(())
}

/// Hängt die Endpunkte einer bestehenden Verbindung um.
///
/// Die ID bleibt erhalten; die Flussart eines Flusses ebenso, sofern die
/// neue Paarung wieder ein Fluss ist.
pub fn reconnect(
    state: &mut AppState,
    connection: ElementId,
    source: ElementId,
    target: ConnectTarget,
) -> anyhow::Result<()> {
    let existing = state.model.require(connection)?;
    let hint = match existing {
        BusinessObject::Flow(flow) => FlowHint::from_kind(flow.kind),
        BusinessObject::Usage(_) => FlowHint::Plain,
        other => {
            return Err(EngineError::WrongType {
                id: connection,
                expected: ElementType::Flow,
                actual: other.element_type(),
            }
            .into())
        }
    };
    if existing.endpoints() == Some((source, target_id(target))) {
        log::debug!("Umhängen von {}: Endpunkte unverändert", connection);
        return Ok(());
    }

    let connection_type =
        match rules::can_connect(&state.model, source, target, hint, Some(connection)) {
            Ok(ty) => ty,
            Err(rejection) => {
                reject(state, rejection);
                return Ok(());
            }
        };
    let target = target_id(target);

    let mut work = (*state.model).clone();
    sync::delete_connection(&mut work, connection)?;
    let object = factory::new_connection(&mut work, connection, connection_type, source, target);
    let id = sync::attach_connection(&mut work, object)?;
    replace_connection::after_connection_created(&mut work, id)?;
    commit(state, work, state.focus);

    log::info!("Verbindung {} umgehängt auf {}→{}", id, source, target);
    data_changed(state);
    Ok(())
}
