//! Connection Replacement Behavior: hält die Tandem-Gruppen einer Quelle
//! typrein.
//!
//! Ersetzte Verbindungen werden in-place umtypisiert, ihre IDs bleiben also
//! für externe Referenzen gültig.

use super::{sync, BusinessObject, ElementId, EngineResult, FlowKind, ProcessModel};

fn flow_kind(model: &ProcessModel, id: ElementId) -> Option<FlowKind> {
    model.get(id).and_then(BusinessObject::as_flow).map(|f| f.kind)
}

/// Nach dem Anlegen eines Flusses:
/// - typisierter Fluss der Art K: alle anderen ausgehenden Flüsse der Quelle
///   werden zu K
/// - einfacher Fluss an einer Quelle mit Tandem-Gruppe: übernimmt deren Art
///
/// Gibt die umtypisierten Verbindungen zurück.
pub fn after_connection_created(
    model: &mut ProcessModel,
    connection: ElementId,
) -> EngineResult<Vec<ElementId>> {
    let Some(flow) = model.require(connection)?.as_flow() else {
        return Ok(Vec::new());
    };
    let source = flow.source_ref;
    let kind = flow.kind;
    let siblings: Vec<ElementId> = model
        .outgoing_flows(source)
        .into_iter()
        .filter(|id| *id != connection)
        .collect();

    let mut retyped = Vec::new();
    if kind.is_tandem() {
        for sibling in siblings {
            if flow_kind(model, sibling) != Some(kind) {
                sync::retype_flow(model, sibling, kind)?;
                retyped.push(sibling);
            }
        }
    } else if let Some(group_kind) = siblings
        .iter()
        .filter_map(|id| flow_kind(model, *id))
        .find(|k| k.is_tandem())
    {
        sync::retype_flow(model, connection, group_kind)?;
        retyped.push(connection);
    }

    if !retyped.is_empty() {
        log::debug!(
            "Quelle {}: {} Verbindung(en) umtypisiert",
            source,
            retyped.len()
        );
        sync::relink_tandem_group(model, source)?;
    }
    Ok(retyped)
}

/// Nach dem Löschen eines typisierten Flusses: bleibt genau ein ausgehender
/// Fluss übrig, wird er wieder zum einfachen Fluss.
pub fn after_connection_deleted(
    model: &mut ProcessModel,
    source: ElementId,
    deleted_kind: FlowKind,
) -> EngineResult<Option<ElementId>> {
    if !deleted_kind.is_tandem() || !model.contains(source) {
        return Ok(None);
    }
    let remaining = model.outgoing_flows(source);
    let [last] = remaining.as_slice() else {
        return Ok(None);
    };
    if !flow_kind(model, *last).is_some_and(FlowKind::is_tandem) {
        return Ok(None);
    }
    sync::retype_flow(model, *last, FlowKind::Flow)?;
    sync::relink_tandem_group(model, source)?;
    log::debug!("Verbindung {} ist wieder ein einfacher Fluss", last);
    Ok(Some(*last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::Fixture;

    #[test]
    fn typed_flow_retypes_existing_plain_flows() {
        let mut fx = Fixture::with_system_limit();
        let op = fx.operator(300.0, 400.0);
        let a = fx.state(200.0, 150.0);
        let b = fx.state(400.0, 150.0);
        let plain = fx.flow(op, a, FlowKind::Flow);
        let typed = fx.flow(op, b, FlowKind::Parallel);

        let retyped = after_connection_created(&mut fx.model, typed).expect("ok");
        assert_eq!(retyped, vec![plain]);
        assert_eq!(flow_kind(&fx.model, plain), Some(FlowKind::Parallel));
        let group = &fx.model.get(plain).unwrap().as_flow().unwrap().in_tandem_with;
        assert!(group.contains(&typed));
        let group = &fx.model.get(typed).unwrap().as_flow().unwrap().in_tandem_with;
        assert!(group.contains(&plain));
    }

    #[test]
    fn other_typed_kind_is_replaced_too() {
        let mut fx = Fixture::with_system_limit();
        let op = fx.operator(300.0, 400.0);
        let a = fx.state(200.0, 150.0);
        let b = fx.state(400.0, 150.0);
        let c = fx.state(500.0, 150.0);
        let first = fx.flow(op, a, FlowKind::Alternative);
        let second = fx.flow(op, b, FlowKind::Alternative);
        let parallel = fx.flow(op, c, FlowKind::Parallel);

        after_connection_created(&mut fx.model, parallel).expect("ok");
        assert_eq!(flow_kind(&fx.model, first), Some(FlowKind::Parallel));
        assert_eq!(flow_kind(&fx.model, second), Some(FlowKind::Parallel));
    }

    #[test]
    fn plain_flow_adopts_group_kind() {
        let mut fx = Fixture::with_system_limit();
        let op = fx.operator(300.0, 400.0);
        let a = fx.state(200.0, 150.0);
        let b = fx.state(400.0, 150.0);
        let c = fx.state(500.0, 150.0);
        fx.flow(op, a, FlowKind::Alternative);
        fx.flow(op, b, FlowKind::Alternative);
        let plain = fx.flow(op, c, FlowKind::Flow);

        let retyped = after_connection_created(&mut fx.model, plain).expect("ok");
        assert_eq!(retyped, vec![plain]);
        assert_eq!(flow_kind(&fx.model, plain), Some(FlowKind::Alternative));
        let group = &fx.model.get(plain).unwrap().as_flow().unwrap().in_tandem_with;
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn group_of_one_reverts_to_plain_flow() {
        let mut fx = Fixture::with_system_limit();
        let op = fx.operator(300.0, 400.0);
        let a = fx.state(200.0, 150.0);
        let b = fx.state(400.0, 150.0);
        let first = fx.flow(op, a, FlowKind::Parallel);
        let second = fx.flow(op, b, FlowKind::Parallel);

        sync::delete_connection(&mut fx.model, second).expect("ok");
        assert_eq!(flow_kind(&fx.model, first), Some(FlowKind::Flow));
        let group = &fx.model.get(first).unwrap().as_flow().unwrap().in_tandem_with;
        assert!(group.is_empty());
    }

    #[test]
    fn usage_is_never_retyped() {
        let mut fx = Fixture::with_system_limit();
        let op = fx.operator(300.0, 400.0);
        let tr = fx.resource(900.0, 400.0);
        let usage = fx.usage(op, tr);
        assert!(after_connection_created(&mut fx.model, usage)
            .expect("ok")
            .is_empty());
    }
}
