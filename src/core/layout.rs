//! Layouter: berechnet die Wegpunkte von Flüssen und Nutzungen.
//!
//! - Nutzung: horizontal, an den zugewandten Seitenkanten angedockt
//! - Alternativer Fluss: gerade Linie von unten-mitte nach oben-mitte
//! - Fluss / paralleler Fluss: orthogonal mit einem horizontalen Segment

use super::{
    Bounds, BusinessObject, ElementId, ElementType, EngineError, EngineResult, FlowKind,
    ProcessModel,
};
use glam::Vec2;
use indexmap::IndexSet;

/// Route einer Nutzung zwischen zwei Shapes.
pub fn usage_route(source: &Bounds, target: &Bounds) -> Vec<Vec2> {
    let (start, end) = if source.center().x <= target.center().x {
        (source.right_mid(), target.left_mid())
    } else {
        (source.left_mid(), target.right_mid())
    };
    if start.y == end.y {
        return vec![start, end];
    }
    let mid_x = (start.x + end.x) * 0.5;
    vec![
        start,
        Vec2::new(mid_x, start.y),
        Vec2::new(mid_x, end.y),
        end,
    ]
}

/// Gerade Route eines alternativen Flusses.
pub fn straight_route(source: &Bounds, target: &Bounds) -> Vec<Vec2> {
    vec![source.bottom_mid(), target.top_mid()]
}

/// Orthogonale Route von unten-mitte nach oben-mitte.
///
/// `bend_y` überschreibt die Höhe des horizontalen Segments (Tandem-Partner).
pub fn orthogonal_route(source: &Bounds, target: &Bounds, bend_y: Option<f32>) -> Vec<Vec2> {
    let start = source.bottom_mid();
    let end = target.top_mid();
    if start.x == end.x {
        return vec![start, end];
    }
    let mid_y = bend_y.unwrap_or((start.y + end.y) * 0.5);
    vec![
        start,
        Vec2::new(start.x, mid_y),
        Vec2::new(end.x, mid_y),
        end,
    ]
}

/// Gemeinsame Knickhöhe einer parallelen Tandem-Gruppe aus der aktuellen
/// Geometrie: Mitte zwischen Unterkante der Quelle und der höchsten
/// Zieloberkante.
fn group_bend(
    model: &ProcessModel,
    source: &Bounds,
    members: impl Iterator<Item = ElementId>,
) -> Option<f32> {
    let nearest_top = members
        .filter_map(|id| model.get(id).and_then(BusinessObject::as_flow))
        .filter(|flow| flow.kind == FlowKind::Parallel)
        .filter_map(|flow| model.bounds(flow.target_ref))
        .map(|bounds| bounds.y)
        .reduce(f32::min)?;
    let bottom = source.max().y;
    Some((bottom + nearest_top.max(bottom)) * 0.5)
}

/// Berechnet die Route einer Verbindung aus der aktuellen Geometrie ihrer Endpunkte.
pub fn route(model: &ProcessModel, connection: ElementId) -> EngineResult<Vec<Vec2>> {
    let object = model.require(connection)?;
    let endpoint_bounds = |source: ElementId, target: ElementId| -> EngineResult<(Bounds, Bounds)> {
        Ok((model.require_bounds(source)?, model.require_bounds(target)?))
    };

    let points = match object {
        BusinessObject::Usage(usage) => {
            let (source, target) = endpoint_bounds(usage.source_ref, usage.target_ref)?;
            usage_route(&source, &target)
        }
        BusinessObject::Flow(flow) => {
            let (source, target) = endpoint_bounds(flow.source_ref, flow.target_ref)?;
            match flow.kind {
                FlowKind::Alternative => straight_route(&source, &target),
                FlowKind::Parallel if !flow.in_tandem_with.is_empty() => {
                    let members = flow
                        .in_tandem_with
                        .iter()
                        .copied()
                        .chain(std::iter::once(connection));
                    let bend = group_bend(model, &source, members);
                    orthogonal_route(&source, &target, bend)
                }
                FlowKind::Parallel => orthogonal_route(&source, &target, None),
                FlowKind::Flow => orthogonal_route(&source, &target, None),
            }
        }
        other => {
            return Err(EngineError::WrongType {
                id: connection,
                expected: ElementType::Flow,
                actual: other.element_type(),
            })
        }
    };
    Ok(points)
}

/// Berechnet und speichert die Wegpunkte einer Verbindung.
pub fn layout_connection(model: &mut ProcessModel, connection: ElementId) -> EngineResult<()> {
    let points = route(model, connection)?;
    model.set_waypoints(connection, points);
    Ok(())
}

/// Routet alle an einem Shape hängenden Verbindungen neu, bei parallelen
/// Flüssen die ganze Tandem-Gruppe.
pub fn relayout_attached(model: &mut ProcessModel, shape: ElementId) -> EngineResult<()> {
    let mut affected: IndexSet<ElementId> = IndexSet::new();
    for connection in model.connections_of(shape) {
        affected.insert(connection);
        if let Some(flow) = model.get(connection).and_then(BusinessObject::as_flow) {
            if flow.kind == FlowKind::Parallel {
                affected.extend(flow.in_tandem_with.iter().copied());
            }
        }
    }
    for connection in affected {
        layout_connection(model, connection)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const STATE: Bounds = Bounds::new(200.0, 100.0, 50.0, 50.0);
    const OPERATOR: Bounds = Bounds::new(300.0, 300.0, 150.0, 80.0);

    #[test]
    fn usage_docks_on_facing_edges_with_jog() {
        let resource = Bounds::new(800.0, 400.0, 150.0, 80.0);
        let points = usage_route(&OPERATOR, &resource);
        assert_eq!(points.len(), 4);
        assert_eq!(points[0], Vec2::new(450.0, 340.0));
        assert_eq!(points[3], Vec2::new(800.0, 440.0));
        assert_relative_eq!(points[1].x, 625.0);
        assert_relative_eq!(points[2].x, 625.0);

        let reversed = usage_route(&resource, &OPERATOR);
        assert_eq!(reversed[0], resource.left_mid());
        assert_eq!(reversed[3], OPERATOR.right_mid());
    }

    #[test]
    fn usage_on_same_height_is_straight() {
        let resource = Bounds::new(800.0, 300.0, 150.0, 80.0);
        assert_eq!(usage_route(&OPERATOR, &resource).len(), 2);
    }

    #[test]
    fn alternative_is_straight_bottom_to_top() {
        let points = straight_route(&STATE, &OPERATOR);
        assert_eq!(points, vec![Vec2::new(225.0, 150.0), Vec2::new(375.0, 300.0)]);
    }

    #[test]
    fn flow_bends_at_vertical_midpoint() {
        let points = orthogonal_route(&STATE, &OPERATOR, None);
        assert_eq!(points.len(), 4);
        assert_relative_eq!(points[1].y, 225.0);
        assert_eq!(points[1].x, 225.0);
        assert_eq!(points[2], Vec2::new(375.0, 225.0));
    }

    #[test]
    fn aligned_flow_has_two_points() {
        let state = Bounds::new(350.0, 100.0, 50.0, 50.0);
        assert_eq!(orthogonal_route(&state, &OPERATOR, None).len(), 2);
    }

    #[test]
    fn bend_override_is_used() {
        let points = orthogonal_route(&STATE, &OPERATOR, Some(180.0));
        assert_relative_eq!(points[1].y, 180.0);
        assert_relative_eq!(points[2].y, 180.0);
    }
}
