//! Rule Engine: reine Prüffunktionen vor jeder strukturellen Änderung.
//!
//! Jede Funktion liefert `Ok` oder eine [`Rejection`], die das betroffene
//! Elementpaar und eine Bildschirmposition für den Hinweis-Tooltip trägt.
//! Keine Funktion verändert das Modell.

use super::{Bounds, BusinessObject, ElementId, ElementType, FlowKind, ProcessModel};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Art der abgelehnten Operation (bestimmt das Benachrichtigungs-Topic)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectionKind {
    /// Shape anlegen
    IllegalCreate,
    /// Shapes verschieben
    IllegalMove,
    /// Verbindung anlegen oder umhängen
    IllegalConnect,
    /// Shape skalieren
    IllegalResize,
    /// Elemente löschen
    IllegalDelete,
    /// Operator dekomponieren
    IllegalDecompose,
}

impl RejectionKind {
    /// Topic auf dem Benachrichtigungs-Bus
    pub fn topic(self) -> &'static str {
        match self {
            RejectionKind::IllegalCreate => "illegalCreate",
            RejectionKind::IllegalMove => "illegalMove",
            RejectionKind::IllegalConnect => "illegalConnect",
            RejectionKind::IllegalResize => "illegalResize",
            RejectionKind::IllegalDelete => "illegalDelete",
            RejectionKind::IllegalDecompose => "illegalDecompose",
        }
    }
}

/// Grund einer Ablehnung
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// Im aktiven Prozess gibt es keine Systemgrenze
    NoSystemLimit,
    /// Zustand/Operator ragt aus der Systemgrenze
    OutsideSystemLimit,
    /// Prozess hat bereits eine Systemgrenze
    SecondSystemLimit,
    /// Systemgrenze würde eine technische Ressource überdecken
    OverlapsResource,
    /// Technische Ressource läge in Systemgrenze, Zustand oder Operator
    InsideShape,
    /// Nur Systemgrenzen dürfen skaliert werden
    NotResizable,
    /// Neue Grenze schneidet Zustände oder Operatoren ab
    CutsContent,
    /// Element würde seinen Parent verlassen
    ParentChanged,
    /// Typpaarung ist nicht erlaubt
    IllegalPairing,
    /// Endpunkte sind bereits verbunden
    AlreadyConnected,
    /// Ziel ist ein Label
    TargetIsLabel,
    /// Quelle und Ziel sind identisch
    SelfLoop,
    /// Endpunkte liegen in verschiedenen Prozessebenen
    DifferentProcess,
    /// Systemgrenze ist geschützt
    ProtectedSystemLimit,
    /// Operator braucht eingehenden und ausgehenden Fluss
    MissingFlows,
    /// Element ist unbekannt oder hat den falschen Typ
    InvalidElement,
}

/// Abgelehnte Operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rejection {
    /// Art der Operation
    pub kind: RejectionKind,
    /// Grund
    pub reason: RejectReason,
    /// Typ des betroffenen Elements
    pub subject_type: Option<ElementType>,
    /// Betroffenes Element (bei neuen Shapes noch ohne ID)
    pub subject: Option<ElementId>,
    /// Konfliktpartner (Systemgrenze, Ressource, Verbindungsziel, …)
    pub other: Option<ElementId>,
    /// Position für den Tooltip
    pub position: Vec2,
}

impl Rejection {
    fn new(kind: RejectionKind, reason: RejectReason, position: Vec2) -> Self {
        Self {
            kind,
            reason,
            subject_type: None,
            subject: None,
            other: None,
            position,
        }
    }

    fn subject(mut self, id: Option<ElementId>, ty: Option<ElementType>) -> Self {
        self.subject = id;
        self.subject_type = ty;
        self
    }

    fn other(mut self, other: ElementId) -> Self {
        self.other = Some(other);
        self
    }
}

/// Flusstyp-Vorgabe des Verbinden-Werkzeugs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlowHint {
    /// Einfacher Fluss
    #[default]
    Plain,
    /// Paralleler Fluss
    Parallel,
    /// Alternativer Fluss
    Alternative,
}

impl FlowHint {
    /// Zugehörige Flussart
    pub fn flow_kind(self) -> FlowKind {
        match self {
            FlowHint::Plain => FlowKind::Flow,
            FlowHint::Parallel => FlowKind::Parallel,
            FlowHint::Alternative => FlowKind::Alternative,
        }
    }

    /// Vorgabe, die wieder `kind` ergibt (beim Umhängen)
    pub fn from_kind(kind: FlowKind) -> Self {
        match kind {
            FlowKind::Flow => FlowHint::Plain,
            FlowKind::Parallel => FlowHint::Parallel,
            FlowKind::Alternative => FlowHint::Alternative,
        }
    }
}

/// Ziel einer Verbindungsgeste
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectTarget {
    /// Ein Shape
    Element(ElementId),
    /// Das externe Label eines Shapes
    Label(ElementId),
}

fn center_of(model: &ProcessModel, id: ElementId) -> Vec2 {
    model.bounds(id).map(|b| b.center()).unwrap_or(Vec2::ZERO)
}

/// Platzierung eines neuen Shapes im Prozess `process` prüfen.
pub fn can_create(
    model: &ProcessModel,
    process: Option<ElementId>,
    element_type: ElementType,
    bounds: Bounds,
) -> Result<(), Rejection> {
    let position = bounds.center();
    let reject = |reason| {
        Rejection::new(RejectionKind::IllegalCreate, reason, position)
            .subject(None, Some(element_type))
    };
    let system_limit = process.and_then(|p| model.system_limit_of(p).ok());

    match element_type {
        ElementType::SystemLimit => {
            if let Some(sl) = system_limit {
                return Err(reject(RejectReason::SecondSystemLimit).other(sl));
            }
            let resources = process.map(|p| model.resources_of(p)).unwrap_or_default();
            if let Some(tr) = first_overlap(model, &resources, &bounds) {
                return Err(reject(RejectReason::OverlapsResource).other(tr));
            }
            Ok(())
        }
        ElementType::Product
        | ElementType::Energy
        | ElementType::Information
        | ElementType::ProcessOperator => {
            let Some(sl) = system_limit else {
                return Err(reject(RejectReason::NoSystemLimit));
            };
            let inside = model.bounds(sl).is_some_and(|sl_bounds| sl_bounds.contains(&bounds));
            if inside {
                Ok(())
            } else {
                Err(reject(RejectReason::OutsideSystemLimit).other(sl))
            }
        }
        ElementType::TechnicalResource => {
            let Some(sl) = system_limit else {
                return Ok(());
            };
            let mut blockers = vec![sl];
            blockers.extend(model.shapes_inside(sl));
            match first_overlap(model, &blockers, &bounds) {
                Some(other) => Err(reject(RejectReason::InsideShape).other(other)),
                None => Ok(()),
            }
        }
        ElementType::Project
        | ElementType::Process
        | ElementType::Flow
        | ElementType::AlternativeFlow
        | ElementType::ParallelFlow
        | ElementType::Usage => Err(reject(RejectReason::InvalidElement)),
    }
}

fn first_overlap(
    model: &ProcessModel,
    candidates: &[ElementId],
    bounds: &Bounds,
) -> Option<ElementId> {
    candidates
        .iter()
        .copied()
        .find(|id| model.bounds(*id).is_some_and(|b| b.intersects(bounds)))
}

/// Verbindung prüfen und den resultierenden Verbindungstyp bestimmen.
///
/// `ignore` nimmt eine bestehende Verbindung von der Duplikatprüfung aus
/// (beim Umhängen ihrer Endpunkte).
pub fn can_connect(
    model: &ProcessModel,
    source: ElementId,
    target: ConnectTarget,
    hint: FlowHint,
    ignore: Option<ElementId>,
) -> Result<ElementType, Rejection> {
    let (target, is_label) = match target {
        ConnectTarget::Element(id) => (id, false),
        ConnectTarget::Label(id) => (id, true),
    };
    let position = center_of(model, target);
    let reject = |reason| {
        Rejection::new(RejectionKind::IllegalConnect, reason, position)
            .subject(Some(source), model.element_type(source))
            .other(target)
    };

    if is_label {
        return Err(reject(RejectReason::TargetIsLabel));
    }
    if source == target {
        return Err(reject(RejectReason::SelfLoop));
    }
    let (Some(source_type), Some(target_type)) =
        (model.element_type(source), model.element_type(target))
    else {
        return Err(reject(RejectReason::InvalidElement));
    };

    let is_operator = |ty: ElementType| ty == ElementType::ProcessOperator;
    let connection_type = if (source_type.is_state() && is_operator(target_type))
        || (is_operator(source_type) && target_type.is_state())
    {
        hint.flow_kind().element_type()
    } else if (is_operator(source_type) && target_type == ElementType::TechnicalResource)
        || (source_type == ElementType::TechnicalResource && is_operator(target_type))
    {
        ElementType::Usage
    } else {
        return Err(reject(RejectReason::IllegalPairing));
    };

    if model.owning_process(source) != model.owning_process(target) {
        return Err(reject(RejectReason::DifferentProcess));
    }

    let duplicate = [
        model.find_connection(source, target),
        model.find_connection(target, source),
    ]
    .into_iter()
    .flatten()
    .any(|existing| Some(existing) != ignore);
    if duplicate {
        return Err(reject(RejectReason::AlreadyConnected));
    }

    Ok(connection_type)
}

/// Skalierung prüfen: nur Systemgrenzen, ohne Inhalt abzuschneiden und ohne
/// technische Ressourcen zu überdecken.
pub fn can_resize(
    model: &ProcessModel,
    id: ElementId,
    new_bounds: Bounds,
) -> Result<(), Rejection> {
    let element_type = model.element_type(id);
    let reject = |reason| {
        Rejection::new(RejectionKind::IllegalResize, reason, new_bounds.center())
            .subject(Some(id), element_type)
    };

    if element_type != Some(ElementType::SystemLimit) {
        return Err(reject(RejectReason::NotResizable));
    }
    for inner in model.shapes_inside(id) {
        if !model.bounds(inner).is_some_and(|b| new_bounds.contains(&b)) {
            return Err(reject(RejectReason::CutsContent).other(inner));
        }
    }
    let resources = model
        .owning_process(id)
        .map(|p| model.resources_of(p))
        .unwrap_or_default();
    if let Some(tr) = first_overlap(model, &resources, &new_bounds) {
        return Err(reject(RejectReason::OverlapsResource).other(tr));
    }
    Ok(())
}

/// Shapes, die bei einer Verschiebung von `ids` tatsächlich mitwandern
/// (Inhalte einer Systemgrenze wandern mit ihr).
pub fn moved_shapes(model: &ProcessModel, ids: &[ElementId]) -> Vec<ElementId> {
    let mut result: Vec<ElementId> = Vec::new();
    for &id in ids {
        let Some(ty) = model.element_type(id) else {
            continue;
        };
        if !ty.is_shape() {
            continue;
        }
        if !result.contains(&id) {
            result.push(id);
        }
        if ty == ElementType::SystemLimit {
            for inner in model.shapes_inside(id) {
                if !result.contains(&inner) {
                    result.push(inner);
                }
            }
        }
    }
    result
}

/// Verschiebung der Shapes `ids` um `delta` prüfen.
pub fn can_move(model: &ProcessModel, ids: &[ElementId], delta: Vec2) -> Result<(), Rejection> {
    let moved = moved_shapes(model, ids);
    let new_bounds: HashMap<ElementId, Bounds> = moved
        .iter()
        .filter_map(|id| model.bounds(*id).map(|b| (*id, b.translated(delta))))
        .collect();
    let bounds_after = |id: ElementId| new_bounds.get(&id).copied().or_else(|| model.bounds(id));

    for &id in &moved {
        let Some(ty) = model.element_type(id) else {
            continue;
        };
        let Some(candidate) = new_bounds.get(&id).copied() else {
            continue;
        };
        let reject = |reason| {
            Rejection::new(RejectionKind::IllegalMove, reason, candidate.center())
                .subject(Some(id), Some(ty))
        };
        let process = model.owning_process(id);
        let system_limit = process.and_then(|p| model.system_limit_of(p).ok());

        if ty.lives_inside_system_limit() {
            let Some(sl) = system_limit else {
                return Err(reject(RejectReason::NoSystemLimit));
            };
            if !bounds_after(sl).is_some_and(|b| b.contains(&candidate)) {
                return Err(reject(RejectReason::ParentChanged).other(sl));
            }
        } else if ty == ElementType::SystemLimit {
            let resources = process.map(|p| model.resources_of(p)).unwrap_or_default();
            for tr in resources {
                if bounds_after(tr).is_some_and(|b| b.intersects(&candidate)) {
                    return Err(reject(RejectReason::OverlapsResource).other(tr));
                }
            }
        } else if ty == ElementType::TechnicalResource {
            if let Some(sl) = system_limit {
                let mut blockers = vec![sl];
                blockers.extend(model.shapes_inside(sl));
                for other in blockers {
                    if bounds_after(other).is_some_and(|b| b.intersects(&candidate)) {
                        return Err(reject(RejectReason::InsideShape).other(other));
                    }
                }
            }
        }
    }
    Ok(())
}

/// Löschen prüfen: Systemgrenzen bleiben bestehen, solange ihr Prozess existiert.
pub fn can_delete(model: &ProcessModel, ids: &[ElementId]) -> Result<(), Rejection> {
    for &id in ids {
        match model.get(id) {
            Some(BusinessObject::SystemLimit(_)) => {
                return Err(Rejection::new(
                    RejectionKind::IllegalDelete,
                    RejectReason::ProtectedSystemLimit,
                    center_of(model, id),
                )
                .subject(Some(id), Some(ElementType::SystemLimit)));
            }
            Some(BusinessObject::Process(_)) | Some(BusinessObject::Project(_)) => {
                return Err(Rejection::new(
                    RejectionKind::IllegalDelete,
                    RejectReason::InvalidElement,
                    Vec2::ZERO,
                )
                .subject(Some(id), model.element_type(id)));
            }
            _ => {}
        }
    }
    Ok(())
}

/// Dekomposition prüfen: Operator mit mindestens einem eingehenden und einem
/// ausgehenden Fluss (Nutzungen zählen nicht).
pub fn can_decompose(model: &ProcessModel, operator: ElementId) -> Result<(), Rejection> {
    let reject = |reason| {
        Rejection::new(
            RejectionKind::IllegalDecompose,
            reason,
            center_of(model, operator),
        )
        .subject(Some(operator), model.element_type(operator))
    };
    if model.element_type(operator) != Some(ElementType::ProcessOperator) {
        return Err(reject(RejectReason::InvalidElement));
    }
    if model.incoming_flows(operator).is_empty() || model.outgoing_flows(operator).is_empty() {
        return Err(reject(RejectReason::MissingFlows));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
