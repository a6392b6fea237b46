//! Fachobjekte des FPB-Modells als geschlossene Varianten.
//!
//! Alle Querverweise (Quelle/Ziel, Parent, Dekomposition) sind IDs in die
//! Arena des [`ProcessModel`](super::ProcessModel), keine Besitzverhältnisse.

use super::{Characteristic, Identification};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// ID eines Elements in der Arena
pub type ElementId = u64;

/// Typ-Tag eines Elements (stabiler Diskriminator für Import/Export)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementType {
    /// Projekt (Wurzel-Aggregat)
    Project,
    /// Prozess (eine Ebene der Hierarchie)
    Process,
    /// Systemgrenze
    SystemLimit,
    /// Prozessoperator
    ProcessOperator,
    /// Technische Ressource
    TechnicalResource,
    /// Zustand: Produkt
    Product,
    /// Zustand: Energie
    Energy,
    /// Zustand: Information
    Information,
    /// Einfacher Fluss
    Flow,
    /// Alternativer Fluss (Tandem)
    AlternativeFlow,
    /// Paralleler Fluss (Tandem)
    ParallelFlow,
    /// Nutzung (Operator ↔ Ressource)
    Usage,
}

impl ElementType {
    /// Alle Typen in Deklarationsreihenfolge
    pub const ALL: [ElementType; 12] = [
        ElementType::Project,
        ElementType::Process,
        ElementType::SystemLimit,
        ElementType::ProcessOperator,
        ElementType::TechnicalResource,
        ElementType::Product,
        ElementType::Energy,
        ElementType::Information,
        ElementType::Flow,
        ElementType::AlternativeFlow,
        ElementType::ParallelFlow,
        ElementType::Usage,
    ];

    /// Stabiler Diskriminator, z.B. `fpb:Product`
    pub fn tag(self) -> &'static str {
        match self {
            ElementType::Project => "fpb:Project",
            ElementType::Process => "fpb:Process",
            ElementType::SystemLimit => "fpb:SystemLimit",
            ElementType::ProcessOperator => "fpb:ProcessOperator",
            ElementType::TechnicalResource => "fpb:TechnicalResource",
            ElementType::Product => "fpb:Product",
            ElementType::Energy => "fpb:Energy",
            ElementType::Information => "fpb:Information",
            ElementType::Flow => "fpb:Flow",
            ElementType::AlternativeFlow => "fpb:AlternativeFlow",
            ElementType::ParallelFlow => "fpb:ParallelFlow",
            ElementType::Usage => "fpb:Usage",
        }
    }

    /// Löst einen Diskriminator auf (`None` bei unbekanntem Tag).
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.tag() == tag)
    }

    /// Product, Energy oder Information
    pub fn is_state(self) -> bool {
        matches!(
            self,
            ElementType::Product | ElementType::Energy | ElementType::Information
        )
    }

    /// Flow, AlternativeFlow oder ParallelFlow
    pub fn is_flow(self) -> bool {
        matches!(
            self,
            ElementType::Flow | ElementType::AlternativeFlow | ElementType::ParallelFlow
        )
    }

    /// Jede Verbindungsart
    pub fn is_connection(self) -> bool {
        self.is_flow() || self == ElementType::Usage
    }

    /// Elemente mit eigener Geometrie auf der Zeichenfläche
    pub fn is_shape(self) -> bool {
        self.is_state()
            || matches!(
                self,
                ElementType::SystemLimit
                    | ElementType::ProcessOperator
                    | ElementType::TechnicalResource
            )
    }

    /// Elemente, die innerhalb der Systemgrenze liegen müssen
    pub fn lives_inside_system_limit(self) -> bool {
        self.is_state() || self == ElementType::ProcessOperator
    }
}

/// Art eines Zustands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateKind {
    /// Produkt
    Product,
    /// Energie
    Energy,
    /// Information
    Information,
}

impl StateKind {
    /// Zugehöriges Typ-Tag
    pub fn element_type(self) -> ElementType {
        match self {
            StateKind::Product => ElementType::Product,
            StateKind::Energy => ElementType::Energy,
            StateKind::Information => ElementType::Information,
        }
    }
}

/// Art eines Flusses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FlowKind {
    /// Einfacher Fluss
    #[default]
    Flow,
    /// Alternativer Fluss
    Alternative,
    /// Paralleler Fluss
    Parallel,
}

impl FlowKind {
    /// Zugehöriges Typ-Tag
    pub fn element_type(self) -> ElementType {
        match self {
            FlowKind::Flow => ElementType::Flow,
            FlowKind::Alternative => ElementType::AlternativeFlow,
            FlowKind::Parallel => ElementType::ParallelFlow,
        }
    }

    /// Alternative und Parallel bilden Tandem-Gruppen
    pub fn is_tandem(self) -> bool {
        !matches!(self, FlowKind::Flow)
    }
}

/// Rolle eines gespiegelten Randzustands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundaryRole {
    /// Speist den dekomponierten Operator
    Incoming,
    /// Wird vom dekomponierten Operator erzeugt
    Outgoing,
}

/// Markierung eines Randzustands: Spiegel eines Zustands der Nachbarebene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boundary {
    /// Eingangs- oder Ausgangszustand
    pub role: BoundaryRole,
    /// Gespiegelter Zustand in der Nachbarebene
    pub original: ElementId,
}

/// Projekt (höchstens eines pro Sitzung)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Element-ID
    pub id: ElementId,
    /// Projektname
    pub name: String,
    /// Ziel-Namespace für den Export
    pub target_namespace: String,
    /// Oberster Prozess
    pub entry_point: Option<ElementId>,
}

/// Prozess: eine Ebene der Hierarchie
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Process {
    /// Element-ID
    pub id: ElementId,
    /// Direkte Kinder: Systemgrenze, technische Ressourcen, Nutzungen
    pub elements_container: IndexSet<ElementId>,
    /// Alle Zustände dieser Ebene
    pub consists_of_states: IndexSet<ElementId>,
    /// Alle Prozessoperatoren dieser Ebene
    pub consists_of_process_operator: IndexSet<ElementId>,
    /// Dekomponierte Unterprozesse
    pub consists_of_processes: IndexSet<ElementId>,
    /// Die Systemgrenze dieser Ebene
    pub consists_of_system_limit: Option<ElementId>,
    /// Operator, den dieser Prozess verfeinert (`None` für Wurzelprozesse)
    pub is_decomposed_process_operator: Option<ElementId>,
    /// Projekt (Wurzelprozess) oder übergeordneter Prozess
    pub parent: Option<ElementId>,
}

/// Systemgrenze
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SystemLimit {
    /// Element-ID
    pub id: ElementId,
    /// Anzeigename
    pub name: String,
    /// Zustände, Operatoren und deren Flüsse innerhalb der Grenze
    pub elements_container: IndexSet<ElementId>,
}

/// Gemeinsame Felder verbindbarer Objekte
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Connectable {
    /// Identifikation
    pub identification: Identification,
    /// Merkmale
    pub characteristics: Vec<Characteristic>,
    /// Zugeordnete Partner (über Fluss bzw. Nutzung)
    pub is_assigned_to: IndexSet<ElementId>,
    /// Eingehende Verbindungen
    pub incoming: IndexSet<ElementId>,
    /// Ausgehende Verbindungen
    pub outgoing: IndexSet<ElementId>,
}

/// Prozessoperator
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProcessOperator {
    /// Element-ID
    pub id: ElementId,
    /// Verbindbare Felder
    pub core: Connectable,
    /// Verfeinernder Unterprozess
    pub decomposed_view: Option<ElementId>,
}

/// Technische Ressource
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TechnicalResource {
    /// Element-ID
    pub id: ElementId,
    /// Verbindbare Felder
    pub core: Connectable,
}

/// Zustand (Produkt, Energie, Information)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Element-ID
    pub id: ElementId,
    /// Art des Zustands
    pub kind: StateKind,
    /// Verbindbare Felder
    pub core: Connectable,
    /// Gesetzt bei gespiegelten Randzuständen
    pub boundary: Option<Boundary>,
}

/// Fluss zwischen Zustand und Operator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    /// Element-ID
    pub id: ElementId,
    /// Flussart
    pub kind: FlowKind,
    /// Quelle
    pub source_ref: ElementId,
    /// Ziel
    pub target_ref: ElementId,
    /// Geschwister derselben Tandem-Gruppe
    pub in_tandem_with: IndexSet<ElementId>,
}

/// Nutzung zwischen Operator und technischer Ressource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    /// Element-ID
    pub id: ElementId,
    /// Quelle
    pub source_ref: ElementId,
    /// Ziel
    pub target_ref: ElementId,
}

/// Ein Fachobjekt der Arena
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BusinessObject {
    /// Projekt
    Project(Project),
    /// Prozess
    Process(Process),
    /// Systemgrenze
    SystemLimit(SystemLimit),
    /// Prozessoperator
    ProcessOperator(ProcessOperator),
    /// Technische Ressource
    TechnicalResource(TechnicalResource),
    /// Zustand
    State(State),
    /// Fluss (alle drei Arten)
    Flow(Flow),
    /// Nutzung
    Usage(Usage),
}

impl BusinessObject {
    /// Element-ID
    pub fn id(&self) -> ElementId {
        match self {
            BusinessObject::Project(p) => p.id,
            BusinessObject::Process(p) => p.id,
            BusinessObject::SystemLimit(s) => s.id,
            BusinessObject::ProcessOperator(o) => o.id,
            BusinessObject::TechnicalResource(r) => r.id,
            BusinessObject::State(s) => s.id,
            BusinessObject::Flow(f) => f.id,
            BusinessObject::Usage(u) => u.id,
        }
    }

    /// Setzt die Element-ID (nur vor dem Einfügen in die Arena sinnvoll).
    pub(crate) fn set_id(&mut self, id: ElementId) {
        match self {
            BusinessObject::Project(p) => p.id = id,
            BusinessObject::Process(p) => p.id = id,
            BusinessObject::SystemLimit(s) => s.id = id,
            BusinessObject::ProcessOperator(o) => o.id = id,
            BusinessObject::TechnicalResource(r) => r.id = id,
            BusinessObject::State(s) => s.id = id,
            BusinessObject::Flow(f) => f.id = id,
            BusinessObject::Usage(u) => u.id = id,
        }
    }

    /// Typ-Tag
    pub fn element_type(&self) -> ElementType {
        match self {
            BusinessObject::Project(_) => ElementType::Project,
            BusinessObject::Process(_) => ElementType::Process,
            BusinessObject::SystemLimit(_) => ElementType::SystemLimit,
            BusinessObject::ProcessOperator(_) => ElementType::ProcessOperator,
            BusinessObject::TechnicalResource(_) => ElementType::TechnicalResource,
            BusinessObject::State(s) => s.kind.element_type(),
            BusinessObject::Flow(f) => f.kind.element_type(),
            BusinessObject::Usage(_) => ElementType::Usage,
        }
    }

    /// Verbindbare Felder (Operator, Ressource, Zustand)
    pub fn connectable(&self) -> Option<&Connectable> {
        match self {
            BusinessObject::ProcessOperator(o) => Some(&o.core),
            BusinessObject::TechnicalResource(r) => Some(&r.core),
            BusinessObject::State(s) => Some(&s.core),
            _ => None,
        }
    }

    /// Verbindbare Felder, veränderlich
    pub fn connectable_mut(&mut self) -> Option<&mut Connectable> {
        match self {
            BusinessObject::ProcessOperator(o) => Some(&mut o.core),
            BusinessObject::TechnicalResource(r) => Some(&mut r.core),
            BusinessObject::State(s) => Some(&mut s.core),
            _ => None,
        }
    }

    /// Quelle und Ziel einer Verbindung
    pub fn endpoints(&self) -> Option<(ElementId, ElementId)> {
        match self {
            BusinessObject::Flow(f) => Some((f.source_ref, f.target_ref)),
            BusinessObject::Usage(u) => Some((u.source_ref, u.target_ref)),
            _ => None,
        }
    }

    /// Prozess-Sicht
    pub fn as_process(&self) -> Option<&Process> {
        match self {
            BusinessObject::Process(p) => Some(p),
            _ => None,
        }
    }

    /// Prozess-Sicht, veränderlich
    pub fn as_process_mut(&mut self) -> Option<&mut Process> {
        match self {
            BusinessObject::Process(p) => Some(p),
            _ => None,
        }
    }

    /// Systemgrenzen-Sicht
    pub fn as_system_limit(&self) -> Option<&SystemLimit> {
        match self {
            BusinessObject::SystemLimit(s) => Some(s),
            _ => None,
        }
    }

    /// Systemgrenzen-Sicht, veränderlich
    pub fn as_system_limit_mut(&mut self) -> Option<&mut SystemLimit> {
        match self {
            BusinessObject::SystemLimit(s) => Some(s),
            _ => None,
        }
    }

    /// Operator-Sicht
    pub fn as_operator(&self) -> Option<&ProcessOperator> {
        match self {
            BusinessObject::ProcessOperator(o) => Some(o),
            _ => None,
        }
    }

    /// Operator-Sicht, veränderlich
    pub fn as_operator_mut(&mut self) -> Option<&mut ProcessOperator> {
        match self {
            BusinessObject::ProcessOperator(o) => Some(o),
            _ => None,
        }
    }

    /// Zustands-Sicht
    pub fn as_state(&self) -> Option<&State> {
        match self {
            BusinessObject::State(s) => Some(s),
            _ => None,
        }
    }

    /// Zustands-Sicht, veränderlich
    pub fn as_state_mut(&mut self) -> Option<&mut State> {
        match self {
            BusinessObject::State(s) => Some(s),
            _ => None,
        }
    }

    /// Fluss-Sicht
    pub fn as_flow(&self) -> Option<&Flow> {
        match self {
            BusinessObject::Flow(f) => Some(f),
            _ => None,
        }
    }

    /// Fluss-Sicht, veränderlich
    pub fn as_flow_mut(&mut self) -> Option<&mut Flow> {
        match self {
            BusinessObject::Flow(f) => Some(f),
            _ => None,
        }
    }

    /// Projekt-Sicht, veränderlich
    pub fn as_project_mut(&mut self) -> Option<&mut Project> {
        match self {
            BusinessObject::Project(p) => Some(p),
            _ => None,
        }
    }
}
