//! Gemeinsamer Testaufbau für die Core-Module.

use super::{
    factory, sync, Bounds, ElementId, ElementType, FlowKind, ProcessModel, ShapeRequest,
};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Wurzelprozess mit Systemgrenze (100,100,650,700)
pub(crate) struct Fixture {
    pub model: ProcessModel,
    pub options: EditorOptions,
    pub process: ElementId,
    pub system_limit: ElementId,
}

impl Fixture {
    pub fn with_system_limit() -> Self {
        let options = EditorOptions::default();
        let mut model = ProcessModel::new();
        let process = sync::ensure_root_process(&mut model, &options).expect("Wurzelprozess");
        let mut fx = Self {
            model,
            options,
            process,
            system_limit: 0,
        };
        fx.system_limit = fx.shape(ElementType::SystemLimit, 425.0, 450.0);
        fx
    }

    pub fn shape(&mut self, element_type: ElementType, cx: f32, cy: f32) -> ElementId {
        let (object, bounds) = factory::create_shape(
            &mut self.model,
            ShapeRequest::from_type(element_type, Vec2::new(cx, cy)),
            &self.options,
        )
        .expect("Shape");
        sync::attach_shape(&mut self.model, self.process, object, bounds).expect("einfügen")
    }

    pub fn state(&mut self, cx: f32, cy: f32) -> ElementId {
        self.shape(ElementType::Product, cx, cy)
    }

    pub fn operator(&mut self, cx: f32, cy: f32) -> ElementId {
        self.shape(ElementType::ProcessOperator, cx, cy)
    }

    pub fn resource(&mut self, cx: f32, cy: f32) -> ElementId {
        self.shape(ElementType::TechnicalResource, cx, cy)
    }

    pub fn flow(&mut self, source: ElementId, target: ElementId, kind: FlowKind) -> ElementId {
        let object =
            factory::new_connection(&mut self.model, 0, kind.element_type(), source, target);
        sync::attach_connection(&mut self.model, object).expect("verbinden")
    }

    pub fn usage(&mut self, source: ElementId, target: ElementId) -> ElementId {
        let object =
            factory::new_connection(&mut self.model, 0, ElementType::Usage, source, target);
        sync::attach_connection(&mut self.model, object).expect("verbinden")
    }

    pub fn bounds(&self, id: ElementId) -> Bounds {
        self.model.bounds(id).expect("Geometrie")
    }
}
