//! Shape variants and the runtime [`Component`] that wraps them.
//!
//! Each variant lives in its own module and implements [`ShapeDraw`]. Values a variant
//! fixes at construction (vertex counts, group modes) are fields of the variant struct;
//! everything else is sampled from the component style on every draw.
use rand::RngCore;

use crate::canvas::DrawnElement;
use crate::error::Result;
use crate::geometry::Point;
use crate::spec::{ComponentId, ComponentType, StyleSpec};
use crate::style::StyleSampler;

pub mod circle;
pub mod ellipse;
pub mod factory;
pub mod polygon;
pub mod polygon_group;
pub mod rect;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use factory::create_component;
pub use polygon::{Polygon, MAX_VERTEX_COUNT};
pub use polygon_group::{PolygonGroup, VertexElements};
pub use rect::Rect;

/// Per-draw placement of a component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawParams {
    pub center: Point,
    pub size: f64,
    pub rotation: f64,
}

impl DrawParams {
    pub fn new(center: Point, size: f64, rotation: f64) -> Self {
        Self {
            center,
            size,
            rotation,
        }
    }
}

/// Trait for drawing one shape variant.
pub trait ShapeDraw {
    fn draw(
        &self,
        style: &StyleSampler<'_>,
        params: DrawParams,
        rng: &mut dyn RngCore,
    ) -> Result<DrawnElement>;
}

/// The closed set of shape variants.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rect(Rect),
    Ellipse(Ellipse),
    Polygon(Polygon),
    PolygonGroup(PolygonGroup),
}

impl Shape {
    pub fn component_type(&self) -> ComponentType {
        match self {
            Shape::Circle(_) => ComponentType::Circle,
            Shape::Rect(_) => ComponentType::Rect,
            Shape::Ellipse(_) => ComponentType::Ellipse,
            Shape::Polygon(_) => ComponentType::Polygon,
            Shape::PolygonGroup(_) => ComponentType::PolygonGroup,
        }
    }
}

impl ShapeDraw for Shape {
    fn draw(
        &self,
        style: &StyleSampler<'_>,
        params: DrawParams,
        rng: &mut dyn RngCore,
    ) -> Result<DrawnElement> {
        match self {
            Shape::Circle(s) => s.draw(style, params, rng),
            Shape::Rect(s) => s.draw(style, params, rng),
            Shape::Ellipse(s) => s.draw(style, params, rng),
            Shape::Polygon(s) => s.draw(style, params, rng),
            Shape::PolygonGroup(s) => s.draw(style, params, rng),
        }
    }
}

/// A constructed component: its id, style pools and resolved shape.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct Component {
    pub id: ComponentId,
    pub style: StyleSpec,
    pub shape: Shape,
}

impl Component {
    pub fn new(id: impl Into<ComponentId>, style: StyleSpec, shape: Shape) -> Self {
        Self {
            id: id.into(),
            style,
            shape,
        }
    }

    pub fn sampler(&self) -> StyleSampler<'_> {
        StyleSampler::new(&self.id, &self.style)
    }

    pub fn component_type(&self) -> ComponentType {
        self.shape.component_type()
    }

    /// Draw the component with the given placement.
    pub fn draw(
        &self,
        center: Point,
        size: f64,
        rotation: f64,
        rng: &mut dyn RngCore,
    ) -> Result<DrawnElement> {
        let params = DrawParams::new(center, size, rotation);
        self.shape.draw(&self.sampler(), params, rng)
    }
}
