//! Builds runtime [`Component`]s from their [`ComponentSpec`]s.
use rand::RngCore;
use tracing::debug;

use crate::error::{Error, Result};
use crate::shape::{Circle, Component, Ellipse, Polygon, PolygonGroup, Rect, Shape};
use crate::spec::{ComponentSpec, ComponentType};
use crate::style::StyleSampler;

/// Construct the component declared by `spec`.
///
/// Every pool the shape will sample is validated here, and construction-time choices
/// (vertex counts, group modes) are drawn from `rng` exactly once.
pub fn create_component(spec: &ComponentSpec, rng: &mut dyn RngCore) -> Result<Component> {
    let Ok(component_type) = spec.component_type.parse::<ComponentType>() else {
        return Err(Error::UnknownComponentType {
            id: spec.id.clone(),
            tag: spec.component_type.clone(),
        });
    };

    let sampler = StyleSampler::new(&spec.id, &spec.style);
    sampler.validate_fill()?;

    let shape = match component_type {
        ComponentType::Circle => Shape::Circle(Circle),
        ComponentType::Rect => Shape::Rect(Rect),
        ComponentType::Ellipse => Shape::Ellipse(Ellipse),
        ComponentType::Polygon => {
            Shape::Polygon(Polygon::from_options(&spec.id, &spec.vertex_count, rng)?)
        }
        ComponentType::PolygonGroup => {
            sampler.validate_stroke()?;
            Shape::PolygonGroup(PolygonGroup::from_options(
                &spec.id,
                &spec.vertex_count_options,
                &spec.vertex_elements,
                &spec.center_elements,
                rng,
            )?)
        }
    };

    debug!("Built component '{}' as {:?}.", spec.id, shape);
    Ok(Component::new(spec.id.clone(), spec.style.clone(), shape))
}
