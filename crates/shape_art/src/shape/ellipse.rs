//! Ellipse shape.
use rand::RngCore;

use crate::canvas::{DrawnElement, Geometry, Paint};
use crate::error::Result;
use crate::shape::{DrawParams, ShapeDraw};
use crate::style::StyleSampler;

/// Ellipse with a fixed 2:1 aspect: radii `size / 2` and `size / 4`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ellipse;

impl ShapeDraw for Ellipse {
    fn draw(
        &self,
        style: &StyleSampler<'_>,
        params: DrawParams,
        rng: &mut dyn RngCore,
    ) -> Result<DrawnElement> {
        let fill = style.fill(rng)?;
        let opacity = style.opacity(rng)?;
        let element = DrawnElement::new(
            Geometry::Ellipse {
                center: params.center,
                rx: params.size / 2.0,
                ry: params.size / 4.0,
            },
            Paint::fill(fill, opacity),
        );
        Ok(element.rotated(params.rotation, params.center))
    }
}
