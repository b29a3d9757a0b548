//! Circle shape.
use rand::RngCore;

use crate::canvas::{DrawnElement, Geometry, Paint};
use crate::error::Result;
use crate::shape::{DrawParams, ShapeDraw};
use crate::style::StyleSampler;

/// Circle of diameter `size`. Rotation has no visible effect and is ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Circle;

impl ShapeDraw for Circle {
    fn draw(
        &self,
        style: &StyleSampler<'_>,
        params: DrawParams,
        rng: &mut dyn RngCore,
    ) -> Result<DrawnElement> {
        let fill = style.fill(rng)?;
        let opacity = style.opacity(rng)?;
        Ok(DrawnElement::new(
            Geometry::Circle {
                center: params.center,
                radius: params.size / 2.0,
            },
            Paint::fill(fill, opacity),
        ))
    }
}
