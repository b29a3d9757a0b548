//! Square shape.
use rand::RngCore;

use crate::canvas::{DrawnElement, Geometry, Paint};
use crate::error::Result;
use crate::geometry::Point;
use crate::shape::{DrawParams, ShapeDraw};
use crate::style::StyleSampler;

/// Square of side `size` centered on the draw center, rotated about that center.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect;

impl ShapeDraw for Rect {
    fn draw(
        &self,
        style: &StyleSampler<'_>,
        params: DrawParams,
        rng: &mut dyn RngCore,
    ) -> Result<DrawnElement> {
        let half = params.size / 2.0;
        let fill = style.fill(rng)?;
        let opacity = style.opacity(rng)?;
        let element = DrawnElement::new(
            Geometry::Rect {
                origin: params.center - Point::splat(half),
                width: params.size,
                height: params.size,
            },
            Paint::fill(fill, opacity),
        );
        Ok(element.rotated(params.rotation, params.center))
    }
}
