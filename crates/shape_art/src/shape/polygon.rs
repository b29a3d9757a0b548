//! Regular polygon shape.
use rand::RngCore;

use crate::canvas::{DrawnElement, Geometry, Paint};
use crate::error::{Error, Result};
use crate::geometry::regular_polygon_vertices;
use crate::shape::{DrawParams, ShapeDraw};
use crate::style::{pick_required, StyleSampler};

/// Largest vertex count a polygon or polygon group accepts.
pub const MAX_VERTEX_COUNT: usize = 360;

/// Regular polygon whose vertex count is fixed when the component is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Polygon {
    pub vertex_count: usize,
}

impl Polygon {
    /// Create a polygon with a known vertex count.
    pub fn new(vertex_count: usize) -> Result<Self> {
        check_vertex_count(vertex_count)?;
        Ok(Self { vertex_count })
    }

    /// Pick the vertex count from `options` once.
    pub fn from_options(id: &str, options: &[u32], rng: &mut dyn RngCore) -> Result<Self> {
        Ok(Self {
            vertex_count: resolve_vertex_count(id, "vertex_count", options, rng)?,
        })
    }
}

impl ShapeDraw for Polygon {
    fn draw(
        &self,
        style: &StyleSampler<'_>,
        params: DrawParams,
        rng: &mut dyn RngCore,
    ) -> Result<DrawnElement> {
        let points = regular_polygon_vertices(
            self.vertex_count,
            params.center,
            params.size,
            params.rotation,
        )?;
        let fill = style.fill(rng)?;
        let opacity = style.opacity(rng)?;
        Ok(DrawnElement::new(
            Geometry::Polygon { points },
            Paint::fill(fill, opacity),
        ))
    }
}

pub(crate) fn check_vertex_count(vertex_count: usize) -> Result<()> {
    if !(3..=MAX_VERTEX_COUNT).contains(&vertex_count) {
        return Err(Error::InvalidParameter(format!(
            "vertex count must be in 3..={MAX_VERTEX_COUNT}, got {vertex_count}"
        )));
    }
    Ok(())
}

/// Validate every option in a vertex count pool, then pick one.
pub(crate) fn resolve_vertex_count(
    id: &str,
    pool_name: &'static str,
    options: &[u32],
    rng: &mut dyn RngCore,
) -> Result<usize> {
    if let Some(bad) = options
        .iter()
        .find(|n| check_vertex_count(**n as usize).is_err())
    {
        return Err(Error::InvalidParameter(format!(
            "component '{id}': {pool_name} option {bad} must be in 3..={MAX_VERTEX_COUNT}"
        )));
    }
    Ok(*pick_required(id, pool_name, options, rng)? as usize)
}
