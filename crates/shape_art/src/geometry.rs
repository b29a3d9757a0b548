//! Geometry helpers for placing shapes on the canvas.
//!
//! Angles are in degrees and positive angles turn clockwise in canvas space (y grows
//! downwards), matching the SVG `rotate()` transform.
use glam::DVec2;

use crate::error::{Error, Result};

/// A 2D coordinate in canvas space.
pub type Point = DVec2;

/// Converts degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Rotates `point` about `center` by `angle_degrees`.
pub fn rotate(point: Point, angle_degrees: f64, center: Point) -> Point {
    let (sin, cos) = deg_to_rad(angle_degrees).sin_cos();
    let d = point - center;
    Point::new(
        center.x + d.x * cos - d.y * sin,
        center.y + d.x * sin + d.y * cos,
    )
}

/// Places `vertex_count` points evenly on a circle of diameter `size` around `center`.
///
/// The first vertex sits at `start_rotation_degrees`; each following vertex is offset by
/// `360 / vertex_count` degrees. The returned order traces the polygon outline.
pub fn regular_polygon_vertices(
    vertex_count: usize,
    center: Point,
    size: f64,
    start_rotation_degrees: f64,
) -> Result<Vec<Point>> {
    if vertex_count < 3 {
        return Err(Error::InvalidParameter(format!(
            "vertex count must be >= 3, got {vertex_count}"
        )));
    }

    let step = 360.0 / vertex_count as f64;
    let anchor = center + Point::new(size / 2.0, 0.0);
    Ok((0..vertex_count)
        .map(|i| step * i as f64 + start_rotation_degrees)
        .map(|angle| rotate(anchor, angle, center))
        .collect())
}
