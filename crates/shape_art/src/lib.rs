#![forbid(unsafe_code)]
//! shape_art: procedural shape composition with randomized styling.
//!
//! Modules:
//! - geometry: point rotation and regular polygon vertices
//! - spec: scene, component and style definitions (serde support behind the `serde` feature)
//! - style: uniform sampling from style pools
//! - shape: shape variants, runtime components and the component factory
//! - canvas: drawn elements and the append-only canvas
//! - scene: runner that builds components and draws them in order, with events
//!
//! Serializing a [`canvas::Canvas`] to a file is left to the caller.
pub mod canvas;
pub mod error;
pub mod geometry;
pub mod scene;
pub mod shape;
pub mod spec;
pub mod style;

/// Convenient re-exports for common types. Import with `use shape_art::prelude::*;`.
pub mod prelude {
    pub use crate::canvas::{Canvas, DrawnElement, Geometry, Paint, Rotation};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{deg_to_rad, regular_polygon_vertices, rotate, Point};
    pub use crate::scene::{
        render_scene, EventSink, FnSink, SceneEvent, SceneEventKind, SceneRunner, VecSink,
    };
    pub use crate::shape::{
        create_component, Circle, Component, DrawParams, Ellipse, Polygon, PolygonGroup, Rect,
        Shape, ShapeDraw, VertexElements,
    };
    pub use crate::spec::{
        CanvasSize, ComponentId, ComponentSpec, ComponentType, SceneSpec, StyleSpec,
        DEFAULT_OUTPUT_PATH,
    };
    pub use crate::style::{pick, Stroke, StyleSampler};
}
