//! Specification types for authoring scenes: canvas size, component definitions and their
//! style pools.
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub type ComponentId = String;

pub const DEFAULT_OUTPUT_PATH: &str = "output.svg";

/// Candidate values for every randomized visual attribute of a component.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleSpec {
    pub fill_options: Vec<String>,
    pub opacity_options: Vec<f64>,
    pub size_options: Vec<f64>,
    pub rotation_options: Vec<f64>,
    /// Stroke colors; only sampled by stroked shapes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stroke: Vec<String>,
    /// Stroke widths; only sampled by stroked shapes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stroke_width: Vec<f64>,
}

impl StyleSpec {
    /// Create a style with single-value fill, opacity, size and rotation pools.
    pub fn solid(fill: impl Into<String>, opacity: f64, size: f64, rotation: f64) -> Self {
        Self {
            fill_options: vec![fill.into()],
            opacity_options: vec![opacity],
            size_options: vec![size],
            rotation_options: vec![rotation],
            ..Default::default()
        }
    }

    /// Set the stroke color and stroke width pools.
    pub fn with_stroke(mut self, stroke: Vec<String>, stroke_width: Vec<f64>) -> Self {
        self.stroke = stroke;
        self.stroke_width = stroke_width;
        self
    }
}

/// The closed set of shape types a component can declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentType {
    Circle,
    Rect,
    Ellipse,
    Polygon,
    PolygonGroup,
}

impl ComponentType {
    pub const ALL: [ComponentType; 5] = [
        ComponentType::Circle,
        ComponentType::Rect,
        ComponentType::Ellipse,
        ComponentType::Polygon,
        ComponentType::PolygonGroup,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentType::Circle => "Circle",
            ComponentType::Rect => "Rect",
            ComponentType::Ellipse => "Ellipse",
            ComponentType::Polygon => "Polygon",
            ComponentType::PolygonGroup => "PolygonGroup",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|t| t.as_str() == s).ok_or(())
    }
}

/// A named, typed shape definition.
///
/// The type tag is kept as written so that an unrecognized tag is reported by the
/// component factory together with the component id.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ComponentSpec {
    pub id: ComponentId,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub component_type: String,
    pub style: StyleSpec,
    /// Vertex count pool for `Polygon`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub vertex_count: Vec<u32>,
    /// Vertex count pool for `PolygonGroup`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub vertex_count_options: Vec<u32>,
    /// Vertex element modes for `PolygonGroup`; `"circle"` or anything else for polygons.
    #[cfg_attr(feature = "serde", serde(default))]
    pub vertex_elements: Vec<String>,
    /// Whether a `PolygonGroup` outlines its outer ring.
    #[cfg_attr(feature = "serde", serde(default))]
    pub center_elements: Vec<bool>,
}

impl ComponentSpec {
    pub fn new(
        id: impl Into<ComponentId>,
        component_type: impl Into<String>,
        style: StyleSpec,
    ) -> Self {
        Self {
            id: id.into(),
            component_type: component_type.into(),
            style,
            vertex_count: Vec::new(),
            vertex_count_options: Vec::new(),
            vertex_elements: Vec::new(),
            center_elements: Vec::new(),
        }
    }

    /// Create a `Polygon` definition with the given vertex count pool.
    pub fn polygon(id: impl Into<ComponentId>, style: StyleSpec, vertex_count: Vec<u32>) -> Self {
        let mut spec = Self::new(id, ComponentType::Polygon.as_str(), style);
        spec.vertex_count = vertex_count;
        spec
    }

    /// Create a `PolygonGroup` definition with its construction-time pools.
    pub fn polygon_group(
        id: impl Into<ComponentId>,
        style: StyleSpec,
        vertex_count_options: Vec<u32>,
        vertex_elements: Vec<String>,
        center_elements: Vec<bool>,
    ) -> Self {
        let mut spec = Self::new(id, ComponentType::PolygonGroup.as_str(), style);
        spec.vertex_count_options = vertex_count_options;
        spec.vertex_elements = vertex_elements;
        spec.center_elements = center_elements;
        spec
    }
}

/// Pixel dimensions of the canvas, written as `"<width>x<height>"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for CanvasSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidParameter(format!("canvas size '{s}' is not 'WxH'"));
        let (w, h) = s.trim().split_once('x').ok_or_else(invalid)?;
        let width: u32 = w.trim().parse().map_err(|_| invalid())?;
        let height: u32 = h.trim().parse().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(Error::InvalidParameter(format!(
                "canvas size '{s}' must be positive in both dimensions"
            )));
        }
        Ok(Self { width, height })
    }
}

/// A complete scene document: canvas, component definitions and draw order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct SceneSpec {
    pub canvas_size: String,
    pub element_defs: BTreeMap<ComponentId, ComponentSpec>,
    pub component_to_draw: Vec<ComponentId>,
    /// Seed for the random source; a fresh seed is drawn when absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,
    /// Output file path; defaults to [`DEFAULT_OUTPUT_PATH`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub output: Option<String>,
}

impl SceneSpec {
    pub fn new(canvas_size: impl Into<String>) -> Self {
        Self {
            canvas_size: canvas_size.into(),
            ..Default::default()
        }
    }

    /// Add a component definition keyed by its id.
    pub fn with_component(mut self, spec: ComponentSpec) -> Self {
        self.element_defs.insert(spec.id.clone(), spec);
        self
    }

    /// Append ids to the draw order.
    pub fn with_draw_order<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ComponentId>,
    {
        let ids = ids.into_iter().map(Into::into);
        self.component_to_draw.extend(ids);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parsed canvas dimensions.
    pub fn canvas(&self) -> Result<CanvasSize> {
        self.canvas_size.parse()
    }

    pub fn output_path(&self) -> &str {
        self.output.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }
}
