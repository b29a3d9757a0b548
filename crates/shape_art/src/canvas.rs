//! Drawn elements and the append-only canvas that collects them.
use std::collections::HashSet;

use crate::geometry::Point;
use crate::spec::CanvasSize;
use crate::style::Stroke;

/// Rotation transform about a center, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    pub angle_degrees: f64,
    pub center: Point,
}

/// Resolved paint attributes of an element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Paint {
    pub fill: Option<String>,
    pub opacity: Option<f64>,
    pub stroke: Option<Stroke>,
}

impl Paint {
    pub fn fill(fill: String, opacity: f64) -> Self {
        Self {
            fill: Some(fill),
            opacity: Some(opacity),
            stroke: None,
        }
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

/// Geometry of a drawn element in canvas coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Circle { center: Point, radius: f64 },
    /// Axis-aligned rectangle with its top-left corner at `origin`.
    Rect {
        origin: Point,
        width: f64,
        height: f64,
    },
    Ellipse { center: Point, rx: f64, ry: f64 },
    /// Closed outline through `points` in order.
    Polygon { points: Vec<Point> },
    Group {
        id: String,
        children: Vec<DrawnElement>,
    },
}

/// One shape with resolved geometry and style, ready for serialization.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawnElement {
    pub geometry: Geometry,
    pub paint: Paint,
    pub rotation: Option<Rotation>,
}

impl DrawnElement {
    pub fn new(geometry: Geometry, paint: Paint) -> Self {
        Self {
            geometry,
            paint,
            rotation: None,
        }
    }

    /// Create an unpainted group holding `children` in order.
    pub fn group(id: impl Into<String>, children: Vec<DrawnElement>) -> Self {
        Self::new(
            Geometry::Group {
                id: id.into(),
                children,
            },
            Paint::default(),
        )
    }

    /// Attach a rotation about `center` unless `angle_degrees` is zero.
    pub fn rotated(mut self, angle_degrees: f64, center: Point) -> Self {
        let rotation = Rotation {
            angle_degrees,
            center,
        };
        self.rotation = (angle_degrees != 0.0).then_some(rotation);
        self
    }

    /// Children of a group element, empty for every other geometry.
    pub fn children(&self) -> &[DrawnElement] {
        match &self.geometry {
            Geometry::Group { children, .. } => children,
            _ => &[],
        }
    }
}

/// Fixed-size drawing surface accumulating elements in draw order.
///
/// Group ids are unique within a canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    size: CanvasSize,
    elements: Vec<DrawnElement>,
    group_ids: HashSet<String>,
}

impl Canvas {
    pub fn new(size: CanvasSize) -> Self {
        Self {
            size,
            elements: Vec::new(),
            group_ids: HashSet::new(),
        }
    }

    pub fn size(&self) -> CanvasSize {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    pub fn center(&self) -> Point {
        let CanvasSize { width, height } = self.size;
        Point::new(width as f64 / 2.0, height as f64 / 2.0)
    }

    /// Append `element`. A group whose id is already taken gets the first free `-<n>` suffix.
    pub fn push(&mut self, mut element: DrawnElement) {
        if let Geometry::Group { id, .. } = &mut element.geometry {
            if !self.group_ids.insert(id.clone()) {
                let mut n = 1;
                while self.group_ids.contains(&format!("{id}-{n}")) {
                    n += 1;
                }
                id.push_str(&format!("-{n}"));
                self.group_ids.insert(id.clone());
            }
        }
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[DrawnElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn into_elements(self) -> Vec<DrawnElement> {
        self.elements
    }
}
