use std::path::Path;

use anyhow::Context;
use shape_art::prelude::{Canvas, DrawnElement, Geometry, Paint, Point, Rotation};
use svg::node::element::{Circle, Ellipse, Group, Polygon, Rectangle};
use svg::{Document, Node};
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered by `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Convert a finished canvas into an SVG document, one node per element in draw order.
pub fn canvas_to_document(canvas: &Canvas) -> Document {
    let (w, h) = (canvas.width(), canvas.height());
    let mut doc = Document::new()
        .set("width", w)
        .set("height", h)
        .set("viewBox", (0, 0, w, h));
    for el in canvas.elements() {
        doc = doc.add(element_node(el));
    }
    doc
}

/// Serialize `canvas` and write it to `path`.
pub fn render_canvas_to_svg(canvas: &Canvas, path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    svg::save(path, &canvas_to_document(canvas))
        .with_context(|| format!("failed to write '{}'", path.display()))?;
    tracing::info!("Wrote {} element(s) to {}.", canvas.len(), path.display());
    Ok(())
}

fn element_node(el: &DrawnElement) -> Box<dyn Node> {
    match &el.geometry {
        Geometry::Circle { center, radius } => styled(
            Circle::new()
                .set("cx", center.x)
                .set("cy", center.y)
                .set("r", *radius),
            el,
        ),
        Geometry::Rect {
            origin,
            width,
            height,
        } => styled(
            Rectangle::new()
                .set("x", origin.x)
                .set("y", origin.y)
                .set("width", *width)
                .set("height", *height),
            el,
        ),
        Geometry::Ellipse { center, rx, ry } => styled(
            Ellipse::new()
                .set("cx", center.x)
                .set("cy", center.y)
                .set("rx", *rx)
                .set("ry", *ry),
            el,
        ),
        Geometry::Polygon { points } => {
            styled(Polygon::new().set("points", points_attr(points)), el)
        }
        Geometry::Group { id, children } => {
            let mut group = Group::new().set("id", id.as_str());
            for child in children {
                group = group.add(element_node(child));
            }
            styled(group, el)
        }
    }
}

fn styled<N: Node>(mut node: N, el: &DrawnElement) -> Box<dyn Node> {
    apply_paint(&mut node, &el.paint);
    if let Some(rotation) = &el.rotation {
        node.assign("transform", rotate_attr(rotation));
    }
    Box::new(node)
}

fn apply_paint<N: Node>(node: &mut N, paint: &Paint) {
    if let Some(fill) = &paint.fill {
        node.assign("fill", fill.as_str());
    }
    if let Some(opacity) = paint.opacity {
        node.assign("opacity", opacity);
    }
    if let Some(stroke) = &paint.stroke {
        node.assign("stroke", stroke.color.as_str());
        node.assign("stroke-width", stroke.width);
    }
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn rotate_attr(rotation: &Rotation) -> String {
    format!(
        "rotate({},{},{})",
        rotation.angle_degrees, rotation.center.x, rotation.center.y
    )
}
