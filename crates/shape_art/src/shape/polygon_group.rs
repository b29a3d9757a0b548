//! A ring of shapes placed on the vertices of a regular polygon.
use rand::RngCore;

use crate::canvas::{DrawnElement, Geometry, Paint};
use crate::error::Result;
use crate::geometry::regular_polygon_vertices;
use crate::shape::polygon::{check_vertex_count, resolve_vertex_count};
use crate::shape::{DrawParams, ShapeDraw};
use crate::style::{pick_required, StyleSampler};

/// What a [`PolygonGroup`] draws on each outer vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexElements {
    Circle,
    Polygon,
}

impl VertexElements {
    /// `"circle"` selects circles; any other mode name selects polygons.
    pub fn from_mode(mode: &str) -> Self {
        if mode == "circle" {
            VertexElements::Circle
        } else {
            VertexElements::Polygon
        }
    }
}

/// Polygon group with vertex count, vertex elements and center outline fixed at build time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolygonGroup {
    pub vertex_count: usize,
    pub vertex_elements: VertexElements,
    pub center_elements: bool,
}

impl PolygonGroup {
    pub fn new(
        vertex_count: usize,
        vertex_elements: VertexElements,
        center_elements: bool,
    ) -> Result<Self> {
        check_vertex_count(vertex_count)?;
        Ok(Self {
            vertex_count,
            vertex_elements,
            center_elements,
        })
    }

    /// Pick vertex count, vertex element mode and center flag, in that order.
    pub fn from_options(
        id: &str,
        vertex_count_options: &[u32],
        vertex_elements: &[String],
        center_elements: &[bool],
        rng: &mut dyn RngCore,
    ) -> Result<Self> {
        let vertex_count =
            resolve_vertex_count(id, "vertex_count_options", vertex_count_options, rng)?;
        let mode = pick_required(id, "vertex_elements", vertex_elements, rng)?;
        let center = *pick_required(id, "center_elements", center_elements, rng)?;
        Ok(Self {
            vertex_count,
            vertex_elements: VertexElements::from_mode(mode),
            center_elements: center,
        })
    }
}

impl ShapeDraw for PolygonGroup {
    fn draw(
        &self,
        style: &StyleSampler<'_>,
        params: DrawParams,
        rng: &mut dyn RngCore,
    ) -> Result<DrawnElement> {
        let ring = regular_polygon_vertices(
            self.vertex_count,
            params.center,
            params.size,
            params.rotation,
        )?;

        let mut children = Vec::with_capacity(ring.len() + 1);
        if self.center_elements {
            let fill = style.fill(rng)?;
            let opacity = style.opacity(rng)?;
            let stroke = style.stroke(rng)?;
            children.push(DrawnElement::new(
                Geometry::Polygon {
                    points: ring.clone(),
                },
                Paint::fill(fill, opacity).with_stroke(stroke),
            ));
        }

        // Shared by every vertex child of this draw.
        let stroke = style.stroke(rng)?;
        for vertex in ring {
            let geometry = match self.vertex_elements {
                VertexElements::Circle => Geometry::Circle {
                    center: vertex,
                    radius: params.size / 2.0,
                },
                VertexElements::Polygon => Geometry::Polygon {
                    points: regular_polygon_vertices(
                        self.vertex_count,
                        vertex,
                        params.size,
                        params.rotation,
                    )?,
                },
            };
            let fill = style.fill(rng)?;
            let opacity = style.opacity(rng)?;
            children.push(DrawnElement::new(
                geometry,
                Paint::fill(fill, opacity).with_stroke(stroke.clone()),
            ));
        }

        Ok(DrawnElement::group(style.id, children))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::error::Error;
    use crate::geometry::Point;
    use crate::spec::StyleSpec;
    use crate::style::Stroke;

    fn style() -> StyleSpec {
        let mut style = StyleSpec::solid("red", 0.8, 30.0, 0.0)
            .with_stroke(vec!["black".into(), "white".into()], vec![1.0, 2.0, 3.0]);
        style.fill_options.push("blue".into());
        style
    }

    fn draw(group: PolygonGroup, seed: u64) -> DrawnElement {
        let style = style();
        let sampler = StyleSampler::new("ring", &style);
        let params = DrawParams::new(Point::new(100.0, 100.0), 30.0, 10.0);
        let mut rng = StdRng::seed_from_u64(seed);
        group.draw(&sampler, params, &mut rng).unwrap()
    }

    #[test]
    fn mode_names_other_than_circle_mean_polygon() {
        for (mode, expected) in [
            ("circle", VertexElements::Circle),
            ("polygon", VertexElements::Polygon),
            ("Circle", VertexElements::Polygon),
        ] {
            assert_eq!(VertexElements::from_mode(mode), expected);
        }
    }

    #[test]
    fn without_center_only_vertex_children_are_emitted() {
        let group = PolygonGroup::new(5, VertexElements::Circle, false).unwrap();
        let el = draw(group, 4);
        assert!(matches!(el.geometry, Geometry::Group { ref id, .. } if id == "ring"));

        let children = el.children();
        assert_eq!(children.len(), 5);
        for child in children {
            match child.geometry {
                Geometry::Circle { radius, .. } => assert_eq!(radius, 15.0),
                ref other => panic!("expected circle, got {other:?}"),
            }
        }
    }

    #[test]
    fn center_outline_comes_first() {
        let group = PolygonGroup::new(6, VertexElements::Circle, true).unwrap();
        let el = draw(group, 8);
        let children = el.children();
        assert_eq!(children.len(), 7);

        let Geometry::Polygon { ref points } = children[0].geometry else {
            panic!("first child should be the ring outline");
        };
        assert_eq!(points.len(), 6);
        assert!(children[0].paint.stroke.is_some());
    }

    #[test]
    fn vertex_children_share_one_stroke() {
        for seed in 0..10 {
            let group = PolygonGroup::new(4, VertexElements::Polygon, true).unwrap();
            let el = draw(group, seed);
            let strokes: Vec<&Stroke> = el.children()[1..]
                .iter()
                .map(|c| c.paint.stroke.as_ref().expect("stroked child"))
                .collect();
            assert!(strokes.windows(2).all(|w| w[0] == w[1]));
        }
    }

    #[test]
    fn nested_polygons_sit_on_ring_vertices() {
        let group = PolygonGroup::new(3, VertexElements::Polygon, false).unwrap();
        let el = draw(group, 1);
        let center = Point::new(100.0, 100.0);
        let ring = regular_polygon_vertices(3, center, 30.0, 10.0).unwrap();

        for (child, vertex) in el.children().iter().zip(ring) {
            let Geometry::Polygon { ref points } = child.geometry else {
                panic!("expected nested polygon");
            };
            assert_eq!(points.len(), 3);
            for p in points {
                assert!((p.distance(vertex) - 15.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn construction_requires_every_pool() {
        let mut rng = StdRng::seed_from_u64(0);
        let modes = vec!["circle".to_string()];
        assert!(matches!(
            PolygonGroup::from_options("g", &[5], &[], &[true], &mut rng),
            Err(Error::EmptyPool {
                pool: "vertex_elements",
                ..
            })
        ));
        assert!(matches!(
            PolygonGroup::from_options("g", &[5], &modes, &[], &mut rng),
            Err(Error::EmptyPool {
                pool: "center_elements",
                ..
            })
        ));
        let group = PolygonGroup::from_options("g", &[5], &modes, &[true], &mut rng).unwrap();
        assert_eq!(
            group,
            PolygonGroup {
                vertex_count: 5,
                vertex_elements: VertexElements::Circle,
                center_elements: true
            }
        );
    }

    #[test]
    fn construction_choices_hold_for_every_draw() {
        let style = style();
        let sampler = StyleSampler::new("ring", &style);
        let counts = [3, 5, 8];
        let modes = vec!["circle".to_string(), "polygon".to_string()];
        let centers = [true, false];

        for build_seed in 0..8 {
            let mut rng = StdRng::seed_from_u64(build_seed);
            let built = PolygonGroup::from_options("ring", &counts, &modes, &centers, &mut rng);
            let group = built.unwrap();
            let expected_len = group.vertex_count + usize::from(group.center_elements);

            for draw_seed in 0..6 {
                let mut rng = StdRng::seed_from_u64(100 + draw_seed);
                let params = DrawParams::new(Point::new(50.0, 50.0), 10.0 + draw_seed as f64, 0.0);
                let el = group.draw(&sampler, params, &mut rng).unwrap();
                let children = el.children();
                assert_eq!(children.len(), expected_len);

                let vertex_children = &children[usize::from(group.center_elements)..];
                for child in vertex_children {
                    match (&child.geometry, group.vertex_elements) {
                        (Geometry::Circle { .. }, VertexElements::Circle) => {}
                        (Geometry::Polygon { points }, VertexElements::Polygon) => {
                            assert_eq!(points.len(), group.vertex_count);
                        }
                        (other, mode) => panic!("{mode:?} group drew {other:?}"),
                    }
                }
            }
        }
    }
}
