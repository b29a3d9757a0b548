//! High-level runner that builds a scene's components and draws them in order.
use std::collections::BTreeMap;

use rand::RngCore;
use tracing::{debug, info, warn};

use crate::canvas::Canvas;
use crate::error::{Error, Result};
use crate::scene::events::{EventSink, SceneEvent, SceneEventKind};
use crate::shape::{create_component, Component};
use crate::spec::{CanvasSize, ComponentId, SceneSpec};

/// Components of a scene, built once, plus the order in which to draw them.
#[derive(Debug, Clone)]
pub struct SceneRunner {
    canvas_size: CanvasSize,
    components: BTreeMap<ComponentId, Component>,
    draw_order: Vec<ComponentId>,
}

impl SceneRunner {
    /// Parse the canvas size and build every component declared in `spec`.
    pub fn try_new<R: RngCore>(spec: &SceneSpec, rng: &mut R) -> Result<Self> {
        Self::build(spec, rng, &mut ())
    }

    /// Like [`SceneRunner::try_new`], reporting each built component to `sink`.
    pub fn try_new_with_events<R: RngCore>(
        spec: &SceneSpec,
        rng: &mut R,
        sink: &mut dyn EventSink,
    ) -> Result<Self> {
        Self::build(spec, rng, sink)
    }

    fn build<R: RngCore>(spec: &SceneSpec, rng: &mut R, sink: &mut dyn EventSink) -> Result<Self> {
        let canvas_size = spec.canvas()?;

        let mut components = BTreeMap::new();
        for (key, def) in &spec.element_defs {
            if *key != def.id {
                warn!(
                    "Component keyed '{}' declares id '{}'; drawing it under '{}'.",
                    key, def.id, key
                );
            }
            let component = create_component(def, rng)?;
            if sink.wants(SceneEventKind::ComponentBuilt) {
                sink.send(SceneEvent::ComponentBuilt {
                    id: key.clone(),
                    component_type: component.component_type(),
                });
            }
            components.insert(key.clone(), component);
        }

        Ok(Self {
            canvas_size,
            components,
            draw_order: spec.component_to_draw.clone(),
        })
    }

    pub fn canvas_size(&self) -> CanvasSize {
        self.canvas_size
    }

    pub fn components(&self) -> &BTreeMap<ComponentId, Component> {
        &self.components
    }

    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.get(id)
    }

    pub fn draw_order(&self) -> &[ComponentId] {
        &self.draw_order
    }

    /// Draws the scene, returning the finished canvas.
    pub fn run<R: RngCore>(&self, rng: &mut R) -> Result<Canvas> {
        self.run_internal(rng, &mut ())
    }

    pub fn run_with_events<R: RngCore>(
        &self,
        rng: &mut R,
        sink: &mut dyn EventSink,
    ) -> Result<Canvas> {
        self.run_internal(rng, sink)
    }

    fn run_internal<R: RngCore>(&self, rng: &mut R, sink: &mut dyn EventSink) -> Result<Canvas> {
        // Every id must resolve before anything is drawn.
        let order = self
            .draw_order
            .iter()
            .map(|id| {
                self.components
                    .get(id)
                    .ok_or_else(|| Error::NotFound { id: id.clone() })
            })
            .collect::<Result<Vec<_>>>()?;

        if order.is_empty() {
            warn!("Draw order is empty; the canvas stays blank.");
        }
        info!(
            "Drawing {} component(s) on a {} canvas.",
            order.len(),
            self.canvas_size
        );
        if sink.wants(SceneEventKind::RunStarted) {
            sink.send(SceneEvent::RunStarted {
                canvas: self.canvas_size,
                draw_count: order.len(),
            });
        }

        let mut canvas = Canvas::new(self.canvas_size);
        let center = canvas.center();
        for (index, (id, component)) in self.draw_order.iter().zip(order).enumerate() {
            let sampler = component.sampler();
            let size = sampler.size(rng)?;
            let rotation = sampler.rotation(rng)?;
            let element = component.draw(center, size, rotation, rng)?;
            debug!(
                "Drew '{}' ({}) size {} rotation {}.",
                id,
                component.component_type(),
                size,
                rotation
            );
            canvas.push(element);

            if sink.wants(SceneEventKind::ComponentDrawn) {
                sink.send(SceneEvent::ComponentDrawn {
                    index,
                    id: id.clone(),
                    size,
                    rotation,
                });
            }
        }

        if sink.wants(SceneEventKind::RunFinished) {
            sink.send(SceneEvent::RunFinished {
                element_count: canvas.len(),
            });
        }
        Ok(canvas)
    }
}

/// Build and draw `spec` in one step.
pub fn render_scene<R: RngCore>(spec: &SceneSpec, rng: &mut R) -> Result<Canvas> {
    SceneRunner::try_new(spec, rng)?.run(rng)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::canvas::{Geometry, Paint};
    use crate::geometry::Point;
    use crate::scene::events::VecSink;
    use crate::shape::{Shape, VertexElements};
    use crate::spec::{ComponentSpec, StyleSpec};

    fn circle_scene() -> SceneSpec {
        let circle = ComponentSpec::new("c1", "Circle", StyleSpec::solid("red", 1.0, 20.0, 0.0));
        SceneSpec::new("100x100")
            .with_component(circle)
            .with_draw_order(["c1"])
    }

    fn mixed_scene() -> SceneSpec {
        let mut style = StyleSpec::solid("red", 0.5, 40.0, 0.0)
            .with_stroke(vec!["black".into(), "navy".into()], vec![1.0, 2.5]);
        style.fill_options.push("teal".into());
        style.fill_options.push("gold".into());
        style.size_options.extend([60.0, 80.0]);
        style.rotation_options.extend([15.0, 45.0]);

        SceneSpec::new("400x300")
            .with_component(ComponentSpec::new("bg", "Rect", style.clone()))
            .with_component(ComponentSpec::new("oval", "Ellipse", style.clone()))
            .with_component(ComponentSpec::polygon("star", style.clone(), vec![5, 7]))
            .with_component(ComponentSpec::polygon_group(
                "ring",
                style,
                vec![3, 6],
                vec!["circle".into(), "polygon".into()],
                vec![true, false],
            ))
            .with_draw_order(["bg", "oval", "star", "ring"])
    }

    #[test]
    fn single_circle_lands_on_canvas_center() {
        let mut rng = StdRng::seed_from_u64(0);
        let canvas = render_scene(&circle_scene(), &mut rng).unwrap();

        assert_eq!(canvas.size(), CanvasSize::new(100, 100));
        assert_eq!(canvas.len(), 1);
        let el = &canvas.elements()[0];
        assert_eq!(
            el.geometry,
            Geometry::Circle {
                center: Point::new(50.0, 50.0),
                radius: 10.0
            }
        );
        assert_eq!(el.paint, Paint::fill("red".into(), 1.0));
        assert!(el.rotation.is_none());
    }

    #[test]
    fn unknown_draw_id_fails_before_drawing() {
        let spec = circle_scene().with_draw_order(["missing"]);
        let mut rng = StdRng::seed_from_u64(0);
        let runner = SceneRunner::try_new(&spec, &mut rng).unwrap();

        let mut sink = VecSink::new();
        let err = runner.run_with_events(&mut rng, &mut sink).unwrap_err();
        assert!(matches!(err, Error::NotFound { ref id } if id == "missing"));
        assert!(sink.is_empty());
    }

    #[test]
    fn invalid_canvas_size_is_rejected() {
        let mut spec = circle_scene();
        spec.canvas_size = "wide".into();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            SceneRunner::try_new(&spec, &mut rng),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn unknown_component_type_aborts_construction() {
        let style = StyleSpec::solid("red", 1.0, 5.0, 0.0);
        let triangle = ComponentSpec::new("tri", "Triangle", style);
        let spec = circle_scene().with_component(triangle);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            SceneRunner::try_new(&spec, &mut rng),
            Err(Error::UnknownComponentType { .. })
        ));
    }

    #[test]
    fn draws_follow_requested_order() {
        let mut rng = StdRng::seed_from_u64(21);
        let canvas = render_scene(&mixed_scene(), &mut rng).unwrap();

        assert_eq!(canvas.len(), 4);
        let els = canvas.elements();
        assert!(matches!(els[0].geometry, Geometry::Rect { .. }));
        assert!(matches!(els[1].geometry, Geometry::Ellipse { .. }));
        assert!(matches!(els[2].geometry, Geometry::Polygon { .. }));
        assert!(matches!(els[3].geometry, Geometry::Group { ref id, .. } if id == "ring"));
    }

    #[test]
    fn same_seed_same_canvas() {
        let spec = mixed_scene();
        let mut first = StdRng::seed_from_u64(77);
        let mut second = StdRng::seed_from_u64(77);
        let a = render_scene(&spec, &mut first).unwrap();
        let b = render_scene(&spec, &mut second).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn construction_choices_survive_repeated_runs() {
        let mut rng = StdRng::seed_from_u64(3);
        let runner = SceneRunner::try_new(&mixed_scene(), &mut rng).unwrap();
        let Some(Shape::Polygon(star)) = runner.component("star").map(|c| c.shape.clone()) else {
            panic!("star should be a polygon");
        };

        for _ in 0..5 {
            let canvas = runner.run(&mut rng).unwrap();
            let Geometry::Polygon { ref points } = canvas.elements()[2].geometry else {
                panic!("expected polygon");
            };
            assert_eq!(points.len(), star.vertex_count);
        }
    }

    #[test]
    fn polygon_group_choices_survive_repeated_runs() {
        let mut rng = StdRng::seed_from_u64(9);
        let runner = SceneRunner::try_new(&mixed_scene(), &mut rng).unwrap();
        let shape = runner.component("ring").map(|c| c.shape.clone());
        let Some(Shape::PolygonGroup(ring)) = shape else {
            panic!("ring should be a polygon group");
        };
        let outline = usize::from(ring.center_elements);

        for seed in 0..6 {
            let canvas = runner.run(&mut StdRng::seed_from_u64(seed)).unwrap();
            let children = canvas.elements()[3].children();
            assert_eq!(children.len(), ring.vertex_count + outline);
            for child in &children[outline..] {
                let is_circle = matches!(child.geometry, Geometry::Circle { .. });
                assert_eq!(is_circle, ring.vertex_elements == VertexElements::Circle);
            }
        }
    }

    #[test]
    fn events_trace_build_and_draw() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut sink = VecSink::new();
        let spec = mixed_scene();
        let built = SceneRunner::try_new_with_events(&spec, &mut rng, &mut sink);
        let runner = built.unwrap();
        runner.run_with_events(&mut rng, &mut sink).unwrap();

        let kinds: Vec<SceneEventKind> = sink.as_slice().iter().map(|e| e.kind()).collect();
        let built = kinds
            .iter()
            .filter(|k| **k == SceneEventKind::ComponentBuilt)
            .count();
        assert_eq!(built, 4);
        assert_eq!(kinds[4], SceneEventKind::RunStarted);
        assert_eq!(kinds.last(), Some(&SceneEventKind::RunFinished));

        let drawn: Vec<(usize, String)> = sink
            .into_inner()
            .into_iter()
            .filter_map(|e| match e {
                SceneEvent::ComponentDrawn { index, id, .. } => Some((index, id)),
                _ => None,
            })
            .collect();
        assert_eq!(
            drawn,
            vec![
                (0, "bg".to_string()),
                (1, "oval".to_string()),
                (2, "star".to_string()),
                (3, "ring".to_string())
            ]
        );
    }

    #[test]
    fn repeated_group_draws_get_distinct_ids() {
        let spec = mixed_scene().with_draw_order(["ring"]);
        let canvas = render_scene(&spec, &mut StdRng::seed_from_u64(4)).unwrap();
        let ids: Vec<&str> = canvas
            .elements()
            .iter()
            .filter_map(|e| match &e.geometry {
                Geometry::Group { id, .. } => Some(id.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(ids, vec!["ring", "ring-1"]);
    }

    #[test]
    fn repeated_ids_reuse_one_component() {
        let spec = circle_scene().with_draw_order(["c1", "c1"]);
        let mut rng = StdRng::seed_from_u64(1);
        let runner = SceneRunner::try_new(&spec, &mut rng).unwrap();
        assert_eq!(runner.components().len(), 1);
        assert_eq!(runner.run(&mut rng).unwrap().len(), 3);
    }
}
