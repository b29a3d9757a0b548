//! Event types and sinks for observing scene runs.
//!
//! This module defines [`SceneEvent`] and a set of sinks to collect or forward events
//! while executing a scene via [`crate::scene::runner::SceneRunner`].
use crate::spec::{CanvasSize, ComponentId, ComponentType};

/// Describes events emitted while building and drawing a scene.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum SceneEvent {
    /// Emitted once per component after construction.
    ComponentBuilt {
        /// The component id.
        id: ComponentId,
        /// Resolved shape type.
        component_type: ComponentType,
    },

    /// Emitted when drawing starts.
    RunStarted {
        /// Canvas dimensions.
        canvas: CanvasSize,
        /// Number of entries in the draw order.
        draw_count: usize,
    },

    /// Emitted after a component was drawn and appended to the canvas.
    ComponentDrawn {
        /// Position in the draw order.
        index: usize,
        /// The component id.
        id: ComponentId,
        /// Sampled size.
        size: f64,
        /// Sampled rotation in degrees.
        rotation: f64,
    },

    /// Emitted when the whole draw order has been processed.
    RunFinished {
        /// Number of top-level elements on the canvas.
        element_count: usize,
    },
}

impl SceneEvent {
    pub fn kind(&self) -> SceneEventKind {
        match self {
            SceneEvent::ComponentBuilt { .. } => SceneEventKind::ComponentBuilt,
            SceneEvent::RunStarted { .. } => SceneEventKind::RunStarted,
            SceneEvent::ComponentDrawn { .. } => SceneEventKind::ComponentDrawn,
            SceneEvent::RunFinished { .. } => SceneEventKind::RunFinished,
        }
    }
}

/// Discriminant of [`SceneEvent`], used to skip building events nobody listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneEventKind {
    ComponentBuilt,
    RunStarted,
    ComponentDrawn,
    RunFinished,
}

/// A generic event sink that accepts [`SceneEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: SceneEvent);

    /// Whether this sink wants events of `kind`.
    fn wants(&self, _kind: SceneEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: SceneEvent) {}

    #[inline]
    fn wants(&self, _kind: SceneEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(SceneEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(SceneEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(SceneEvent),
{
    #[inline]
    fn send(&mut self, event: SceneEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<SceneEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<SceneEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[SceneEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: SceneEvent) {
        self.events.push(event);
    }
}
