//! Scene driver: builds components from a [`crate::spec::SceneSpec`] and draws them onto a
//! [`crate::canvas::Canvas`] in the requested order.
pub mod events;
pub mod runner;

pub use events::{EventSink, FnSink, SceneEvent, SceneEventKind, VecSink};
pub use runner::{render_scene, SceneRunner};
