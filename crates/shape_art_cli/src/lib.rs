#![forbid(unsafe_code)]

mod config;
mod rendering;

pub use config::{load_scene, parse_scene};
pub use rendering::{canvas_to_document, init_tracing, render_canvas_to_svg};
