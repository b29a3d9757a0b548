use std::fs;
use std::path::Path;

use anyhow::Context;
use shape_art::prelude::SceneSpec;

/// Parse a scene from RON text.
pub fn parse_scene(text: &str) -> anyhow::Result<SceneSpec> {
    let scene: SceneSpec = ron::from_str(text).map_err(|e| anyhow::anyhow!(e))?;
    Ok(scene)
}

/// Read and parse a RON scene file.
pub fn load_scene(path: impl AsRef<Path>) -> anyhow::Result<SceneSpec> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read scene '{}'", path.display()))?;
    parse_scene(&text).with_context(|| format!("failed to parse scene '{}'", path.display()))
}
