use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use shape_art::prelude::SceneRunner;
use shape_art_cli::{init_tracing, load_scene, render_canvas_to_svg};
use tracing::info;

const DEFAULT_SCENE_PATH: &str = "parameters.ron";

fn main() -> anyhow::Result<()> {
    init_tracing();

    // shape-art [CONFIG] [OUTPUT]
    let mut args = std::env::args().skip(1);
    let scene_path = args.next().unwrap_or_else(|| DEFAULT_SCENE_PATH.into());
    let output_override = args.next();

    let scene = load_scene(&scene_path)?;

    // Pin `seed` in the scene file to reproduce a run.
    let seed = scene.seed.unwrap_or_else(|| rand::rng().next_u64());
    info!("Rendering '{}' with seed {}.", scene_path, seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let runner = SceneRunner::try_new(&scene, &mut rng)?;
    let canvas = runner.run(&mut rng)?;

    let out = output_override.as_deref().unwrap_or(scene.output_path());
    render_canvas_to_svg(&canvas, out)?;

    Ok(())
}
