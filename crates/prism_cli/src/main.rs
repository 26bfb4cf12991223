//! `prism` - render a JSON scene description to an image file.

mod cli;
mod logger;
mod output;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_logger(args.log_level.into());

    let scene_path = match args.scene {
        Some(path) => path,
        None => prompt_scene_path()?,
    };

    let mut scene = prism_core::load_scene(&scene_path)
        .with_context(|| format!("Failed to load scene {}", scene_path.display()))?;

    if let Some(max_depth) = args.max_depth {
        log::info!(
            "Overriding max ray depth {} -> {}",
            scene.max_ray_depth(),
            max_depth
        );
        scene = scene.with_max_ray_depth(max_depth);
    }

    let image = prism_renderer::render(&scene);
    output::save_image(&image, &args.output)?;

    Ok(())
}

/// Ask for the scene path on stdin.
fn prompt_scene_path() -> Result<PathBuf> {
    print!("Please enter the scene description path: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read scene path from stdin")?;

    let path = line.trim();
    if path.is_empty() {
        bail!("No scene description path given");
    }
    Ok(PathBuf::from(path))
}
