#![deny(clippy::all, clippy::pedantic)]

mod actor;
mod scene;

use std::path::PathBuf;

use anyhow::Result;
use scene::SceneConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let scene = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            tracing::info!("Loading scene from {}", path.display());
            SceneConfig::load(&path)?
        }
        None => {
            tracing::info!("No scene file given, using the built-in demo scene.");
            SceneConfig::demo()?
        }
    };

    let (mut world, bodies) = scene.build();
    tracing::info!(
        "Starting simulation loop for {} frames with {} static and {} dynamic bodies...",
        scene.frames,
        world.static_bodies().len(),
        world.dynamic_bodies().len()
    );

    for frame in 0..scene.frames {
        world.step();
        if scene.log_every > 0 && (frame + 1) % scene.log_every == 0 {
            for body in &bodies {
                if let Some(state) = world.body(body.handle) {
                    tracing::info!(
                        "Frame {} complete. {}: ({:.3}, {:.3})",
                        frame + 1,
                        body.name,
                        state.position.x,
                        state.position.y
                    );
                }
            }
        }
    }

    tracing::info!("Simulation finished after {} frames.", scene.frames);
    for body in &bodies {
        if let Some(state) = world.body(body.handle) {
            tracing::info!(
                "Final {} position: ({:.3}, {:.3}), contacts: {}",
                body.name,
                state.position.x,
                state.position.y,
                body.contacts.get()
            );
        }
    }

    Ok(())
}
