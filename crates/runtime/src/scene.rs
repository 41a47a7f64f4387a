//! JSON scene descriptions for the headless runner.

use std::path::Path;

use physics::{Body, BodyHandle, PhysicsWorld, Rect, Vec2};
use anyhow::{Context, Result};
use serde::Deserialize;

use crate::actor::{Actor, ContactCounter};

fn default_frames() -> u32 {
    60
}

#[derive(Debug, Clone, Deserialize)]
pub struct SceneConfig {
    #[serde(default = "default_frames")]
    pub frames: u32,
    /// Log body positions every this many frames; 0 disables it.
    #[serde(default)]
    pub log_every: u32,
    pub bodies: Vec<BodySpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BodySpec {
    pub name: String,
    pub position: [f32; 2],
    pub bounds: BoundsSpec,
    #[serde(default)]
    pub immovable: bool,
    #[serde(default)]
    pub velocity: [f32; 2],
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BoundsSpec {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl From<BoundsSpec> for Rect {
    fn from(bounds: BoundsSpec) -> Self {
        Rect::new(
            Vec2::new(bounds.min[0], bounds.min[1]),
            Vec2::new(bounds.max[0], bounds.max[1]),
        )
    }
}

/// A spawned body and what the runner needs to report on it.
pub struct SceneBody {
    pub name: String,
    pub handle: BodyHandle,
    pub contacts: ContactCounter,
}

const DEMO_SCENE: &str = r#"{
    "frames": 120,
    "log_every": 30,
    "bodies": [
        { "name": "floor", "position": [-10, -1], "bounds": { "min": [0, 0], "max": [20, 1] }, "immovable": true },
        { "name": "left_wall", "position": [-10, 0], "bounds": { "min": [0, 0], "max": [1, 10] }, "immovable": true },
        { "name": "right_wall", "position": [9, 0], "bounds": { "min": [0, 0], "max": [1, 10] }, "immovable": true },
        { "name": "runner", "position": [-6, 0], "bounds": { "min": [0, 0], "max": [1, 1] }, "velocity": [0.1, -0.05] },
        { "name": "crate_a", "position": [0, 2], "bounds": { "min": [0, 0], "max": [1, 1] }, "velocity": [0, -0.1] },
        { "name": "crate_b", "position": [0.5, 4], "bounds": { "min": [0, 0], "max": [1, 1] }, "velocity": [0, -0.1] }
    ]
}"#;

impl SceneConfig {
    /// Parse a scene from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid scene description")
    }

    /// Read and parse a scene file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read scene file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("while loading {}", path.display()))
    }

    /// The scene used when no file is given.
    pub fn demo() -> Result<Self> {
        Self::from_json(DEMO_SCENE)
    }

    /// Spawn every body into a fresh world, in declaration order.
    pub fn build(&self) -> (PhysicsWorld, Vec<SceneBody>) {
        let mut world = PhysicsWorld::new();
        let bodies = self
            .bodies
            .iter()
            .map(|spec| {
                let contacts = ContactCounter::default();
                let actor = Actor::new(
                    spec.name.clone(),
                    Vec2::new(spec.velocity[0], spec.velocity[1]),
                    contacts.clone(),
                );
                let body = Body::new(Vec2::new(spec.position[0], spec.position[1]), spec.bounds.into())
                    .with_immovable(spec.immovable)
                    .with_hooks(actor);
                SceneBody {
                    name: spec.name.clone(),
                    handle: world.spawn(body),
                    contacts,
                }
            })
            .collect();
        (world, bodies)
    }
}
