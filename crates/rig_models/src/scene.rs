use std::collections::HashMap;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use crate::camera::OrbitCameraSettings;
use crate::error::SceneError;
use crate::serde_math::vec3_array;

/// Scene file converted into entities at startup.
#[derive(Resource, Debug, Clone)]
pub struct SceneSource(pub PathBuf);

/// Name to entity lookup of the last converted scene.
#[derive(Resource, Debug, Clone, Default)]
pub struct SceneIndex(pub HashMap<String, Entity>);

impl SceneIndex {
    pub fn get(&self, name: &str) -> Option<Entity> {
        self.0.get(name).copied()
    }
}

/// A scene as stored on disk.
///
/// ```json
/// { "entities": [
///     { "name": "Player", "translation": [0.0, 0.5, 0.0], "role": { "type": "orbit_target" } },
///     { "name": "Camera", "role": { "type": "orbit_camera", "target": "Player" } }
/// ] }
/// ```
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct SceneDescription {
    pub entities: Vec<EntityDescription>,
}

impl SceneDescription {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let content = read_to_string(path)?;
        Self::from_json(&content)
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct EntityDescription {
    pub name: String,
    #[serde(default, with = "vec3_array")]
    pub translation: Vec3,
    /// Inactive entities are spawned hidden.
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub shape: Option<ShapeDescription>,
    #[serde(default)]
    pub role: EntityRole,
}

fn default_active() -> bool {
    true
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntityRole {
    #[default]
    Prop,
    /// Something an orbit camera can look at.
    OrbitTarget,
    /// Missing `settings` fall back to the camera config.
    OrbitCamera {
        #[serde(default)]
        target: Option<String>,
        #[serde(default)]
        settings: Option<OrbitCameraSettings>,
    },
    Clothes {
        wearer: String,
    },
    Light {
        #[serde(default = "default_light_intensity")]
        intensity: f32,
    },
}

fn default_light_intensity() -> f32 {
    1500.0
}

impl EntityRole {
    /// Name of the entity this role points at, if any.
    pub fn reference(&self) -> Option<&str> {
        match self {
            Self::OrbitCamera { target, .. } => target.as_deref(),
            Self::Clothes { wearer } => Some(wearer.as_str()),
            _ => None,
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeDescription {
    Cuboid {
        #[serde(with = "vec3_array")]
        size: Vec3,
        #[serde(default = "default_color")]
        color: [f32; 3],
    },
    Sphere {
        radius: f32,
        #[serde(default = "default_color")]
        color: [f32; 3],
    },
}

fn default_color() -> [f32; 3] {
    [0.8, 0.8, 0.8]
}

/// Shape of a converted entity. Meshes are created from it once the render world is up.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct SceneShape(pub ShapeDescription);

/// Point light of a converted entity.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct SceneLight {
    pub intensity: f32,
}

/// Marks entities that cameras are allowed to orbit.
#[derive(Component, Reflect, Debug, Clone, Copy, Default)]
#[reflect(Component)]
pub struct OrbitTarget;
