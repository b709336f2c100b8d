#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod states;
pub mod config;
pub mod key_utils;
pub mod debug;
pub mod error;
pub mod camera;
pub mod clothes;
pub mod scene;
mod serde_math;

use bevy::prelude::*;
use crate::camera::{OrbitCamera, OrbitCameraState};
use crate::clothes::Clothes;
use crate::debug::WorldInspectorState;
use crate::scene::{OrbitTarget, SceneIndex};

/// Core of all rig relevant resources and structures. This Plugin initializes resources
/// with `init_resource` from bevy and registers the reflected components for the
/// inspector. This Plugin is registered at [`ManagerPlugin`] which is a part of the
/// main.rs file.
pub struct RigCorePlugin;

impl Plugin for RigCorePlugin {

    #[cfg_attr(coverage_nightly, coverage(off))]
    fn build(&self, app: &mut App) {
        app
            .register_type::<OrbitCamera>()
            .register_type::<OrbitCameraState>()
            .register_type::<Clothes>()
            .register_type::<OrbitTarget>()
            .init_resource::<WorldInspectorState>()
            .init_resource::<SceneIndex>();
    }

}
