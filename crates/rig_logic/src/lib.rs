#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod camera_logic;
pub mod clothes_logic;
pub mod scene_logic;
pub mod debug_logic;

use bevy::prelude::*;
use rig_models::states::AppState;
use crate::camera_logic::{attach_orbit_cameras, drive_orbit_cameras};
use crate::clothes_logic::mirror_clothes_visibility;
use crate::debug_logic::DebugLogicComponent;
use crate::scene_logic::{attach_scene_visuals, load_startup_scene};

/// Drives the converted scene: the startup scene is turned into entities once, afterwards
/// every rig system runs once per frame in `Update` while the app is running.
pub struct RigLogicPlugin;

impl Plugin for RigLogicPlugin {

    #[cfg_attr(coverage_nightly, coverage(off))]
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>();
        app.add_plugins(DebugLogicComponent);
        app.add_systems(Startup, load_startup_scene);
        app.add_systems(
            Update,
            (
                attach_scene_visuals,
                (attach_orbit_cameras, drive_orbit_cameras).chain(),
                mirror_clothes_visibility,
            )
                .run_if(in_state(AppState::Running)),
        );
    }
}
