use bevy::ecs::system::SystemParam;
use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;
use rig_models::camera::{
    world_to_rig, InputSample, OrbitCamera, OrbitCameraState, PointerInput, PoseSink,
};
use rig_models::config::GlobalConfig;

/// Reads one [`InputSample`] per frame from Bevy's mouse resources.
///
/// The drag button comes from the input config. Bevy reports upward pointer movement as a
/// negative `y`, the sample flips it so "mouse up" means looking up.
#[derive(SystemParam)]
pub struct PointerSampler<'w> {
    buttons: Res<'w, ButtonInput<MouseButton>>,
    motion: Res<'w, AccumulatedMouseMotion>,
    scroll: Res<'w, AccumulatedMouseScroll>,
    config: Res<'w, GlobalConfig>,
}

impl PointerInput for PointerSampler<'_> {
    fn sample(&self) -> InputSample {
        InputSample {
            drag_active: self.buttons.pressed(self.config.input_config.get_orbit_drag_button()),
            mouse_dx: self.motion.delta.x,
            mouse_dy: -self.motion.delta.y,
            scroll: self.scroll.delta.y,
        }
    }
}

/// Initializes every newly spawned [`OrbitCamera`] against its target and places it.
/// Cameras without a resolvable target are reported and left uninitialized.
///
/// The pivot is the target's world position from its `GlobalTransform`, so parented targets
/// are orbited where they are rendered.
pub fn attach_orbit_cameras(
    mut commands: Commands,
    mut cameras: Query<(Entity, &OrbitCamera, &mut Transform), Added<OrbitCamera>>,
    targets: Query<&GlobalTransform, Without<OrbitCamera>>,
) {
    for (entity, orbit, mut transform) in cameras.iter_mut() {
        let target_position = orbit
            .target
            .and_then(|target| targets.get(target).ok())
            .map(|target| world_to_rig(target.translation()));

        match OrbitCameraState::initialize(target_position, &orbit.settings) {
            Ok(state) => {
                transform.write_pose(state.pose);
                debug!("Orbit camera {entity} attached at {}", state.pose.position);
                commands.entity(entity).insert(state);
            }
            Err(err) => error!("Orbit camera {entity}: {err}"),
        }
    }
}

/// Moves all initialized orbit cameras while the drag button is held.
///
/// The pivot follows the target's current world position. A despawned target leaves the
/// camera orbiting the last known position.
pub fn drive_orbit_cameras(
    input: PointerSampler,
    mut cameras: Query<(&OrbitCamera, &mut OrbitCameraState, &mut Transform)>,
    targets: Query<&GlobalTransform, Without<OrbitCamera>>,
) {
    let sample = input.sample();
    if !sample.drag_active {
        return;
    }

    for (orbit, mut state, mut transform) in cameras.iter_mut() {
        let target_position = orbit
            .target
            .and_then(|target| targets.get(target).ok())
            .map_or(state.target_position, |target| world_to_rig(target.translation()));

        state.step(target_position, &sample, &mut transform);
    }
}
