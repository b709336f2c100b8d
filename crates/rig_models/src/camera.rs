use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use crate::error::OrbitCameraError;
use crate::serde_math::vec3_array;

/// Upper bound for the configurable pitch limit in degrees. Anything above would let
/// the camera flip over the pivot.
pub const MAX_PITCH_LIMIT: f32 = 90.0;

// =================================================================================================
//
//                                           Settings
//
// =================================================================================================

/// Configuration surface of an orbit camera. Usually loaded once from `config/camera.toml`
/// or from a scene file and never touched at runtime.
#[derive(Reflect, Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct OrbitCameraSettings {
    /// Camera position relative to the pivot. The `z` part is ignored, the initial zoom
    /// distance is always derived from `zoom_max`.
    #[serde(with = "vec3_array")]
    pub offset: Vec3,
    /// Degrees of rotation per unit of pointer movement.
    pub sensitivity: f32,
    /// Maximum pitch in degrees, clamped into `[0, 90]`.
    pub pitch_limit: f32,
    /// Distance moved per scroll notch.
    pub zoom_step: f32,
    /// Farthest zoom distance.
    pub zoom_max: f32,
    /// Closest zoom distance (only enforced while zooming out).
    pub zoom_min: f32,
}

impl Default for OrbitCameraSettings {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 2.0, 0.0),
            sensitivity: 0.2,
            pitch_limit: 60.0,
            zoom_step: 0.25,
            zoom_max: 10.0,
            zoom_min: 3.0,
        }
    }
}

// =================================================================================================
//
//                                          Components
//
// =================================================================================================

/// Marks a camera entity that orbits `target`. The runtime state is attached separately as
/// [`OrbitCameraState`] once the camera got initialized.
#[derive(Component, Reflect, Debug, Clone, Default)]
#[reflect(Component)]
pub struct OrbitCamera {
    pub target: Option<Entity>,
    pub settings: OrbitCameraSettings,
}

impl OrbitCamera {
    pub fn new(target: Entity, settings: OrbitCameraSettings) -> Self {
        Self { target: Some(target), settings }
    }
}

/// World transform produced by the rig.
///
/// The rig computes in a left-handed frame where the camera looks along `+Z` and a negative
/// `offset.z` places it behind the pivot. Use [`CameraPose::to_transform`] to get the
/// equivalent Bevy transform.
#[derive(Reflect, Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl CameraPose {
    /// Mirrors the pose along the Z axis into Bevy's right-handed `-Z` forward convention.
    pub fn to_transform(&self) -> Transform {
        let q = self.rotation;
        Transform::from_translation(world_to_rig(self.position))
            .with_rotation(Quat::from_xyzw(-q.x, -q.y, q.z, q.w))
    }
}

/// Mirrors a point between Bevy world space and the rig frame. The mirror is its own
/// inverse, so the same call maps rig points back into the world.
pub fn world_to_rig(point: Vec3) -> Vec3 {
    Vec3::new(point.x, point.y, -point.z)
}

/// One frame of pointer input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSample {
    /// Whether the drag button is held this frame.
    pub drag_active: bool,
    pub mouse_dx: f32,
    /// Positive when the pointer moved up.
    pub mouse_dy: f32,
    /// Positive when scrolling towards the pivot.
    pub scroll: f32,
}

/// Source of per-frame pointer input.
pub trait PointerInput {
    fn sample(&self) -> InputSample;
}

impl PointerInput for InputSample {
    fn sample(&self) -> InputSample {
        *self
    }
}

/// Receiver of the camera pose, usually the camera's own `Transform`.
pub trait PoseSink {
    fn write_pose(&mut self, pose: CameraPose);
}

impl PoseSink for Transform {
    fn write_pose(&mut self, pose: CameraPose) {
        let transform = pose.to_transform();
        self.translation = transform.translation;
        self.rotation = transform.rotation;
    }
}

impl PoseSink for Mut<'_, Transform> {
    fn write_pose(&mut self, pose: CameraPose) {
        let transform = pose.to_transform();
        self.translation = transform.translation;
        self.rotation = transform.rotation;
    }
}

impl PoseSink for Option<CameraPose> {
    fn write_pose(&mut self, pose: CameraPose) {
        *self = Some(pose);
    }
}

// =================================================================================================
//
//                                             State
//
// =================================================================================================

/// Runtime state of an orbit camera. Angles are in degrees.
#[derive(Component, Reflect, Debug, Clone, PartialEq)]
#[reflect(Component)]
pub struct OrbitCameraState {
    pub target_position: Vec3,
    pub offset: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub sensitivity: f32,
    pub zoom_step: f32,
    pub zoom_min: f32,
    pub zoom_max: f32,
    pub pitch_limit: f32,
    pub pose: CameraPose,
}

impl OrbitCameraState {

    /// Builds the initial state for a camera orbiting `target_position`.
    ///
    /// The pitch limit is forced into `[0, 90]`, the zoom bounds are stored as absolute
    /// values and the camera starts half way out to `zoom_max` with an identity rotation.
    ///
    /// # Errors
    /// [`OrbitCameraError::InvalidConfiguration`] if there is no target to orbit.
    pub fn initialize(
        target_position: Option<Vec3>,
        settings: &OrbitCameraSettings,
    ) -> Result<Self, OrbitCameraError> {
        let target_position = target_position.ok_or_else(|| {
            OrbitCameraError::InvalidConfiguration("orbit camera has no target".into())
        })?;

        let zoom_max = settings.zoom_max.abs();
        let zoom_min = settings.zoom_min.abs();
        let offset = Vec3::new(settings.offset.x, settings.offset.y, -zoom_max / 2.0);

        Ok(Self {
            target_position,
            offset,
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: settings.sensitivity,
            zoom_step: settings.zoom_step,
            zoom_min,
            zoom_max,
            pitch_limit: settings.pitch_limit.abs().min(MAX_PITCH_LIMIT),
            pose: CameraPose {
                position: target_position + offset,
                rotation: Quat::IDENTITY,
            },
        })
    }

    /// Advances the rig by one frame and returns the resulting pose.
    ///
    /// Nothing changes unless the drag button is held. Non-finite input is not filtered.
    pub fn update(&mut self, target_position: Vec3, input: &InputSample) -> CameraPose {
        if !input.drag_active {
            return self.pose;
        }

        // Zooming in has no bound, only the zoom-out branch is clamped.
        if input.scroll > 0.0 {
            self.offset.z += self.zoom_step;
        } else if input.scroll < 0.0 {
            self.offset.z = clamp_unordered(
                self.offset.z - self.zoom_step,
                -self.zoom_max,
                -self.zoom_min,
            );
        }

        self.yaw += input.mouse_dx * self.sensitivity;
        self.pitch = clamp_unordered(
            self.pitch + input.mouse_dy * self.sensitivity,
            -self.pitch_limit,
            self.pitch_limit,
        );

        let rotation = Quat::from_euler(
            EulerRot::YXZ,
            self.yaw.to_radians(),
            (-self.pitch).to_radians(),
            0.0,
        );

        self.target_position = target_position;
        self.pose = CameraPose {
            position: target_position + rotation * self.offset,
            rotation,
        };
        self.pose
    }

    /// Samples `input`, updates the rig and hands the pose to `sink` while dragging.
    /// Returns whether the sink was written.
    pub fn step(
        &mut self,
        target_position: Vec3,
        input: &impl PointerInput,
        sink: &mut impl PoseSink,
    ) -> bool {
        let sample = input.sample();
        if !sample.drag_active {
            return false;
        }
        let pose = self.update(target_position, &sample);
        sink.write_pose(pose);
        true
    }
}

/// Clamp that checks the lower bound first and never panics, even for `min > max` or NaN.
pub fn clamp_unordered(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
