use bevy::prelude::*;
use rig_models::config::GlobalConfig;
use rig_models::debug::{BuildInfo, WorldInspectorState};

pub struct DebugLogicComponent;

impl Plugin for DebugLogicComponent {

    #[cfg_attr(coverage_nightly, coverage(off))]
    fn build(&self, app: &mut App) {
        app.init_resource::<WorldInspectorState>();
        app.add_systems(Startup, log_build_info);
        app.add_systems(Update, toggle_world_inspector);
    }

}

/// Writes the build strings into the log once at startup.
///
/// # Parameters
/// * `build` - Optional build metadata (app name/version, Bevy version).
#[cfg_attr(coverage_nightly, coverage(off))]
fn log_build_info(build: Option<Res<BuildInfo>>) {
    let (app_name, app_ver, bevy_ver) = if let Some(b) = build {
        (b.app_name, b.app_version, b.bevy_version)
    } else { ("<app>", "?", "0.17.3") };

    info!("{app_name} {app_ver} running on Bevy {bevy_ver}");
}

/// Flips the world inspector visibility when the configured inspector key is pressed.
///
/// # Parameters
/// * `keys` - Keyboard state of the current frame.
/// * `global_config` - Source of the inspector key binding.
/// * `state` - Inspector visibility to toggle.
pub fn toggle_world_inspector(
    keys: Res<ButtonInput<KeyCode>>,
    global_config: Res<GlobalConfig>,
    mut state: ResMut<WorldInspectorState>,
) {
    if keys.just_pressed(global_config.input_config.get_inspector_key()) {
        state.0 = !state.0;
        debug!("World inspector visible: {}", state.0);
    }
}

/// Returns whether the world inspector is currently visible.
/// Safe to call when the resource is absent; defaults to `false`.
///
/// # Parameters
/// * `state` - Optional `WorldInspectorState` resource to read the flag from.
pub fn inspector_visible(state: Option<Res<WorldInspectorState>>) -> bool {
    state.is_some_and(|s| s.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<WorldInspectorState>()
            .insert_resource(GlobalConfig::default())
            .add_systems(Update, toggle_world_inspector);
        app
    }

    #[test]
    fn inspector_key_toggles_state() {
        let mut app = test_app();
        app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(KeyCode::F1);
        app.update();
        assert_eq!(*app.world().resource::<WorldInspectorState>(), WorldInspectorState(true));

        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.release(KeyCode::F1);
        keys.clear();
        keys.press(KeyCode::F1);
        app.update();
        assert_eq!(*app.world().resource::<WorldInspectorState>(), WorldInspectorState(false));
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut app = test_app();
        app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(KeyCode::F3);
        app.update();
        assert_eq!(*app.world().resource::<WorldInspectorState>(), WorldInspectorState(false));
    }

    #[test]
    fn inspector_visibility_condition() {
        let mut world = World::new();
        assert!(!world.run_system_cached(inspector_visible).unwrap());
        world.insert_resource(WorldInspectorState(true));
        assert!(world.run_system_cached(inspector_visible).unwrap());
    }
}
