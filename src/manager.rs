use bevy::prelude::*;
use bevy_inspector_egui::bevy_egui::EguiPlugin;
use bevy_inspector_egui::quick::WorldInspectorPlugin;
use rig_logic::RigLogicPlugin;
use rig_logic::debug_logic::inspector_visible;
use rig_models::RigCorePlugin;

/// Config files that could not be loaded before logging was available.
#[derive(Resource, Default, Debug)]
pub struct ConfigProblems(pub Vec<String>);

/// Wires all rig plugins and the developer tooling into the app.
pub struct ManagerPlugin;

impl Plugin for ManagerPlugin {

    #[cfg_attr(coverage_nightly, coverage(off))]
    fn build(&self, app: &mut App) {
        app.add_plugins((RigCorePlugin, RigLogicPlugin));
        app.add_plugins(EguiPlugin::default());
        app.add_plugins(WorldInspectorPlugin::new().run_if(inspector_visible));
        app.init_resource::<ConfigProblems>();
        app.add_systems(Startup, report_config_problems);
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
fn report_config_problems(problems: Res<ConfigProblems>) {
    for problem in &problems.0 {
        warn!("{problem}, using defaults");
    }
}
