#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod logging;
mod manager;

use std::env;
use std::path::PathBuf;
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy::render::RenderPlugin;
use bevy::render::settings::{Backends, RenderCreation, WgpuSettings};
use bevy::window::{MonitorSelection, PresentMode, WindowMode, WindowResolution};
use rig_models::config::{GlobalConfig, GraphicsConfig};
use rig_models::debug::BuildInfo;
use rig_models::scene::SceneSource;
use crate::manager::{ConfigProblems, ManagerPlugin};

const CONFIG_DIR_VAR: &str = "ORBIT_RIG_CONFIG_DIR";
const SCENE_VAR: &str = "ORBIT_RIG_SCENE";
const LOG_FILTER_VAR: &str = "ORBIT_RIG_LOG";

const DEFAULT_CONFIG_DIR: &str = "config";
const DEFAULT_SCENE: &str = "assets/scenes/demo.scene.json";
const DEFAULT_LOG_FILTER: &str = "wgpu=error,naga=warn,orbit_rig=debug,rig_logic=debug,rig_models=debug";

#[cfg_attr(coverage_nightly, coverage(off))]
fn main() {
    // A missing .env file is fine, the defaults apply.
    let _ = dotenvy::dotenv();

    let config_dir = env::var(CONFIG_DIR_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let scene = env::var(SCENE_VAR).unwrap_or_else(|_| DEFAULT_SCENE.into());
    let (config, problems) = GlobalConfig::load_from_dir(&PathBuf::from(config_dir));

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: env::var(LOG_FILTER_VAR).unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
                    level: Level::INFO,
                    custom_layer: logging::file_layer,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(primary_window(&config.graphics_config)),
                    ..default()
                })
                .set(RenderPlugin {
                    render_creation: RenderCreation::Automatic(WgpuSettings {
                        backends: backends(&config.graphics_config.video_backend),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .insert_resource(BuildInfo {
            app_name: env!("CARGO_PKG_NAME"),
            app_version: env!("CARGO_PKG_VERSION"),
            bevy_version: "0.17.3",
        })
        .insert_resource(ConfigProblems(problems.iter().map(ToString::to_string).collect()))
        .insert_resource(SceneSource(PathBuf::from(scene)))
        .insert_resource(config)
        .add_plugins(ManagerPlugin)
        .run();
}

#[cfg_attr(coverage_nightly, coverage(off))]
fn primary_window(graphics: &GraphicsConfig) -> Window {
    Window {
        title: String::from("Orbit Rig"),
        resolution: WindowResolution::new(graphics.get_window_width(), graphics.get_window_height()),
        present_mode: if graphics.vsync { PresentMode::AutoVsync } else { PresentMode::AutoNoVsync },
        mode: if graphics.fullscreen {
            WindowMode::BorderlessFullscreen(MonitorSelection::Current)
        } else {
            WindowMode::Windowed
        },
        ..default()
    }
}

/// Maps the configured backend name onto wgpu backends. `None` lets wgpu pick.
fn backends(video_backend: &str) -> Option<Backends> {
    match video_backend.trim().to_ascii_uppercase().as_str() {
        "VULKAN" => Some(Backends::VULKAN),
        "DX12" => Some(Backends::DX12),
        "METAL" => Some(Backends::METAL),
        "GL" | "OPENGL" => Some(Backends::GL),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_names() {
        assert_eq!(backends("vulkan"), Some(Backends::VULKAN));
        assert_eq!(backends(" DX12 "), Some(Backends::DX12));
        assert_eq!(backends("OpenGL"), Some(Backends::GL));
        assert_eq!(backends("AUTO"), None);
    }
}
