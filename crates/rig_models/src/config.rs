use std::fs::{read_to_string, write};
use std::path::Path;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use crate::camera::OrbitCameraSettings;
use crate::error::ConfigError;
use crate::key_utils::{convert, convert_mouse};

pub const GRAPHICS_FILE: &str = "graphics.toml";
pub const INPUT_FILE: &str = "input.toml";
pub const CAMERA_FILE: &str = "camera.toml";

// =================================================================================================
//
//                                            Global
//
// =================================================================================================

#[derive(Resource, Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct GlobalConfig {
    pub graphics_config: GraphicsConfig,
    pub input_config: InputConfig,
    pub camera_config: OrbitCameraSettings,
}

impl GlobalConfig {

    /// Loads a configuration file and deserializes it into the specified type.
    ///
    /// # Arguments
    /// - `path`: The file path of the configuration file to load.
    ///
    /// # Errors
    /// [`ConfigError::Io`] if the file cannot be read, [`ConfigError::Parse`] if it is no
    /// valid TOML for `T`.
    pub fn load<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, ConfigError> {
        let content = read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Loads a single file, falling back to the default value if it is missing or broken.
    /// The reason for the fallback is pushed to `problems`.
    fn load_or_default<T: for<'de> Deserialize<'de> + Default>(
        path: &Path,
        problems: &mut Vec<ConfigError>,
    ) -> T {
        Self::load(path).unwrap_or_else(|err| {
            problems.push(err);
            T::default()
        })
    }

    /// Creates a new `GlobalConfig` from all configuration files inside `dir`.
    ///
    /// Every file that cannot be loaded is replaced by its defaults. The config is usually
    /// read before logging is up, so the problems are returned for the caller to report.
    pub fn load_from_dir(dir: &Path) -> (Self, Vec<ConfigError>) {
        let mut problems = Vec::new();
        let config = Self {
            graphics_config: Self::load_or_default(&dir.join(GRAPHICS_FILE), &mut problems),
            input_config: Self::load_or_default(&dir.join(INPUT_FILE), &mut problems),
            camera_config: Self::load_or_default(&dir.join(CAMERA_FILE), &mut problems),
        };
        (config, problems)
    }

    /// Saves a specified file with his name.
    fn save<T: Serialize>(data: &T, path: &Path) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(data)?;
        write(path, toml_string).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// Saves all known config files into `dir`.
    /// This func used `GlobalConfig::save` for saving.
    pub fn save_all(&self, dir: &Path) -> Result<(), ConfigError> {
        Self::save(&self.graphics_config, &dir.join(GRAPHICS_FILE))?;
        Self::save(&self.input_config, &dir.join(INPUT_FILE))?;
        Self::save(&self.camera_config, &dir.join(CAMERA_FILE))
    }

}

// =================================================================================================
//
//                                            Graphics
//
// =================================================================================================

/// Serializable graphics configuration for windowing and rendering.
/// Stores human-readable strings (e.g., resolution `"1270x720"`, backend `"AUTO"`)
/// and toggles for fullscreen and vertical sync.
#[derive(Resource, Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GraphicsConfig {
    /// Window resolution string in the form `"<width>x<height>"`.
    pub window_resolution: String,

    /// Whether to start in fullscreen mode.
    pub fullscreen: bool,
    /// Whether to enable vertical sync.
    pub vsync: bool,

    /// Requested graphics backend (e.g., `"AUTO"`, `"VULKAN"`, `"DX12"`, `"METAL"`).
    pub video_backend: String,
}

impl Default for GraphicsConfig {
    fn default() -> Self {
        Self {
            window_resolution: String::from("1270x720"),
            fullscreen: false,
            vsync: true,
            video_backend: String::from("AUTO")
        }
    }
}

impl GraphicsConfig {

    /// Parses and returns the configured window width in pixels.
    ///
    /// Falls back to `1280` if parsing fails.
    pub fn get_window_width(&self) -> u32 {
        let (width, _) = parse_resolution(self.window_resolution.as_str())
            .unwrap_or((1280, 720));
        width
    }

    /// Parses and returns the configured window height in pixels.
    ///
    /// Falls back to `720` if parsing fails.
    pub fn get_window_height(&self) -> u32 {
        let (_, height) = parse_resolution(self.window_resolution.as_str())
            .unwrap_or((1280, 720));
        height
    }
}

// =================================================================================================
//
//                                            Input
//
// =================================================================================================

/// Serializable input configuration mapping high-level actions to key names.
/// Stores human-readable key strings (e.g., "F1", "MouseRight") that are later
/// converted into engine `KeyCode`s and `MouseButton`s at runtime.
#[derive(Resource, Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Toggle developer inspector overlay.
    pub inspector: String,
    /// Mouse button that has to be held to orbit and zoom the camera.
    pub orbit_drag: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            inspector: String::from("F1"),
            orbit_drag: String::from("MouseRight"),
        }
    }
}

impl InputConfig {
    pub fn get_inspector_key(&self) -> KeyCode {
        convert(self.inspector.as_str()).unwrap_or(KeyCode::F1)
    }

    pub fn get_orbit_drag_button(&self) -> MouseButton {
        convert_mouse(self.orbit_drag.as_str()).unwrap_or(MouseButton::Right)
    }
}

// =================================================================================================
//
//                                         Internal Func
//
// =================================================================================================

/// Parses a resolution string in the form `"<width>x<height>"` (case-insensitive `x`)
/// into a pair of positive dimensions.
///
/// Accepts optional surrounding whitespace and trims each side. Width and
/// height must parse to numbers greater than zero; otherwise an error string
/// is returned.
///
/// # Parameters
/// * `s` - Input string like `"1280x720"` or `"1920X1080"`.
fn parse_resolution(s: &str) -> Result<(u32, u32), String> {
    let (w_str, h_str) = s
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("Wrong Format: '{}'. Example z. B. 1280x720", s))?;

    let w: u32 = w_str.trim().parse()
        .map_err(|_| format!("Width is not a number: '{}'", w_str.trim()))?;
    let h: u32 = h_str.trim().parse()
        .map_err(|_| format!("Height is not a number: '{}'", h_str.trim()))?;

    if w == 0 || h == 0 {
        return Err("Width / Height needs a positive number like > 0".into());
    }
    Ok((w, h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_parsing() {
        assert_eq!(parse_resolution("1920X1080"), Ok((1920, 1080)));
        assert_eq!(parse_resolution(" 800 x 600 "), Ok((800, 600)));
        assert!(parse_resolution("1920").is_err());
        assert!(parse_resolution("0x720").is_err());
        assert!(parse_resolution("ax720").is_err());
    }

    #[test]
    fn broken_resolution_falls_back() {
        let config = GraphicsConfig { window_resolution: "huge".into(), ..default() };
        assert_eq!(config.get_window_width(), 1280);
        assert_eq!(config.get_window_height(), 720);
    }

    #[test]
    fn input_bindings_resolve() {
        let config = InputConfig::default();
        assert_eq!(config.get_inspector_key(), KeyCode::F1);
        assert_eq!(config.get_orbit_drag_button(), MouseButton::Right);

        let custom = InputConfig { inspector: "F5".into(), orbit_drag: "nonsense".into() };
        assert_eq!(custom.get_inspector_key(), KeyCode::F5);
        assert_eq!(custom.get_orbit_drag_button(), MouseButton::Right);
    }

    #[test]
    fn camera_settings_from_toml() {
        let settings: OrbitCameraSettings = toml::from_str(
            "offset = [1.0, 3.0, 0.0]\npitch_limit = -120.0\nzoom_max = 12.0\n",
        )
        .unwrap();
        assert_eq!(settings.offset, Vec3::new(1.0, 3.0, 0.0));
        assert_eq!(settings.pitch_limit, -120.0);
        assert_eq!(settings.zoom_max, 12.0);
        assert_eq!(settings.zoom_min, OrbitCameraSettings::default().zoom_min);
    }

    #[test]
    fn save_and_load_directory() {
        let dir = std::env::temp_dir().join(format!("orbit_rig_config_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let mut config = GlobalConfig::default();
        config.input_config.orbit_drag = "MouseMiddle".into();
        config.camera_config.sensitivity = 0.5;
        config.save_all(&dir).unwrap();

        let (loaded, problems) = GlobalConfig::load_from_dir(&dir);
        assert!(problems.is_empty());
        assert_eq!(loaded, config);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_directory_uses_defaults() {
        let (config, problems) = GlobalConfig::load_from_dir(Path::new("does/not/exist"));
        assert_eq!(config, GlobalConfig::default());
        assert_eq!(problems.len(), 3);
        assert!(problems.iter().all(|p| matches!(p, ConfigError::Io { .. })));
    }

    #[test]
    fn broken_file_reports_path() {
        let dir = std::env::temp_dir().join(format!("orbit_rig_broken_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(INPUT_FILE);
        std::fs::write(&path, "inspector = [").unwrap();

        let err = GlobalConfig::load::<InputConfig>(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(INPUT_FILE));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
