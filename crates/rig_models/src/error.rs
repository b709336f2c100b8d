//! Error types of the rig models.

use std::fmt;

/// Raised when an orbit camera cannot be set up.
#[derive(Debug, Clone, PartialEq)]
pub enum OrbitCameraError {
    /// The camera has nothing to orbit.
    InvalidConfiguration(String),
}

impl fmt::Display for OrbitCameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(msg) => write!(f, "invalid orbit camera configuration: {msg}"),
        }
    }
}

impl std::error::Error for OrbitCameraError {}

/// Failure while reading or writing a TOML config file.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: String, source: std::io::Error },
    Parse { path: String, source: toml::de::Error },
    Serialize(toml::ser::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to access config '{path}': {source}"),
            Self::Parse { path, source } => write!(f, "failed to parse config '{path}': {source}"),
            Self::Serialize(e) => write!(f, "failed to serialize config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Serialize(e) => Some(e),
        }
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e)
    }
}

/// Failure while loading or converting a scene description.
#[derive(Debug)]
pub enum SceneError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    /// Two entities share a name, so references to it are ambiguous.
    DuplicateName(String),
    /// An entity refers to a name that is not part of the scene.
    UnknownReference { entity: String, reference: String },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read scene: {e}"),
            Self::Parse(e) => write!(f, "failed to parse scene: {e}"),
            Self::DuplicateName(name) => write!(f, "entity name '{name}' is used more than once"),
            Self::UnknownReference { entity, reference } => {
                write!(f, "entity '{entity}' refers to unknown entity '{reference}'")
            }
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SceneError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SceneError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}
