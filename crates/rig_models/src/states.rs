use bevy::prelude::*;

/// Top level application state.
///
/// The app starts in `Loading` until the startup scene has been converted into entities,
/// rig systems only run in `Running`.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}
