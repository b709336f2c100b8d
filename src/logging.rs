use std::env;
use std::fs::{create_dir_all, File};
use std::path::PathBuf;
use std::sync::Mutex;
use bevy::log::BoxedLayer;
use bevy::prelude::*;
use chrono::{DateTime, Local};
use tracing_subscriber::Layer;

const LOG_DIR_VAR: &str = "ORBIT_RIG_LOG_DIR";
const DEFAULT_LOG_DIR: &str = "logs";

/// Extra log layer for [`LogPlugin`](bevy::log::LogPlugin) that mirrors every record into a
/// timestamped file below `ORBIT_RIG_LOG_DIR` (default `logs/`).
///
/// Runs while the log plugin is being built, so failures can only go to stderr.
#[cfg_attr(coverage_nightly, coverage(off))]
pub fn file_layer(_app: &mut App) -> Option<BoxedLayer> {
    let dir = env::var(LOG_DIR_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_DIR));

    if let Err(err) = create_dir_all(&dir) {
        eprintln!("Log directory '{}' unavailable: {err}", dir.display());
        return None;
    }

    let path = dir.join(log_file_name(Local::now()));
    let file = match File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Log file '{}' unavailable: {err}", path.display());
            return None;
        }
    };

    Some(
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .boxed(),
    )
}

fn log_file_name(now: DateTime<Local>) -> String {
    format!("orbit_rig_{}.log", now.format("%Y-%m-%d_%H-%M-%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn file_name_carries_timestamp() {
        let now = Local.with_ymd_and_hms(2026, 10, 17, 9, 5, 3).unwrap();
        assert_eq!(log_file_name(now), "orbit_rig_2026-10-17_09-05-03.log");
    }
}
