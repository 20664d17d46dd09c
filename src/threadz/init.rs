use crate::api::ThreadzApi;
use crate::config::ThreadzConfig;
use crate::error::{Result, ThreadzError};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Overrides the data directory, mainly for tests and portable setups.
pub const HOME_ENV: &str = "THREADZ_HOME";

pub struct ThreadzContext {
    pub api: ThreadzApi<FileStore>,
    pub config: ThreadzConfig,
}

/// Picks the data directory: `override_dir` when given, otherwise the
/// platform data directory.
pub fn resolve_data_dir(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir.filter(|d| !d.as_os_str().is_empty()) {
        return Ok(dir);
    }
    let proj_dirs = ProjectDirs::from("com", "threadz", "threadz")
        .ok_or_else(|| ThreadzError::Store("Could not determine data dir".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

pub fn initialize(override_dir: Option<PathBuf>) -> Result<ThreadzContext> {
    let data_dir = resolve_data_dir(override_dir)?;
    let config = ThreadzConfig::load(&data_dir).unwrap_or_else(|e| {
        log::warn!("ignoring unreadable config: {}", e);
        ThreadzConfig::default()
    });

    let store = FileStore::new(data_dir.clone());
    let api = ThreadzApi::new(store, data_dir);

    Ok(ThreadzContext { api, config })
}
