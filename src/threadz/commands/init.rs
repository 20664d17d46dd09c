use crate::commands::{CmdMessage, CmdResult};
use crate::config::ThreadzConfig;
use crate::error::Result;
use std::fs;
use std::path::Path;

pub fn run(dir: &Path) -> Result<CmdResult> {
    fs::create_dir_all(dir)?;
    if !ThreadzConfig::exists(dir) {
        ThreadzConfig::default().save(dir)?;
    }

    let mut result = CmdResult::default();
    result.data_dir = Some(dir.to_path_buf());
    result.add_message(CmdMessage::success(format!(
        "Initialized threadz store at {}",
        dir.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_dir_and_default_config() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("store");

        run(&dir).unwrap();
        assert!(dir.is_dir());
        assert_eq!(ThreadzConfig::load(&dir).unwrap(), ThreadzConfig::default());
    }

    #[test]
    fn keeps_existing_config() {
        let temp = TempDir::new().unwrap();
        let config = ThreadzConfig {
            show_timestamps: true,
        };
        config.save(temp.path()).unwrap();

        run(temp.path()).unwrap();
        assert_eq!(ThreadzConfig::load(temp.path()).unwrap(), config);
    }
}
