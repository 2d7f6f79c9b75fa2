use std::io;
use std::path::{Path, PathBuf};

use crate::error::AppResult;

const APP_DIR: &str = ".reticule";
const CONFIG_FILE: &str = "reticule";

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
    config_file: PathBuf,
}

impl AppPaths {
    pub fn discover() -> AppResult<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no user home directory defined")
        })?;

        Ok(Self::from_home(home))
    }

    pub fn from_home(home: impl Into<PathBuf>) -> Self {
        let config_dir = home.into().join(APP_DIR);
        let config_file = config_dir.join(CONFIG_FILE);

        Self {
            config_dir,
            config_file,
        }
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}
