use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{Builder, TempPath};

use crate::domain::AppError;

/// Writes scripts to uniquely named files for the host to read.
///
/// A staged file lives as long as the returned [`TempPath`] and is removed
/// when it is dropped.
#[derive(Debug, Clone)]
pub struct ScriptStager {
    dir: PathBuf,
}

impl ScriptStager {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Stage `contents` as `maxgpt_<random>.<extension>`.
    pub fn stage(&self, contents: &str, extension: &str) -> Result<TempPath, AppError> {
        std::fs::create_dir_all(&self.dir)?;
        let suffix = format!(".{}", extension);
        let mut file = Builder::new().prefix("maxgpt_").suffix(&suffix).tempfile_in(&self.dir)?;
        file.write_all(contents.as_bytes())?;
        file.flush()?;
        let path = file.into_temp_path();
        tracing::debug!(path = %path.display(), "staged script");
        Ok(path)
    }
}
