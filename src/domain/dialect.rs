use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Target scripting language for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Host-native scripting language.
    #[default]
    MaxScript,
    /// Python through the host's embedded interpreter.
    Python,
}

const MAXSCRIPT_EXTENSIONS: &[&str] = &["ms", "mse", "mcr", "mzp"];
const PYTHON_EXTENSIONS: &[&str] = &["py", "pyc"];

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::MaxScript, Dialect::Python];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::MaxScript => "maxscript",
            Dialect::Python => "python",
        }
    }

    /// Resolve a dialect from a script file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Dialect> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        if MAXSCRIPT_EXTENSIONS.contains(&ext.as_str()) {
            Some(Dialect::MaxScript)
        } else if PYTHON_EXTENSIONS.contains(&ext.as_str()) {
            Some(Dialect::Python)
        } else {
            None
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "maxscript" | "mxs" => Ok(Dialect::MaxScript),
            "python" | "py" => Ok(Dialect::Python),
            _ => Err(AppError::InvalidDialect(s.to_string())),
        }
    }
}
