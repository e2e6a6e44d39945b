//! Protective execution of generated scripts in the host runtime.

use std::path::Path;

use tempfile::TempPath;

use crate::domain::script::{
    normalize_code, protect, python_execute_file, python_execute_inline, verbatim_path_literal,
};
use crate::domain::{AppError, Dialect};
use crate::ports::HostRuntime;
use crate::services::ScriptStager;

/// How python code is handed to the host's embedded interpreter.
#[derive(Debug, Clone)]
pub enum PythonRoute {
    /// Stage the code as a `.py` file and call `python.executeFile` on it.
    StagedFile(ScriptStager),
    /// Escape the code into a `python.execute` string argument.
    Inline,
}

/// Host script ready for submission.
///
/// Holds the staged file the script refers to, if any; the file is removed
/// when this value is dropped.
#[derive(Debug)]
pub struct PreparedScript {
    text: String,
    staged: Option<TempPath>,
}

impl PreparedScript {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn staged_path(&self) -> Option<&Path> {
        self.staged.as_deref()
    }
}

/// Wraps code in a try/catch and submits it to the host runtime.
///
/// Execution is best effort: faults raised by the script are printed by the
/// host, and failures to stage or submit are logged. Nothing is reported back.
pub struct ExecutionGateway<H: HostRuntime> {
    runtime: H,
    python: PythonRoute,
}

impl<H: HostRuntime> ExecutionGateway<H> {
    pub fn new(runtime: H, python: PythonRoute) -> Self {
        Self { runtime, python }
    }

    /// Build the host script that runs `code_text` as `dialect`.
    ///
    /// Staged routes write the code to disk as part of this call.
    pub fn wrap(&self, code_text: &str, dialect: Dialect) -> Result<PreparedScript, AppError> {
        let code = normalize_code(code_text);
        match dialect {
            Dialect::MaxScript => Ok(PreparedScript { text: protect(code), staged: None }),
            Dialect::Python => match &self.python {
                PythonRoute::Inline => Ok(PreparedScript {
                    text: protect(&python_execute_inline(code)),
                    staged: None,
                }),
                PythonRoute::StagedFile(stager) => {
                    let staged = stager.stage(&format!("{}\n", code), "py")?;
                    let text = protect(&python_execute_file(&staged)?);
                    Ok(PreparedScript { text, staged: Some(staged) })
                }
            },
        }
    }

    /// Host script that runs an existing script file.
    pub fn wrap_file(&self, path: &Path, dialect: Dialect) -> Result<String, AppError> {
        let call = match dialect {
            Dialect::MaxScript => format!("filein {}", verbatim_path_literal(path)?),
            Dialect::Python => python_execute_file(path)?,
        };
        Ok(protect(&call))
    }

    /// Run `code_text` in the host. A staged file is removed once the runtime
    /// returns.
    pub fn execute(&mut self, code_text: &str, dialect: Dialect) {
        match self.wrap(code_text, dialect) {
            Ok(prepared) => self.submit(prepared.text()),
            Err(err) => tracing::warn!(%dialect, "could not prepare script: {err}"),
        }
    }

    pub fn execute_file(&mut self, path: &Path, dialect: Dialect) {
        match self.wrap_file(path, dialect) {
            Ok(script) => self.submit(&script),
            Err(err) => tracing::warn!(path = %path.display(), "could not prepare script: {err}"),
        }
    }

    /// Validate a script file, then execute it in the dialect given by its
    /// extension.
    pub fn run_file(&mut self, path: &Path) -> Result<Dialect, AppError> {
        let dialect = prepare_file(path)?;
        let absolute = std::path::absolute(path)?;
        self.execute_file(&absolute, dialect);
        Ok(dialect)
    }

    pub fn runtime(&self) -> &H {
        &self.runtime
    }

    fn submit(&mut self, script: &str) {
        tracing::debug!(bytes = script.len(), "submitting script to host");
        if let Err(err) = self.runtime.submit(script) {
            tracing::warn!("host runtime rejected script: {err}");
        }
    }
}

/// Validate that `path` is an existing script file and resolve its dialect.
pub(crate) fn prepare_file(path: &Path) -> Result<Dialect, AppError> {
    if !path.is_file() {
        return Err(AppError::InvalidFilePath(path.display().to_string()));
    }
    Dialect::from_path(path).ok_or_else(|| AppError::UnsupportedFileType(path.display().to_string()))
}
