use std::path::PathBuf;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::HostRuntime;
use crate::services::ScriptStager;

/// Runs scripts through a host batch executable.
///
/// Each script is staged as a `.ms` file and passed as the last argument to
/// `program`. The host's output goes to the inherited console; the call blocks
/// until the program exits, after which the staged file is removed.
#[derive(Debug, Clone)]
pub struct ProcessHostRuntime {
    program: PathBuf,
    args: Vec<String>,
    stager: ScriptStager,
}

impl ProcessHostRuntime {
    pub fn new(program: PathBuf, args: Vec<String>, stager: ScriptStager) -> Self {
        Self { program, args, stager }
    }
}

impl HostRuntime for ProcessHostRuntime {
    fn submit(&mut self, script: &str) -> Result<(), AppError> {
        let staged = self.stager.stage(script, "ms")?;

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(staged.as_os_str())
            .status();
        drop(staged);
        let status = status.map_err(|e| {
            AppError::HostRuntime(format!("failed to launch {}: {}", self.program.display(), e))
        })?;

        if !status.success() {
            return Err(AppError::HostRuntime(format!(
                "{} exited with {}",
                self.program.display(),
                status
            )));
        }

        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn staged_count(dir: &TempDir) -> usize {
        std::fs::read_dir(dir.path()).unwrap().count()
    }

    #[test]
    fn successful_program_accepts_script() {
        let dir = TempDir::new().unwrap();
        let mut runtime = ProcessHostRuntime::new(
            PathBuf::from("true"),
            vec![],
            ScriptStager::new(dir.path().to_path_buf()),
        );

        runtime.submit("box()").unwrap();
        runtime.submit("sphere()").unwrap();

        assert_eq!(staged_count(&dir), 0);
    }

    #[test]
    fn failing_program_is_host_runtime_error() {
        let dir = TempDir::new().unwrap();
        let mut runtime = ProcessHostRuntime::new(
            PathBuf::from("false"),
            vec![],
            ScriptStager::new(dir.path().to_path_buf()),
        );

        let err = runtime.submit("box()").unwrap_err();
        assert!(matches!(err, AppError::HostRuntime(_)));
        assert_eq!(staged_count(&dir), 0);
    }

    #[test]
    fn missing_program_is_host_runtime_error() {
        let dir = TempDir::new().unwrap();
        let mut runtime = ProcessHostRuntime::new(
            dir.path().join("no-such-host"),
            vec![],
            ScriptStager::new(dir.path().to_path_buf()),
        );

        let err = runtime.submit("box()").unwrap_err();
        assert!(err.to_string().contains("failed to launch"));
        assert_eq!(staged_count(&dir), 0);
    }
}
