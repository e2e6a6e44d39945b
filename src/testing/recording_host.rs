use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::AppError;
use crate::ports::HostRuntime;

/// Host runtime that records submitted scripts. Clones share state.
#[derive(Clone, Default)]
pub struct RecordingHostRuntime {
    scripts: Rc<RefCell<Vec<String>>>,
    should_fail: Rc<RefCell<bool>>,
}

impl RecordingHostRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.borrow_mut() = fail;
    }

    pub fn scripts(&self) -> Vec<String> {
        self.scripts.borrow().clone()
    }
}

impl HostRuntime for RecordingHostRuntime {
    fn submit(&mut self, script: &str) -> Result<(), AppError> {
        if *self.should_fail.borrow() {
            return Err(AppError::HostRuntime("host unavailable".to_string()));
        }
        self.scripts.borrow_mut().push(script.to_string());
        Ok(())
    }
}
