use std::io::{self, Stdout, Write};

use crate::domain::AppError;
use crate::ports::HostRuntime;

/// Host runtime stand-in that writes each script to a writer instead of
/// executing it. Used for dry runs and when no host program is configured.
#[derive(Debug)]
pub struct ConsoleHostRuntime<W: Write> {
    out: W,
}

impl ConsoleHostRuntime<Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleHostRuntime<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> HostRuntime for ConsoleHostRuntime<W> {
    fn submit(&mut self, script: &str) -> Result<(), AppError> {
        writeln!(self.out, "{}", script)?;
        self.out.flush()?;
        Ok(())
    }
}
