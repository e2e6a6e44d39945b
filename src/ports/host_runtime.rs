use crate::domain::AppError;

/// Port for the host application's scripting engine.
///
/// Accepts one string of host-language source. There is no structured result:
/// faults raised by the script surface only as host console output. An `Err`
/// means the script could not be handed over at all.
///
/// `submit` returns once the host no longer needs the script or any file it
/// references; callers remove staged files right after.
pub trait HostRuntime {
    fn submit(&mut self, script: &str) -> Result<(), AppError>;
}

impl<T: HostRuntime + ?Sized> HostRuntime for Box<T> {
    fn submit(&mut self, script: &str) -> Result<(), AppError> {
        (**self).submit(script)
    }
}
