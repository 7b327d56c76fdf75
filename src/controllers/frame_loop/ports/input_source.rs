use crate::core::navigation::controls::ControlsSnapshot;

/// Anything that can report what the user asked for since the last poll.
pub trait InputSource {
    fn poll(&mut self) -> ControlsSnapshot;
}
