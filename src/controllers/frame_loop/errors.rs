use thiserror::Error;

/// Failures that end a session. Render pass failures are logged by the frame
/// loop instead and never show up here.
#[derive(Debug, Error)]
pub enum FrameLoopError<E: std::error::Error + 'static> {
    #[error("display surface failed: {0}")]
    Surface(#[source] E),
}
