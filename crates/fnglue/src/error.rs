use thiserror::Error;

/// Boxed cause retained by [`GlueError::Wrapped`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum GlueError {
    /// The adapted callable failed. The original error (or the captured
    /// panic message) is preserved as this error's `source()`.
    #[error("wrapped callable failed: {0}")]
    Wrapped(#[source] BoxError),
}

/// Cause type for panics captured at the adapter boundary. Carries the
/// panic payload's message so it survives as the cause chain's display.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct PanicMessage(pub(crate) String);

impl PanicMessage {
    /// The captured panic message.
    pub fn message(&self) -> &str {
        &self.0
    }
}

pub type Result<T> = std::result::Result<T, GlueError>;
