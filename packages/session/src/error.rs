//! Session error types.

/// Errors surfaced at the session boundary. Engine internals are total and
/// never fail; only caller input can go wrong.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("unknown shot index: {0}")]
    UnknownShot(usize),
}
