use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayError {
    #[error("no default display available")]
    Unavailable,

    #[error("display query timed out after {0} ms")]
    Timeout(u64),

    #[error("display query failed: {0}")]
    Query(String),
}

/// Failures reported by the window toolkit. `code` mirrors the platform's
/// nonzero error codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("window creation failed (code {code}): {message}")]
    Create { code: i32, message: String },

    #[error("loading window content failed (code {code}): {message}")]
    Content { code: i32, message: String },

    #[error("window operation `{op}` failed (code {code})")]
    Operation { op: &'static str, code: i32 },

    #[error("window already destroyed")]
    Destroyed,
}
