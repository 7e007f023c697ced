use thiserror::Error;

/// Contract violations raised by the run finder. These are caller (or
/// internal) mistakes, never data conditions.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("window size = {0} but must be at least 2")]
    WindowTooSmall(usize),
    #[error("difference set must contain at least one difference")]
    EmptyDifferences,
}

pub type RunResult<T> = Result<T, InvalidArgument>;
