//! Crate-level convenience error.
//!
//! Not a "god error": a thin wrapper over the canonical capability errors,
//! plus a retry classification for collaborators that want one.

use thiserror::Error;

use crate::core::{
    ContextParseError, CoreError, OrderError, RangeError, ViewMismatch, ViewParseError,
};
use crate::store::StoreError;

/// Whether retrying this operation may succeed.
///
/// The core itself never retries anything; this exists so calling
/// collaborators can route failures without string-matching messages.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Transience {
    /// Retry will never help without changing inputs/state.
    Permanent,
    /// Retry may help (transient contention/outage).
    Retryable,
}

impl Transience {
    pub fn is_retryable(self) -> bool {
        matches!(self, Transience::Retryable)
    }
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("config: {reason}")]
    Config { reason: String },

    #[error("invalid {field}: {reason}")]
    Invalid { field: String, reason: String },
}

impl Error {
    /// Every core refusal is permanent; only storage I/O might clear up
    /// on its own.
    pub fn transience(&self) -> Transience {
        match self {
            Self::Store(StoreError::Io(_)) => Transience::Retryable,
            _ => Transience::Permanent,
        }
    }
}

impl From<OrderError> for Error {
    fn from(err: OrderError) -> Self {
        Self::Core(err.into())
    }
}

impl From<ViewMismatch> for Error {
    fn from(err: ViewMismatch) -> Self {
        Self::Core(err.into())
    }
}

impl From<ViewParseError> for Error {
    fn from(err: ViewParseError) -> Self {
        Self::Core(err.into())
    }
}

impl From<ContextParseError> for Error {
    fn from(err: ContextParseError) -> Self {
        Self::Core(err.into())
    }
}

impl From<RangeError> for Error {
    fn from(err: RangeError) -> Self {
        Self::Core(err.into())
    }
}
