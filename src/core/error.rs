//! Core capability errors (parsing, validation, ordering invariants).
//!
//! These are bounded and stable: they represent domain/refusal states,
//! not library implementation details. None of them is retried here; the
//! core is synchronous and side-effect-free, so retry policy belongs to
//! the storage collaborator.

use thiserror::Error;

use super::identity::TaskId;
use super::mode::Mode;
use super::view::View;

/// Generic range violation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{field} value {value} out of range {min}..={max}")]
pub struct RangeError {
    pub field: &'static str,
    pub value: i64,
    pub min: i64,
    pub max: i64,
}

/// Unknown context code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("context `{raw}` is not a known context code")]
pub struct ContextParseError {
    pub raw: String,
}

/// Unknown view name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("view `{raw}` is not a known view")]
pub struct ViewParseError {
    pub raw: String,
}

/// The classifier disagrees with the view the candidate set was filtered
/// for. Indicates a defect in the query that produced the candidates;
/// must be surfaced, never silently dropped.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("task classified as {mode}, which view `{view}` never surfaces")]
pub struct ViewMismatch {
    pub view: View,
    pub mode: Mode,
}

/// Inconsistent or unsatisfiable placement request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OrderError {
    #[error("anchor task {id} not found among siblings")]
    AnchorNotFound { id: TaskId },
    #[error("anchor task {id} matches more than one sibling")]
    AmbiguousAnchor { id: TaskId },
    #[error("a move may name a before anchor or an after anchor, not both")]
    InvalidRequest,
    #[error("no free order key between {lower} and {upper}; the container needs renumbering")]
    OrderSpaceExhausted { lower: i32, upper: i32 },
}

/// Umbrella over the core capability errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CoreError {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Context(#[from] ContextParseError),

    #[error(transparent)]
    View(#[from] ViewParseError),

    #[error(transparent)]
    Mismatch(#[from] ViewMismatch),

    #[error(transparent)]
    Order(#[from] OrderError),
}
