#![forbid(unsafe_code)]

//! TaskMaster: a personal task/kanban manager built around a small pure
//! core - mode classification, fractional order keys, a packed priority
//! codec - with storage and presentation kept behind collaborator
//! boundaries.

pub mod api;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
mod paths;
pub mod store;
pub mod telemetry;

pub use error::{Error, Transience};
pub type Result<T> = std::result::Result<T, Error>;

// Re-export core types at crate root for convenience
pub use crate::core::{
    Anchor, Context, ContainerId, MAX_ORDER, MIN_ORDER, Mode, OrderKey, PriorityCode,
    PriorityLetter, PriorityStep, Sibling, StepDirection, TaskId, TaskSnapshot, View, WallClock,
    allowed_modes, card_sort_key, classify, classify_for_view, compare_for_paper, generate,
    paper_sort_key, priority_sort_key,
};
