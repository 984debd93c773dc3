//! Layer 1: identity newtypes
//!
//! Ids are storage-assigned integers; the core treats them as opaque.
//! Newtypes keep task and container ids from crossing in signatures.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of one task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(i64);

impl TaskId {
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The list/collection a task's order key is scoped to. Order keys are
/// unique only within one container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ContainerId(i64);

impl ContainerId {
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
