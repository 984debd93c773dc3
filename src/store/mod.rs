//! Storage collaborator boundary.
//!
//! The core is pure; a `TaskStore` owns persistence and the
//! container-scoped critical section the order-key generator requires:
//! the read-siblings / generate / persist sequence for one container must
//! not interleave with another writer in that container.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Context, ContainerId, OrderError, TaskId, TaskSnapshot, WallClock};

pub mod file;

pub use file::FileStore;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    #[error("task {id} not found")]
    NotFound { id: TaskId },

    #[error("task {id} has no container to order within")]
    NoContainer { id: TaskId },

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error("store io: {0}")]
    Io(#[from] std::io::Error),

    #[error("store data: {0}")]
    Data(#[from] serde_json::Error),
}

/// What the rest of the system asks of storage. Implementations persist
/// snapshots by value and keep order keys unique per container.
pub trait TaskStore {
    /// Load one task.
    fn task(&self, id: TaskId) -> Result<TaskSnapshot, StoreError>;

    /// Load every task.
    fn all(&self) -> Result<Vec<TaskSnapshot>, StoreError>;

    /// Load the tasks sharing a container, the order-key sibling set.
    fn container(&self, container: ContainerId) -> Result<Vec<TaskSnapshot>, StoreError>;

    /// Persist a new task under a storage-assigned id; returns that id.
    /// Tasks created into a container are appended to its order.
    fn create(&mut self, task: TaskSnapshot) -> Result<TaskId, StoreError>;

    /// Persist changes to an existing task.
    fn update(&mut self, task: TaskSnapshot) -> Result<(), StoreError>;

    /// Context codes currently in use by open tasks. Implementations may
    /// serve this from a [`Cached`] value.
    fn contexts(&mut self, now: WallClock) -> Result<Vec<Context>, StoreError>;
}

/// A collaborator-owned cached lookup with an explicit expiry.
///
/// Auxiliary lookups may be memoized, but only as a visible value with a
/// visible deadline - never as hidden process-wide state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cached<T> {
    value: T,
    expires_at: WallClock,
}

impl<T> Cached<T> {
    pub fn new(value: T, expires_at: WallClock) -> Self {
        Self { value, expires_at }
    }

    pub fn expires_at(&self) -> WallClock {
        self.expires_at
    }

    pub fn is_fresh(&self, now: WallClock) -> bool {
        now < self.expires_at
    }

    /// The value, if still fresh at `now`.
    pub fn get(&self, now: WallClock) -> Option<&T> {
        self.is_fresh(now).then_some(&self.value)
    }

    pub fn into_value(self) -> T {
        self.value
    }
}
