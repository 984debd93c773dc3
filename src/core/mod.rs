//! Pure task-lifecycle core
//!
//! Module hierarchy follows type dependency order:
//! - time: WallClock (Layer 0)
//! - identity: TaskId, ContainerId (Layer 1)
//! - context: context vocabulary (Layer 2)
//! - priority: PriorityCode codec (Layer 2)
//! - task: TaskSnapshot (Layer 3)
//! - mode: Mode + classifier (Layer 4)
//! - view: view catalog + paper order (Layer 5)
//! - order: order-key generation (Layer 5)
//!
//! Everything here is a pure function of its arguments: no storage, no
//! transport, no hidden caches, no locking. Callers may invoke any of it
//! concurrently without coordination.

pub mod context;
pub mod error;
pub mod identity;
pub mod mode;
pub mod order;
pub mod priority;
pub mod task;
pub mod time;
pub mod view;

pub use context::Context;
pub use error::{ContextParseError, CoreError, OrderError, RangeError, ViewMismatch, ViewParseError};
pub use identity::{ContainerId, TaskId};
pub use mode::{Mode, classify};
pub use order::{
    Anchor, MAX_ORDER, MIN_ORDER, OrderKey, Sibling, card_sort_key, generate,
};
pub use priority::{
    PriorityCode, PriorityLetter, PriorityStep, StepDirection, priority_sort_key,
};
pub use task::TaskSnapshot;
pub use time::WallClock;
pub use view::{PaperKey, View, allowed_modes, classify_for_view, compare_for_paper, paper_sort_key};
