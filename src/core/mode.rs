//! Layer 4: mode classification
//!
//! A task's lifecycle mode is a total function of its snapshot and a
//! reference instant, evaluated by a fixed rule order. Exactly one mode
//! applies; modes are derived on every read and never persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::task::TaskSnapshot;
use super::time::WallClock;

/// Derived lifecycle stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Closed,
    Overdue,
    Warm,
    Awake,
    Asleep,
    Schedulable,
    Triage,
}

impl Mode {
    pub const ALL: [Mode; 7] = [
        Mode::Closed,
        Mode::Overdue,
        Mode::Warm,
        Mode::Awake,
        Mode::Asleep,
        Mode::Schedulable,
        Mode::Triage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Overdue => "overdue",
            Self::Warm => "warm",
            Self::Awake => "awake",
            Self::Asleep => "asleep",
            Self::Schedulable => "schedulable",
            Self::Triage => "triage",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derive the task's mode at `now`. First matching rule wins:
/// closed, overdue, warm, awake, asleep, schedulable, triage.
pub fn classify(task: &TaskSnapshot, now: WallClock) -> Mode {
    if task.closed.is_some() {
        return Mode::Closed;
    }
    if let Some(due) = task.due
        && due < now
    {
        return Mode::Overdue;
    }
    if task.warm {
        return Mode::Warm;
    }
    if let Some(wakeup) = task.wakeup {
        return if wakeup <= now { Mode::Awake } else { Mode::Asleep };
    }
    if task.pomodoros.is_some() && task.urgent.is_some() && task.important.is_some() {
        return Mode::Schedulable;
    }
    Mode::Triage
}
