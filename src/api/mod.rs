//! Boundary schemas for clients (`--json` output and request forms).
//!
//! Truthful boundary: derived fields (mode, letter, flags) ride alongside
//! the full snapshot instead of replacing it, so no information is
//! silently dropped on the way out.

use serde::{Deserialize, Serialize};

use crate::core::{
    Anchor, Mode, OrderError, PriorityCode, PriorityLetter, PriorityStep, TaskId, TaskSnapshot,
    WallClock, classify,
};

/// One task as clients see it: the snapshot plus everything derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDetail {
    #[serde(flatten)]
    pub task: TaskSnapshot,
    pub mode: Mode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter: Option<PriorityLetter>,
    pub flags: String,
}

impl TaskDetail {
    pub fn derive(task: TaskSnapshot, now: WallClock) -> Self {
        let mode = classify(&task, now);
        let letter = task.priority.and_then(PriorityCode::letter);
        let flags = task.flag_summary();
        Self {
            task,
            mode,
            letter,
            flags,
        }
    }
}

/// A move request as clients state it: two optional anchors, mutually
/// exclusive. Validation happens once, here at the boundary.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MoveSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<TaskId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<TaskId>,
}

impl MoveSpec {
    pub fn anchor(self) -> Result<Anchor, OrderError> {
        Anchor::from_parts(self.before, self.after)
    }
}

/// Result of a priority step, ready to print or serialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepOutcome {
    pub id: TaskId,
    pub delta: i16,
    pub code: PriorityCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter: Option<PriorityLetter>,
    pub saturated: bool,
}

impl StepOutcome {
    pub fn new(id: TaskId, step: PriorityStep) -> Self {
        Self {
            id,
            delta: step.delta,
            code: step.code,
            letter: step.code.letter(),
            saturated: step.saturated(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{StepDirection, TaskId};

    #[test]
    fn detail_carries_snapshot_and_derivations() {
        let mut task = TaskSnapshot::new(TaskId::new(4), "sharpen saw");
        task.priority = Some(PriorityCode::new(0b0001_0000));
        task.urgent = Some(true);
        let detail = TaskDetail::derive(task, WallClock(1_000));
        assert_eq!(detail.mode, Mode::Triage);
        assert_eq!(detail.letter, Some(PriorityLetter::B));
        assert_eq!(detail.flags, "U--");

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["name"], "sharpen saw");
        assert_eq!(json["mode"], "triage");
    }

    #[test]
    fn move_spec_rejects_double_anchor() {
        let spec = MoveSpec {
            before: Some(TaskId::new(1)),
            after: Some(TaskId::new(2)),
        };
        assert!(spec.anchor().is_err());
    }

    #[test]
    fn step_outcome_reports_saturation() {
        let code = PriorityCode::new(0);
        let outcome = StepOutcome::new(TaskId::new(1), code.step(StepDirection::Decrease));
        assert!(outcome.saturated);
        assert_eq!(outcome.delta, 0);
        assert_eq!(outcome.letter, None);
    }
}
