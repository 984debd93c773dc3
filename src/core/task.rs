//! Layer 3: the task snapshot
//!
//! The record the classifier and generators read. Absence is `None`,
//! never a falsy sentinel. Owned and persisted by the storage
//! collaborator; the core reads and returns these by value and holds no
//! state between calls.

use serde::{Deserialize, Serialize};

use super::context::Context;
use super::identity::{ContainerId, TaskId};
use super::order::OrderKey;
use super::priority::PriorityCode;
use super::time::WallClock;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    pub id: TaskId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<PriorityCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub important: Option<bool>,
    #[serde(default)]
    pub frog: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pomodoros: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wakeup: Option<WallClock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<WallClock>,
    #[serde(default)]
    pub warm: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed: Option<WallClock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_key: Option<OrderKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerId>,
}

impl TaskSnapshot {
    /// A fresh open task with nothing decided yet.
    pub fn new(id: TaskId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            priority: None,
            urgent: None,
            important: None,
            frog: false,
            pomodoros: None,
            wakeup: None,
            due: None,
            warm: false,
            closed: None,
            context: None,
            order_key: None,
            container: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.closed.is_none()
    }

    pub fn close(&mut self, at: WallClock) {
        self.closed = Some(at);
    }

    pub fn reopen(&mut self) {
        self.closed = None;
    }

    /// Mark ready to execute.
    pub fn stage(&mut self) {
        self.warm = true;
    }

    /// Send back to the shelf.
    pub fn unstage(&mut self) {
        self.warm = false;
    }

    pub fn schedule(&mut self, wakeup: WallClock) {
        self.wakeup = Some(wakeup);
    }

    /// Record the three triage decisions together. A task is schedulable
    /// only once all three are present.
    pub fn set_triage(&mut self, urgent: bool, important: bool, pomodoros: u32) {
        self.urgent = Some(urgent);
        self.important = Some(important);
        self.pomodoros = Some(pomodoros);
    }

    /// A fresh open copy under a new id. Name, context and container carry
    /// over; schedule, triage and ordering state do not.
    pub fn duplicate_as(&self, id: TaskId) -> Self {
        Self {
            context: self.context,
            container: self.container,
            ..Self::new(id, self.name.clone())
        }
    }

    /// Compact urgent/important/frog glyphs for list renderers.
    pub fn flag_summary(&self) -> String {
        let mut out = String::with_capacity(3);
        out.push(if self.urgent == Some(true) { 'U' } else { '-' });
        out.push(if self.important == Some(true) { 'I' } else { '-' });
        out.push(if self.frog { 'F' } else { '-' });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> TaskSnapshot {
        TaskSnapshot::new(TaskId::new(1), "water the plants")
    }

    #[test]
    fn close_and_reopen() {
        let mut t = task();
        assert!(t.is_open());
        t.close(WallClock(1_000));
        assert_eq!(t.closed, Some(WallClock(1_000)));
        t.reopen();
        assert!(t.is_open());
    }

    #[test]
    fn triage_sets_all_three_decisions() {
        let mut t = task();
        t.set_triage(true, false, 2);
        assert_eq!(t.urgent, Some(true));
        assert_eq!(t.important, Some(false));
        assert_eq!(t.pomodoros, Some(2));
    }

    #[test]
    fn duplicate_keeps_placement_not_state() {
        let mut t = task();
        t.context = Some(Context::Hmdy);
        t.container = Some(ContainerId::new(7));
        t.set_triage(true, true, 1);
        t.stage();
        t.close(WallClock(5));

        let copy = t.duplicate_as(TaskId::new(2));
        assert_eq!(copy.id, TaskId::new(2));
        assert_eq!(copy.name, t.name);
        assert_eq!(copy.context, Some(Context::Hmdy));
        assert_eq!(copy.container, Some(ContainerId::new(7)));
        assert!(copy.is_open());
        assert!(!copy.warm);
        assert_eq!(copy.urgent, None);
        assert_eq!(copy.order_key, None);
    }

    #[test]
    fn flag_summary_glyphs() {
        let mut t = task();
        assert_eq!(t.flag_summary(), "---");
        t.urgent = Some(true);
        t.frog = true;
        assert_eq!(t.flag_summary(), "U-F");
        t.urgent = Some(false);
        t.important = Some(true);
        assert_eq!(t.flag_summary(), "-I-");
    }

    #[test]
    fn snapshot_round_trips_with_absent_fields_omitted() {
        let t = task();
        let json = serde_json::to_string(&t).unwrap();
        assert!(!json.contains("wakeup"));
        let parsed: TaskSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, t);
    }
}
