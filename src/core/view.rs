//! Layer 5: view catalog
//!
//! A view is a caller's declared intent: the set of modes its result set
//! may legitimately contain, plus the total order used for the printable
//! "paper" listing. A classification that lands outside the view's set is
//! a contract violation surfaced as a typed error, never swallowed and
//! never an assert.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{ViewMismatch, ViewParseError};
use super::mode::{Mode, classify};
use super::task::TaskSnapshot;
use super::time::WallClock;

/// Caller-declared result-set intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    All,
    Open,
    Triage,
    Schedule,
    Stage,
    Execute,
    Closed,
    Paper,
}

impl View {
    pub const ALL: [View; 8] = [
        View::All,
        View::Open,
        View::Triage,
        View::Schedule,
        View::Stage,
        View::Execute,
        View::Closed,
        View::Paper,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Open => "open",
            Self::Triage => "triage",
            Self::Schedule => "schedule",
            Self::Stage => "stage",
            Self::Execute => "execute",
            Self::Closed => "closed",
            Self::Paper => "paper",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = ViewParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ViewParseError { raw: s.to_string() })
    }
}

/// The modes a view may legitimately surface. Never empty.
pub fn allowed_modes(view: View) -> &'static [Mode] {
    use Mode::*;
    match view {
        View::All | View::Paper => &[Closed, Overdue, Warm, Awake, Asleep, Schedulable, Triage],
        View::Open => &[Overdue, Warm, Awake, Asleep, Schedulable, Triage],
        View::Triage => &[Overdue, Warm, Awake, Asleep, Triage],
        View::Schedule => &[Schedulable, Triage, Overdue],
        View::Stage => &[Warm, Awake, Overdue],
        View::Execute => &[Warm, Overdue],
        View::Closed => &[Closed],
    }
}

/// Classify, then verify the mode belongs in `view`. A mismatch means the
/// query that produced the candidate set disagrees with the classifier:
/// a defect to surface, not a value to filter out.
pub fn classify_for_view(
    task: &TaskSnapshot,
    view: View,
    now: WallClock,
) -> Result<Mode, ViewMismatch> {
    let mode = classify(task, now);
    if allowed_modes(view).contains(&mode) {
        Ok(mode)
    } else {
        Err(ViewMismatch { view, mode })
    }
}

/// Sort key for the unrestricted paper listing. Tuples compare
/// lexicographically ascending: overdue first, then warm and awake ranked
/// urgent-first then important-first, then asleep by nearest wake time,
/// then everything else unordered among itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct PaperKey {
    rank: u8,
    first: u64,
    second: u64,
}

/// Compute the paper-order key for one task at `now`.
///
/// Unset urgent/important tiebreak fields count as not set; the original
/// sort helpers conflate the two and this keeps their ordering.
pub fn paper_sort_key(task: &TaskSnapshot, now: WallClock) -> PaperKey {
    let not_urgent = u64::from(task.urgent != Some(true));
    let not_important = u64::from(task.important != Some(true));
    match classify(task, now) {
        Mode::Overdue => PaperKey {
            rank: 0,
            first: 0,
            second: 0,
        },
        Mode::Warm => PaperKey {
            rank: 1,
            first: not_urgent,
            second: not_important,
        },
        Mode::Awake => PaperKey {
            rank: 2,
            first: not_urgent,
            second: not_important,
        },
        Mode::Asleep => PaperKey {
            rank: 3,
            first: task.wakeup.map(WallClock::as_ms).unwrap_or(0),
            second: 0,
        },
        Mode::Closed | Mode::Schedulable | Mode::Triage => PaperKey {
            rank: 4,
            first: 0,
            second: 0,
        },
    }
}

/// Total order over classified tasks for the paper listing.
pub fn compare_for_paper(a: &TaskSnapshot, b: &TaskSnapshot, now: WallClock) -> Ordering {
    paper_sort_key(a, now).cmp(&paper_sort_key(b, now))
}
