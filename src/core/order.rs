//! Layer 5: order keys
//!
//! Fractional positioning: an inserted or moved card gets the floor
//! midpoint of its insertion gap, so siblings never need renumbering.
//! Keys are unique only within one container. When a gap closes to
//! adjacent integers the generator refuses with `OrderSpaceExhausted`;
//! there is no rebalancing pass here, that belongs to the caller.
//!
//! Callers must run the read-siblings / generate / persist sequence inside
//! a critical section scoped to the container; the generator itself is
//! pure and performs no locking.

use serde::{Deserialize, Serialize};

use super::error::{OrderError, RangeError};
use super::identity::TaskId;

/// Lowest assignable order key.
pub const MIN_ORDER: i32 = 1;
/// Highest assignable order key.
pub const MAX_ORDER: i32 = 2_147_483_646;

/// A card's position within its container.
///
/// Validated at construction - out-of-range values are unrepresentable
/// through `new`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderKey(i32);

impl OrderKey {
    pub fn new(raw: i32) -> Result<Self, RangeError> {
        if (MIN_ORDER..=MAX_ORDER).contains(&raw) {
            Ok(Self(raw))
        } else {
            Err(RangeError {
                field: "order_key",
                value: i64::from(raw),
                min: i64::from(MIN_ORDER),
                max: i64::from(MAX_ORDER),
            })
        }
    }

    pub const fn value(self) -> i32 {
        self.0
    }
}

/// One sibling in the container, as the storage collaborator snapshots it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sibling {
    pub id: TaskId,
    pub key: Option<OrderKey>,
}

impl Sibling {
    pub fn new(id: TaskId, key: Option<OrderKey>) -> Self {
        Self { id, key }
    }
}

/// Where the caller wants the card relative to its siblings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Append after the current last key.
    None,
    Before(TaskId),
    After(TaskId),
}

impl Anchor {
    /// Build from the boundary form of a move request: two optional ids,
    /// mutually exclusive.
    pub fn from_parts(before: Option<TaskId>, after: Option<TaskId>) -> Result<Self, OrderError> {
        match (before, after) {
            (Some(_), Some(_)) => Err(OrderError::InvalidRequest),
            (Some(id), None) => Ok(Self::Before(id)),
            (None, Some(id)) => Ok(Self::After(id)),
            (None, None) => Ok(Self::None),
        }
    }
}

/// Compute a key for a card joining or moving within `siblings`.
///
/// The result lies strictly inside its insertion gap and never equals an
/// existing key. An anchor that resolves to a sibling without a key of its
/// own places the card at the corresponding extreme.
pub fn generate(siblings: &[Sibling], anchor: Anchor) -> Result<OrderKey, OrderError> {
    let mut keys: Vec<i32> = siblings
        .iter()
        .filter_map(|s| s.key.map(OrderKey::value))
        .collect();
    keys.sort_unstable();
    keys.dedup();

    // No keyed siblings at all: center the card in the domain, leaving
    // maximal room on both sides. Anchors are moot in an unkeyed set.
    if keys.is_empty() {
        return Ok(OrderKey(midpoint(MIN_ORDER, MAX_ORDER)));
    }

    let (lower, upper) = match anchor {
        Anchor::None => (keys.last().copied(), None),
        Anchor::Before(id) => match resolve_anchor(siblings, id)? {
            None => (None, keys.first().copied()),
            Some(k) => (
                keys.iter().copied().filter(|&x| x < k.value()).max(),
                Some(k.value()),
            ),
        },
        Anchor::After(id) => match resolve_anchor(siblings, id)? {
            None => (keys.last().copied(), None),
            Some(k) => (
                Some(k.value()),
                keys.iter().copied().filter(|&x| x > k.value()).min(),
            ),
        },
    };

    let lo = lower.unwrap_or(MIN_ORDER);
    let hi = upper.unwrap_or(MAX_ORDER);
    let mid = midpoint(lo, hi);
    if lower == Some(mid) || upper == Some(mid) {
        return Err(OrderError::OrderSpaceExhausted {
            lower: lo,
            upper: hi,
        });
    }
    Ok(OrderKey(mid))
}

/// The anchor must name exactly one sibling; more than one match is a
/// data-corruption signal, not a tie to break.
fn resolve_anchor(siblings: &[Sibling], id: TaskId) -> Result<Option<OrderKey>, OrderError> {
    let mut matches = siblings.iter().filter(|s| s.id == id);
    let Some(found) = matches.next() else {
        return Err(OrderError::AnchorNotFound { id });
    };
    if matches.next().is_some() {
        return Err(OrderError::AmbiguousAnchor { id });
    }
    Ok(found.key)
}

fn midpoint(lo: i32, hi: i32) -> i32 {
    // Sum can exceed i32; the floor midpoint itself always fits.
    ((i64::from(lo) + i64::from(hi)) / 2) as i32
}

/// Presentation sort sentinel: a card without a key sorts as least.
/// Never persisted. Unset and an (unassignable) zero collapse together,
/// matching the original list-order helpers.
pub fn card_sort_key(key: Option<OrderKey>) -> i32 {
    key.map(OrderKey::value).unwrap_or(0)
}
