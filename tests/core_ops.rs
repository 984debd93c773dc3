//! End-to-end checks of the pure core through the public API: order-key
//! placement, mode classification against views, the priority ladder and
//! the paper listing order.

use std::cmp::Ordering;

use taskmaster::core::OrderError;
use taskmaster::{
    Anchor, MAX_ORDER, MIN_ORDER, Mode, OrderKey, PriorityCode, Sibling, StepDirection, TaskId,
    TaskSnapshot, View, WallClock, classify, classify_for_view, compare_for_paper, generate,
};

const NOW: WallClock = WallClock(1_700_000_000_000);

fn sib(id: i64, key: i32) -> Sibling {
    Sibling::new(TaskId::new(id), Some(OrderKey::new(key).expect("key in range")))
}

fn task(name: &str) -> TaskSnapshot {
    TaskSnapshot::new(TaskId::new(1), name)
}

#[test]
fn before_interior_anchor_yields_midpoint() {
    let siblings = [sib(1, 10), sib(2, 20), sib(3, 30)];
    let key = generate(&siblings, Anchor::Before(TaskId::new(2))).expect("key");
    assert_eq!(key.value(), 15);
}

#[test]
fn after_last_anchor_splits_toward_domain_max() {
    let siblings = [sib(1, 10), sib(2, 20), sib(3, 30)];
    let key = generate(&siblings, Anchor::After(TaskId::new(3))).expect("key");
    assert_eq!(key.value(), 1_073_741_838);
}

#[test]
fn empty_container_centers_the_domain() {
    let key = generate(&[], Anchor::None).expect("key");
    assert_eq!(key.value(), 1_073_741_823);
}

#[test]
fn adjacent_neighbors_exhaust_order_space() {
    let siblings = [sib(1, 5), sib(2, 6)];
    let err = generate(&siblings, Anchor::Before(TaskId::new(2))).unwrap_err();
    assert!(matches!(err, OrderError::OrderSpaceExhausted { .. }));
}

#[test]
fn midpoint_law_holds_across_gaps_and_anchors() {
    let boards: [&[(i64, i32)]; 4] = [
        &[(1, 100)],
        &[(1, 10), (2, 20), (3, 30)],
        &[(1, MIN_ORDER), (2, 1000), (3, MAX_ORDER)],
        &[(1, 7), (2, 9), (3, 5000), (4, 5002)],
    ];
    for board in boards {
        let siblings: Vec<Sibling> = board.iter().map(|&(id, k)| sib(id, k)).collect();
        let keys: Vec<i32> = board.iter().map(|&(_, k)| k).collect();
        let mut anchors = vec![Anchor::None];
        for &(id, _) in board {
            anchors.push(Anchor::Before(TaskId::new(id)));
            anchors.push(Anchor::After(TaskId::new(id)));
        }
        for anchor in anchors {
            match generate(&siblings, anchor) {
                Ok(key) => {
                    let k = key.value();
                    assert!((MIN_ORDER..=MAX_ORDER).contains(&k));
                    assert!(!keys.contains(&k), "{anchor:?} produced duplicate {k}");
                    // Strictly inside the insertion gap.
                    let lower = keys.iter().copied().filter(|&x| x < k).max();
                    let upper = keys.iter().copied().filter(|&x| x > k).min();
                    if let Some(lo) = lower {
                        assert!(k > lo);
                    }
                    if let Some(hi) = upper {
                        assert!(k < hi);
                    }
                }
                Err(OrderError::OrderSpaceExhausted { lower, upper }) => {
                    assert!(upper - lower <= 1, "gap {lower}..{upper} was not full");
                }
                Err(other) => panic!("unexpected error: {other}"),
            }
        }
    }
}

#[test]
fn closed_task_is_a_mismatch_under_execute() {
    let mut t = task("shredded");
    t.close(WallClock(NOW.as_ms() - 1_000));
    let err = classify_for_view(&t, View::Execute, NOW).unwrap_err();
    assert_eq!(err.mode, Mode::Closed);
    assert_eq!(err.view, View::Execute);
}

#[test]
fn past_due_beats_warm() {
    let mut t = task("pay rent");
    t.due = Some(WallClock(NOW.as_ms() - 86_400_000));
    t.stage();
    assert_eq!(classify(&t, NOW), Mode::Overdue);
}

#[test]
fn classification_is_deterministic_and_total() {
    let clocks = [None, Some(WallClock(1)), Some(NOW)];
    for closed in clocks {
        for due in clocks {
            for warm in [false, true] {
                for wakeup in clocks {
                    for triaged in [false, true] {
                        let mut t = task("sweep");
                        t.closed = closed;
                        t.due = due;
                        t.warm = warm;
                        t.wakeup = wakeup;
                        if triaged {
                            t.set_triage(true, false, 1);
                        }
                        let first = classify(&t, NOW);
                        assert_eq!(classify(&t, NOW), first);
                        assert!(classify_for_view(&t, View::All, NOW).is_ok());
                    }
                }
            }
        }
    }
}

#[test]
fn priority_ladder_up_then_down() {
    let mut code = PriorityCode::new(0);
    assert_eq!(code.letter(), None);

    let mut up_ranks = Vec::new();
    for _ in 0..4 {
        let step = code.step(StepDirection::Increase);
        assert!(step.delta > 0);
        code = step.code;
        up_ranks.push(code.letter());
    }
    // Letter rank climbs and parks at the top while minor detail absorbs
    // the last raise.
    assert!(up_ranks.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*up_ranks.last().expect("steps"), code.letter());

    let mut down_letters = Vec::new();
    let mut last_delta = 0;
    for _ in 0..5 {
        let step = code.step(StepDirection::Decrease);
        code = step.code;
        last_delta = step.delta;
        down_letters.push(code.letter());
    }
    assert!(down_letters.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(code.letter(), None);
    assert_eq!(last_delta, 0, "extra decrease past the floor is a no-op");
}

#[test]
fn paper_listing_orders_mixed_board() {
    let mut overdue = task("overdue");
    overdue.due = Some(WallClock(NOW.as_ms() - 10_000));

    let mut warm_urgent = task("warm urgent");
    warm_urgent.stage();
    warm_urgent.set_triage(true, false, 1);

    let mut warm_plain = task("warm plain");
    warm_plain.stage();

    let mut asleep = task("asleep");
    asleep.wakeup = Some(WallClock(NOW.as_ms() + 60_000));

    let mut board = vec![&warm_plain, &asleep, &warm_urgent, &overdue];
    board.sort_by(|a, b| compare_for_paper(a, b, NOW));
    let names: Vec<&str> = board.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["overdue", "warm urgent", "warm plain", "asleep"]);

    // The order is total: comparing any pair is never inconsistent.
    for a in &board {
        for b in &board {
            let ab = compare_for_paper(a, b, NOW);
            let ba = compare_for_paper(b, a, NOW);
            assert_eq!(ab, ba.reverse());
            if std::ptr::eq(*a, *b) {
                assert_eq!(ab, Ordering::Equal);
            }
        }
    }
}
