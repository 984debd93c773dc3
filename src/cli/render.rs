//! Human renderer for CLI outputs.
//!
//! Pure formatting; handlers gather any extra data needed.

use crate::api::{StepOutcome, TaskDetail};
use crate::core::{Context, OrderKey, TaskId, WallClock};

pub(crate) fn render_task_list(items: &[TaskDetail]) -> String {
    if items.is_empty() {
        return "no tasks".to_string();
    }
    let mut out = String::new();
    for detail in items {
        out.push_str(&render_task_line(detail));
        out.push('\n');
    }
    out.pop();
    out
}

pub(crate) fn render_task_line(detail: &TaskDetail) -> String {
    let poms = detail
        .task
        .pomodoros
        .map(|p| p.to_string())
        .unwrap_or_else(|| "-".to_string());
    let letter = detail.letter.map(|l| l.as_str()).unwrap_or("-");
    format!(
        "{:>4}  {:<11}  {}  {}  {:>4}  {:<16}  {}",
        detail.task.id,
        detail.mode.as_str().to_uppercase(),
        detail.flags,
        letter,
        poms,
        fmt_clock_opt(detail.task.wakeup),
        detail.task.name
    )
}

pub(crate) fn render_detail(detail: &TaskDetail) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}: {}\n", detail.task.id, detail.task.name));
    out.push_str(&format!("  Mode: {}\n", detail.mode));
    out.push_str(&format!("  Flags: {}\n", detail.flags));
    if let Some(letter) = detail.letter {
        out.push_str(&format!("  Priority: {}\n", letter.as_str()));
    }
    if let Some(p) = detail.task.pomodoros {
        out.push_str(&format!("  Pomodoros: {p}\n"));
    }
    if let Some(ctx) = detail.task.context {
        out.push_str(&format!("  Context: {ctx}\n"));
    }
    if let Some(due) = detail.task.due {
        out.push_str(&format!("  Due: {}\n", fmt_clock(due)));
    }
    if let Some(wakeup) = detail.task.wakeup {
        out.push_str(&format!("  Wakeup: {}\n", fmt_clock(wakeup)));
    }
    if let Some(closed) = detail.task.closed {
        out.push_str(&format!("  Closed: {}\n", fmt_clock(closed)));
    }
    if let Some(container) = detail.task.container {
        let key = detail
            .task
            .order_key
            .map(|k| k.value().to_string())
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!("  List: {container} (order {key})\n"));
    }
    out.pop();
    out
}

pub(crate) fn render_created(detail: &TaskDetail) -> String {
    format!("created task {}: {}", detail.task.id, detail.task.name)
}

pub(crate) fn render_updated(id: TaskId, what: &str) -> String {
    format!("{what} task {id}")
}

pub(crate) fn render_step(outcome: &StepOutcome, raised: bool) -> String {
    if outcome.saturated {
        let end = if raised { "maximum" } else { "minimum" };
        return format!("task {} already at {end} priority", outcome.id);
    }
    let letter = outcome.letter.map(|l| l.as_str()).unwrap_or("-");
    format!(
        "task {} now priority {} (delta {:+})",
        outcome.id, letter, outcome.delta
    )
}

pub(crate) fn render_moved(id: TaskId, key: OrderKey) -> String {
    format!("moved task {id} to order {}", key.value())
}

pub(crate) fn render_contexts(contexts: &[Context]) -> String {
    if contexts.is_empty() {
        return "no contexts in use".to_string();
    }
    contexts
        .iter()
        .map(Context::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn fmt_clock_opt(clock: Option<WallClock>) -> String {
    clock.map(fmt_clock).unwrap_or_else(|| "-".to_string())
}

pub(crate) fn fmt_clock(clock: WallClock) -> String {
    let nanos = i128::from(clock.as_ms()) * 1_000_000;
    let Ok(dt) = time::OffsetDateTime::from_unix_timestamp_nanos(nanos) else {
        return clock.as_ms().to_string();
    };
    let Ok(fmt) = time::format_description::parse("[year]-[month]-[day] [hour]:[minute]") else {
        return clock.as_ms().to_string();
    };
    dt.format(&fmt).unwrap_or_else(|_| clock.as_ms().to_string())
}
