use clap::Args;

use super::super::{Ctx, invalid, parse_clock_opt, render};
use crate::Result;
use crate::core::TaskId;
use crate::store::TaskStore;

#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Task id.
    pub id: i64,

    /// Wakeup time (YYYY-MM-DD or RFC3339).
    pub when: String,
}

pub(crate) fn handle_schedule(ctx: &mut Ctx, args: ScheduleArgs) -> Result<()> {
    let Some(wakeup) = parse_clock_opt("wakeup", Some(&args.when))? else {
        return Err(invalid("wakeup", "no time given"));
    };

    let id = TaskId::new(args.id);
    let mut task = ctx.store.task(id)?;
    task.schedule(wakeup);
    ctx.store.update(task)?;
    ctx.store.save()?;
    ctx.print(&id, || render::render_updated(id, "scheduled"))
}
