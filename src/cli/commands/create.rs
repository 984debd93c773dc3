use clap::Args;

use super::super::{Ctx, parse_clock_opt, parse_context_opt, render};
use crate::Result;
use crate::api::TaskDetail;
use crate::core::{ContainerId, TaskId, TaskSnapshot};
use crate::store::TaskStore;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Task name (words are joined).
    #[arg(required = true)]
    pub name: Vec<String>,

    /// Context code for the new task.
    #[arg(long, value_name = "CODE")]
    pub context: Option<String>,

    /// Due date (YYYY-MM-DD or RFC3339).
    #[arg(long, value_name = "WHEN")]
    pub due: Option<String>,

    /// Wakeup time.
    #[arg(long, value_name = "WHEN")]
    pub wakeup: Option<String>,

    /// List to place the card on.
    #[arg(long, value_name = "LIST")]
    pub list: Option<i64>,

    /// Eat-that-frog marker.
    #[arg(long, default_value_t = false)]
    pub frog: bool,
}

pub(crate) fn handle_create(ctx: &mut Ctx, args: CreateArgs) -> Result<()> {
    let mut task = TaskSnapshot::new(TaskId::new(0), args.name.join(" "));
    task.context = parse_context_opt(args.context.as_deref())?.or(ctx.default_context);
    task.due = parse_clock_opt("due", args.due.as_deref())?;
    task.wakeup = parse_clock_opt("wakeup", args.wakeup.as_deref())?;
    task.container = args.list.map(ContainerId::new);
    task.frog = args.frog;

    let id = ctx.store.create(task)?;
    ctx.store.save()?;

    let detail = TaskDetail::derive(ctx.store.task(id)?, ctx.now);
    ctx.print(&detail, || render::render_created(&detail))
}
