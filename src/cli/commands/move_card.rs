use clap::Args;

use super::super::{Ctx, render};
use crate::Result;
use crate::api::{MoveSpec, TaskDetail};
use crate::core::TaskId;

#[derive(Args, Debug)]
pub struct MoveArgs {
    /// Task id.
    pub id: i64,

    /// Place before this sibling.
    #[arg(long, value_name = "ID")]
    pub before: Option<i64>,

    /// Place after this sibling.
    #[arg(long, value_name = "ID")]
    pub after: Option<i64>,
}

pub(crate) fn handle_move(ctx: &mut Ctx, args: MoveArgs) -> Result<()> {
    let spec = MoveSpec {
        before: args.before.map(TaskId::new),
        after: args.after.map(TaskId::new),
    };
    let anchor = spec.anchor()?;

    let moved = ctx.store.move_task(TaskId::new(args.id), anchor)?;
    ctx.store.save()?;

    let detail = TaskDetail::derive(moved, ctx.now);
    ctx.print(&detail, || match detail.task.order_key {
        Some(key) => render::render_moved(detail.task.id, key),
        None => render::render_updated(detail.task.id, "moved"),
    })
}
