use clap::Args;

use super::super::{Ctx, render};
use crate::Result;
use crate::core::TaskId;
use crate::store::TaskStore;

#[derive(Args, Debug)]
pub struct StageArgs {
    /// Task id.
    pub id: i64,
}

pub(crate) fn handle_stage(ctx: &mut Ctx, args: StageArgs, on: bool) -> Result<()> {
    let id = TaskId::new(args.id);
    let mut task = ctx.store.task(id)?;
    if on {
        task.stage();
    } else {
        task.unstage();
    }
    ctx.store.update(task)?;
    ctx.store.save()?;
    let what = if on { "staged" } else { "unstaged" };
    ctx.print(&id, || render::render_updated(id, what))
}
