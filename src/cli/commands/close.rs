use clap::Args;

use super::super::{Ctx, render};
use crate::Result;
use crate::core::TaskId;
use crate::store::TaskStore;

#[derive(Args, Debug)]
pub struct CloseArgs {
    /// Task id.
    pub id: i64,
}

pub(crate) fn handle_close(ctx: &mut Ctx, args: CloseArgs) -> Result<()> {
    let id = TaskId::new(args.id);
    let mut task = ctx.store.task(id)?;
    task.close(ctx.now);
    ctx.store.update(task)?;
    ctx.store.save()?;
    ctx.print(&id, || render::render_updated(id, "closed"))
}

pub(crate) fn handle_reopen(ctx: &mut Ctx, args: CloseArgs) -> Result<()> {
    let id = TaskId::new(args.id);
    let mut task = ctx.store.task(id)?;
    task.reopen();
    ctx.store.update(task)?;
    ctx.store.save()?;
    ctx.print(&id, || render::render_updated(id, "reopened"))
}
