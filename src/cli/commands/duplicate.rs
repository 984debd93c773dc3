use clap::Args;

use super::super::{Ctx, render};
use crate::Result;
use crate::api::TaskDetail;
use crate::core::TaskId;
use crate::store::TaskStore;

#[derive(Args, Debug)]
pub struct DuplicateArgs {
    /// Task id.
    pub id: i64,
}

pub(crate) fn handle_duplicate(ctx: &mut Ctx, args: DuplicateArgs) -> Result<()> {
    let source = ctx.store.task(TaskId::new(args.id))?;
    let copy = source.duplicate_as(TaskId::new(0));
    let id = ctx.store.create(copy)?;
    ctx.store.save()?;

    let detail = TaskDetail::derive(ctx.store.task(id)?, ctx.now);
    ctx.print(&detail, || render::render_created(&detail))
}
