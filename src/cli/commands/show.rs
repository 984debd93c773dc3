use clap::Args;

use super::super::{Ctx, render};
use crate::Result;
use crate::api::TaskDetail;
use crate::core::TaskId;
use crate::store::TaskStore;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Task id.
    pub id: i64,
}

pub(crate) fn handle_show(ctx: &mut Ctx, args: ShowArgs) -> Result<()> {
    let task = ctx.store.task(TaskId::new(args.id))?;
    let detail = TaskDetail::derive(task, ctx.now);
    ctx.print(&detail, || render::render_detail(&detail))
}
