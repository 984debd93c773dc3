use super::super::{Ctx, render};
use crate::Result;
use crate::store::TaskStore;

pub(crate) fn handle_contexts(ctx: &mut Ctx) -> Result<()> {
    let now = ctx.now;
    let contexts = ctx.store.contexts(now)?;
    ctx.print(&contexts, || render::render_contexts(&contexts))
}
