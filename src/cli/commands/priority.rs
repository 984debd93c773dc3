use clap::Args;

use super::super::{Ctx, render};
use crate::Result;
use crate::api::StepOutcome;
use crate::core::{StepDirection, TaskId};
use crate::store::TaskStore;

#[derive(Args, Debug)]
pub struct PriorityArgs {
    /// Task id.
    pub id: i64,
}

pub(crate) fn handle_step(
    ctx: &mut Ctx,
    args: PriorityArgs,
    direction: StepDirection,
) -> Result<()> {
    let id = TaskId::new(args.id);
    let mut task = ctx.store.task(id)?;

    let step = task.priority.unwrap_or_default().step(direction);
    task.priority = Some(step.code);
    ctx.store.update(task)?;
    ctx.store.save()?;

    let outcome = StepOutcome::new(id, step);
    let raised = direction == StepDirection::Increase;
    ctx.print(&outcome, || render::render_step(&outcome, raised))
}
