use clap::Args;
use clap::builder::BoolishValueParser;

use super::super::{Ctx, render};
use crate::Result;
use crate::core::TaskId;
use crate::store::TaskStore;

#[derive(Args, Debug)]
pub struct TriageArgs {
    /// Task id.
    pub id: i64,

    /// Is it urgent?
    #[arg(
        long,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub urgent: bool,

    /// Is it important?
    #[arg(
        long,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub important: bool,

    /// Estimated pomodoros.
    #[arg(long, value_name = "N")]
    pub poms: u32,
}

pub(crate) fn handle_triage(ctx: &mut Ctx, args: TriageArgs) -> Result<()> {
    let id = TaskId::new(args.id);
    let mut task = ctx.store.task(id)?;
    task.set_triage(args.urgent, args.important, args.poms);
    ctx.store.update(task)?;
    ctx.store.save()?;
    ctx.print(&id, || render::render_updated(id, "triaged"))
}
