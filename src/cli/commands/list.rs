use clap::Args;

use super::super::{Ctx, parse_context_opt, parse_view_opt, render};
use crate::Result;
use crate::api::TaskDetail;
use crate::core::{allowed_modes, classify, classify_for_view, priority_sort_key};
use crate::store::TaskStore;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// View to list (all, open, triage, schedule, stage, execute, closed,
    /// paper).
    #[arg(long, value_name = "VIEW")]
    pub view: Option<String>,

    /// Only tasks in this context.
    #[arg(long, value_name = "CODE")]
    pub context: Option<String>,
}

pub(crate) fn handle_list(ctx: &mut Ctx, args: ListArgs) -> Result<()> {
    let view = parse_view_opt(args.view.as_deref(), ctx.default_view)?;
    let want = parse_context_opt(args.context.as_deref())?;
    let now = ctx.now;

    let mut details = Vec::new();
    for task in ctx.store.all()? {
        if let Some(want) = want
            && task.context != Some(want)
        {
            continue;
        }
        if !allowed_modes(view).contains(&classify(&task, now)) {
            continue;
        }
        // The filter above is the query; this keeps query and classifier
        // honest with each other, surfacing any drift instead of hiding it.
        classify_for_view(&task, view, now)?;
        details.push(TaskDetail::derive(task, now));
    }

    details.sort_by(|a, b| {
        priority_sort_key(b.task.priority)
            .cmp(&priority_sort_key(a.task.priority))
            .then_with(|| a.task.id.cmp(&b.task.id))
    });

    ctx.print(&details, || render::render_task_list(&details))
}
