use super::super::{Ctx, render};
use crate::Result;
use crate::api::TaskDetail;
use crate::core::{View, card_sort_key, classify_for_view, compare_for_paper};
use crate::store::TaskStore;

pub(crate) fn handle_paper(ctx: &mut Ctx) -> Result<()> {
    let now = ctx.now;
    let mut tasks = ctx.store.all()?;
    for task in &tasks {
        classify_for_view(task, View::Paper, now)?;
    }
    tasks.sort_by(|a, b| {
        compare_for_paper(a, b, now)
            .then_with(|| card_sort_key(a.order_key).cmp(&card_sort_key(b.order_key)))
    });

    let details: Vec<TaskDetail> = tasks
        .into_iter()
        .map(|task| TaskDetail::derive(task, now))
        .collect();
    ctx.print(&details, || render::render_task_list(&details))
}
