use clap::Subcommand;

use super::Ctx;
use crate::Result;
use crate::core::StepDirection;

pub(super) mod close;
pub(super) mod contexts;
pub(super) mod create;
pub(super) mod duplicate;
pub(super) mod list;
pub(super) mod move_card;
pub(super) mod paper;
pub(super) mod priority;
pub(super) mod schedule;
pub(super) mod show;
pub(super) mod stage;
pub(super) mod triage;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a task.
    #[command(alias = "new")]
    Create(create::CreateArgs),

    /// Show one task with its derived mode.
    Show(show::ShowArgs),

    /// List tasks for a view.
    #[command(alias = "ls")]
    List(list::ListArgs),

    /// Print the full board in paper order.
    Paper,

    /// Move a card relative to a sibling on its list.
    Move(move_card::MoveArgs),

    /// Raise a task's priority one step.
    Bump(priority::PriorityArgs),

    /// Lower a task's priority one step.
    Demote(priority::PriorityArgs),

    /// Record the triage decisions for a task.
    Triage(triage::TriageArgs),

    /// Set a task's wakeup time.
    Schedule(schedule::ScheduleArgs),

    /// Stage a task for execution.
    Stage(stage::StageArgs),

    /// Send a staged task back to the shelf.
    Unstage(stage::StageArgs),

    /// Close a task.
    Close(close::CloseArgs),

    /// Reopen a closed task.
    Reopen(close::CloseArgs),

    /// Duplicate a task into a fresh open copy.
    Duplicate(duplicate::DuplicateArgs),

    /// List context codes currently in use.
    Contexts,
}

pub(super) fn dispatch(ctx: &mut Ctx, command: Commands) -> Result<()> {
    match command {
        Commands::Create(args) => create::handle_create(ctx, args),
        Commands::Show(args) => show::handle_show(ctx, args),
        Commands::List(args) => list::handle_list(ctx, args),
        Commands::Paper => paper::handle_paper(ctx),
        Commands::Move(args) => move_card::handle_move(ctx, args),
        Commands::Bump(args) => priority::handle_step(ctx, args, StepDirection::Increase),
        Commands::Demote(args) => priority::handle_step(ctx, args, StepDirection::Decrease),
        Commands::Triage(args) => triage::handle_triage(ctx, args),
        Commands::Schedule(args) => schedule::handle_schedule(ctx, args),
        Commands::Stage(args) => stage::handle_stage(ctx, args, true),
        Commands::Unstage(args) => stage::handle_stage(ctx, args, false),
        Commands::Close(args) => close::handle_close(ctx, args),
        Commands::Reopen(args) => close::handle_reopen(ctx, args),
        Commands::Duplicate(args) => duplicate::handle_duplicate(ctx, args),
        Commands::Contexts => contexts::handle_contexts(ctx),
    }
}
