use anyhow::Result;

use super::super::args::UsagesCommand;
use super::{
    CommandResult, CommandSummary, UsagesSummary,
    helper::{CommandContext, finish},
};

pub fn usages(ctx: &CommandContext, cmd: UsagesCommand) -> Result<CommandResult> {
    let root = cmd.path.as_deref().map(CommandContext::absolute).transpose()?;

    let scan = ctx
        .engine
        .scan_usages(&ctx.workspace, &cmd.key, root.as_deref())?;

    let summary = UsagesSummary {
        key: cmd.key,
        workspace: ctx.workspace.clone(),
        usages: scan.items,
        files_checked: scan.files_checked,
    };

    Ok(finish(CommandSummary::Usages(summary), 0, true))
}
