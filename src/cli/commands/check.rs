use anyhow::Result;

use super::super::args::CheckCommand;
use super::{
    CheckSummary, CommandResult, CommandSummary,
    helper::{CommandContext, finish},
};

pub fn check(ctx: &CommandContext, cmd: CheckCommand) -> Result<CommandResult> {
    let root = cmd.path.as_deref().map(CommandContext::absolute).transpose()?;

    let (scoped, scan) = ctx.engine.scan_missing(&ctx.workspace, root.as_deref())?;
    let scanning_disabled = scoped.scope.function_names.is_empty();
    let error_count = scan.items.len();

    let summary = CheckSummary {
        workspace: ctx.workspace.clone(),
        diagnostics: scan.items,
        files_checked: scan.files_checked,
        skipped_count: scan.skipped_count,
        load_warning: scoped.diagnostic.map(|e| e.to_string()),
        scanning_disabled,
    };

    Ok(finish(CommandSummary::Check(summary), error_count, true))
}
