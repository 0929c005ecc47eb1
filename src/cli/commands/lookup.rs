use std::fs;

use anyhow::{Context, Result, bail};

use super::super::args::LookupCommand;
use super::{
    CommandResult, CommandSummary, LookupSummary,
    helper::{CommandContext, finish},
};

/// Show the hover for a 1-based position.
pub fn lookup(ctx: &CommandContext, cmd: LookupCommand) -> Result<CommandResult> {
    if cmd.line == 0 || cmd.column == 0 {
        bail!("Line and column are 1-based");
    }

    let file = CommandContext::absolute(&cmd.file)?;
    let text = fs::read_to_string(&file)
        .with_context(|| format!("Failed to read source file: {}", file.display()))?;

    let hover = ctx
        .engine
        .hover(&file, &text, cmd.line - 1, cmd.column - 1)?;
    let error_count = usize::from(hover.as_ref().is_none_or(|h| h.entry.is_none()));

    let summary = LookupSummary {
        location: format!("{}:{}:{}", cmd.file.display(), cmd.line, cmd.column),
        hover,
        markdown: cmd.markdown,
    };

    Ok(finish(CommandSummary::Lookup(summary), error_count, true))
}
