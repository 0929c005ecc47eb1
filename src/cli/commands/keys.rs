use anyhow::Result;

use super::super::args::KeysCommand;
use super::{
    CommandResult, CommandSummary, KeysSummary,
    helper::{CommandContext, finish},
};

pub fn keys(ctx: &CommandContext, cmd: KeysCommand) -> Result<CommandResult> {
    let scoped = ctx.engine.index(&ctx.workspace)?;

    let entries = scoped
        .index
        .iter()
        .filter(|(key, _)| cmd.prefix.as_deref().is_none_or(|p| key.starts_with(p)))
        .map(|(key, entry)| (key.to_string(), entry.clone()))
        .collect();

    let summary = KeysSummary {
        entries,
        load_warning: scoped.diagnostic.map(|e| e.to_string()),
    };

    Ok(finish(CommandSummary::Keys(summary), 0, true))
}
