use anyhow::Result;

use super::super::args::EditCommand;
use super::{
    CommandResult, CommandSummary, EditSummary,
    helper::{CommandContext, display_path, finish},
};
use crate::error::Transl8Error;

pub fn edit(ctx: &CommandContext, cmd: EditCommand) -> Result<CommandResult> {
    let resource = match &cmd.source {
        Some(source) => CommandContext::absolute(source)?,
        None => ctx.workspace.clone(),
    };
    let scope = ctx.engine.scope(&resource)?;

    let outcome = match ctx.engine.edit(&resource, &cmd.key, cmd.value, cmd.context) {
        Ok(outcome) => Ok(outcome),
        Err(e @ Transl8Error::KeyCollision { .. }) => Err(e.to_string()),
        Err(e) => return Err(e.into()),
    };
    let error_count = usize::from(outcome.is_err());

    let summary = EditSummary {
        key: cmd.key,
        translation_file: display_path(&ctx.workspace, &scope.translation_file),
        outcome,
    };

    Ok(finish(CommandSummary::Edit(summary), error_count, true))
}
