use anyhow::{Result, bail};
use colored::Colorize;

use super::{
    CommandResult, CommandSummary, WatchSummary,
    helper::{CommandContext, display_path, finish},
};
use crate::cli::report::{FAILURE_MARK, SUCCESS_MARK};
use crate::engine::FileEventKind;
use crate::watch::{WatchConfig, watch as watch_files};

/// Watch the workspace translation file until interrupted.
pub fn watch(ctx: &CommandContext) -> Result<CommandResult> {
    let targets = ctx.engine.translation_files();
    if targets.is_empty() {
        bail!(
            "No translation file configured for {}",
            ctx.workspace.display()
        );
    }

    for target in &targets {
        let outcome = ctx.engine.store().load(Some(target));
        println!(
            "Watching {} ({} translations)",
            display_path(&ctx.workspace, target),
            outcome.index.len()
        );
    }

    let mut reload_count = 0;
    watch_files(
        &ctx.engine,
        &targets,
        WatchConfig::default(),
        |path, kind, outcome| {
            reload_count += 1;
            let path = display_path(&ctx.workspace, path);
            match &outcome.diagnostic {
                Some(e) => println!("{} {}", FAILURE_MARK.red(), e.to_string().red()),
                None if kind == FileEventKind::Deleted => println!(
                    "{} {}",
                    FAILURE_MARK.yellow(),
                    format!("{} was deleted", path).yellow()
                ),
                None => println!(
                    "{} {}",
                    SUCCESS_MARK.green(),
                    format!(
                        "Reloaded {} translations from {} ({})",
                        outcome.index.len(),
                        path,
                        kind
                    )
                    .green()
                ),
            }
        },
    )?;

    Ok(finish(
        CommandSummary::Watch(WatchSummary { reload_count }),
        0,
        true,
    ))
}
