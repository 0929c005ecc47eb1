//! Dispatches parsed arguments to the command handlers.

use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{
    args::{Arguments, Command, resolve_workspace},
    commands::{
        CommandResult, check::check, edit::edit, helper::CommandContext, init::init, keys::keys,
        lookup::lookup, usages::usages, watch::watch,
    },
};

pub fn run(args: Arguments) -> Result<CommandResult> {
    let workspace = args.workspace.as_deref();

    match args.command {
        Some(Command::Init) => init(&init_dir(workspace)?),
        Some(Command::Serve) => {
            // Serve command is handled in main.rs before calling run()
            anyhow::bail!("Serve command should be handled before run()")
        }
        Some(command) => {
            let ctx = CommandContext::new(resolve_workspace(workspace)?);
            run_in_workspace(&ctx, command)
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn run_in_workspace(ctx: &CommandContext, command: Command) -> Result<CommandResult> {
    match command {
        Command::Check(cmd) => check(ctx, cmd),
        Command::Lookup(cmd) => lookup(ctx, cmd),
        Command::Keys(cmd) => keys(ctx, cmd),
        Command::Edit(cmd) => edit(ctx, cmd),
        Command::Usages(cmd) => usages(ctx, cmd),
        Command::Watch => watch(ctx),
        Command::Init | Command::Serve => {
            anyhow::bail!("Command does not run against a workspace")
        }
    }
}

/// `init` writes into the given workspace or the working directory, never
/// into a parent that already has a config.
fn init_dir(workspace: Option<&Path>) -> Result<PathBuf> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    Ok(match workspace {
        Some(workspace) => cwd.join(workspace),
        None => cwd,
    })
}
