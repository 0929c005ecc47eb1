use std::process::ExitCode;

use clap::Parser;
use transl8::cli::{Arguments, Command, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();
    transl8::logging::init(args.verbose);

    if matches!(args.command, Some(Command::Serve)) {
        let result = args
            .workspace_root()
            .and_then(transl8::mcp::run_server);
        if let Err(err) = result {
            eprintln!("Error: {:#}", err);
            return ExitStatus::Error.into();
        }
        return ExitStatus::Success.into();
    }

    match transl8::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
