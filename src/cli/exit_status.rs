use std::process::ExitCode;

use super::commands::CommandResult;

/// Process exit status of the `transl8` binary.
///
/// `check`, `lookup` and `edit` exit with `Failure` when they report a
/// problem (a missing key, no translation at a position, a rejected edit),
/// so they can gate scripts and CI jobs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The command ran and found nothing to report.
    Success,
    /// The command ran and reported problems.
    Failure,
    /// The command could not run (missing configuration, I/O failure).
    Error,
}

impl ExitStatus {
    pub fn from_result(result: &CommandResult) -> Self {
        if result.exit_on_errors && result.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
