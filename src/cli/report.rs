//! Report formatting and printing utilities.
//!
//! Missing keys are shown in cargo-style format. Separate from the engine so
//! transl8 can be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CheckSummary, CommandResult, CommandSummary, EditSummary, InitSummary, KeysSummary,
    LookupSummary, UsagesSummary, helper::display_path,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::EditOutcome;
use crate::features::{FileDiagnostic, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult) {
    let stdout = &mut io::stdout().lock();
    let stderr = &mut io::stderr().lock();

    match &result.summary {
        CommandSummary::Check(summary) => print_check(summary, stdout, stderr),
        CommandSummary::Lookup(summary) => print_lookup(summary, stdout),
        CommandSummary::Keys(summary) => print_keys(summary, stdout, stderr),
        CommandSummary::Edit(summary) => print_edit(summary, stdout, stderr),
        CommandSummary::Usages(summary) => print_usages(summary, stdout),
        CommandSummary::Init(summary) => print_init(summary, stdout, stderr),
        CommandSummary::Watch(_) => {}
    }
}

// ============================================================
// check
// ============================================================

fn print_check<W: Write, E: Write>(summary: &CheckSummary, out: &mut W, err: &mut E) {
    if let Some(warning) = &summary.load_warning {
        print_warning(warning, err);
    }
    if summary.scanning_disabled {
        print_warning("No function names configured.", err);
    }

    report_to(&summary.workspace, &summary.diagnostics, out);

    if summary.diagnostics.is_empty() {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} source {} - no missing translations",
                summary.files_checked,
                plural(summary.files_checked, "file", "files")
            )
            .green()
        );
    }

    if summary.skipped_count > 0 {
        print_warning(
            &format!(
                "{} file(s) could not be read (use {} for details)",
                summary.skipped_count,
                "-v".cyan()
            ),
            err,
        );
    }
}

/// Print missing-key diagnostics in cargo-style format.
pub fn report_to<W: Write>(
    workspace: &std::path::Path,
    diagnostics: &[FileDiagnostic],
    writer: &mut W,
) {
    if diagnostics.is_empty() {
        return;
    }

    let max_line_width = diagnostics
        .iter()
        .map(|d| (d.diagnostic.line + 1).to_string().len())
        .max()
        .unwrap_or(1);

    for diagnostic in diagnostics {
        print_diagnostic(workspace, diagnostic, writer, max_line_width);
    }

    let total = diagnostics.len();
    let files = {
        let mut paths: Vec<_> = diagnostics.iter().map(|d| &d.path).collect();
        paths.dedup();
        paths.len()
    };
    let _ = writeln!(
        writer,
        "{} {} missing {} in {} {}",
        FAILURE_MARK.red(),
        total,
        plural(total, "translation", "translations").red(),
        files,
        plural(files, "file", "files")
    );
}

fn print_diagnostic<W: Write>(
    workspace: &std::path::Path,
    item: &FileDiagnostic,
    writer: &mut W,
    max_line_width: usize,
) {
    let diagnostic = &item.diagnostic;
    let (severity_str, caret) = match diagnostic.severity {
        Severity::Error => ("error".bold().red(), "^".red()),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        diagnostic.message(),
        diagnostic.code().dimmed().cyan()
    );

    let line = diagnostic.line + 1;
    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        display_path(workspace, &item.path),
        line,
        diagnostic.start_column + 1
    );

    let source_line = item.source_line.as_str();
    let _ = writeln!(
        writer,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        line.to_string().blue(),
        "|".blue(),
        source_line,
        width = max_line_width
    );

    // Carets span the key, padded by the display width of the text before it.
    let prefix: String = source_line.chars().take(diagnostic.start_column).collect();
    let key_width = UnicodeWidthStr::width(diagnostic.key()).max(1);
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        caret.to_string().repeat(key_width),
        width = max_line_width,
        padding = UnicodeWidthStr::width(prefix.as_str())
    );

    let _ = writeln!(writer); // Empty line between diagnostics
}

// ============================================================
// lookup / keys / usages
// ============================================================

fn print_lookup<W: Write>(summary: &LookupSummary, out: &mut W) {
    let Some(hover) = &summary.hover else {
        let _ = writeln!(
            out,
            "{} No translation key at {}",
            FAILURE_MARK.red(),
            summary.location
        );
        return;
    };

    if summary.markdown {
        let _ = write!(out, "{}", hover.to_markdown());
        return;
    }

    let _ = writeln!(out, "{}", hover.key.bold());
    match &hover.entry {
        Some(entry) => {
            let _ = writeln!(out, "  value:   {}", entry.value);
            let _ = writeln!(
                out,
                "  context: {}",
                entry
                    .context
                    .as_deref()
                    .map(|c| c.normal())
                    .unwrap_or_else(|| "(no comment provided)".dimmed())
            );
        }
        None => {
            let _ = writeln!(out, "  {}", "No translation found for this key.".red());
        }
    }
}

fn print_keys<W: Write, E: Write>(summary: &KeysSummary, out: &mut W, err: &mut E) {
    if let Some(warning) = &summary.load_warning {
        print_warning(warning, err);
    }

    if summary.entries.is_empty() {
        let _ = writeln!(out, "No translation keys found.");
        return;
    }

    for (key, entry) in &summary.entries {
        match &entry.context {
            Some(context) => {
                let _ = writeln!(
                    out,
                    "{} = {}  {}",
                    key.bold(),
                    entry.value,
                    format!("# {}", context).dimmed()
                );
            }
            None => {
                let _ = writeln!(out, "{} = {}", key.bold(), entry.value);
            }
        }
    }
}

fn print_usages<W: Write>(summary: &UsagesSummary, out: &mut W) {
    if summary.usages.is_empty() {
        let _ = writeln!(
            out,
            "No usages of \"{}\" found in {} source {}",
            summary.key,
            summary.files_checked,
            plural(summary.files_checked, "file", "files")
        );
        return;
    }

    for usage in &summary.usages {
        let _ = writeln!(
            out,
            "{}:{}:{}  {}",
            display_path(&summary.workspace, &usage.path),
            usage.line + 1,
            usage.column + 1,
            usage.source_line.trim().dimmed()
        );
    }

    let total = summary.usages.len();
    let _ = writeln!(
        out,
        "Found {} {} of \"{}\"",
        total,
        plural(total, "usage", "usages"),
        summary.key
    );
}

// ============================================================
// edit / init
// ============================================================

fn print_edit<W: Write, E: Write>(summary: &EditSummary, out: &mut W, err: &mut E) {
    let message = match &summary.outcome {
        Ok(EditOutcome::Added) => format!(
            "Added \"{}\" to {}",
            summary.key, summary.translation_file
        ),
        Ok(EditOutcome::Updated) => format!(
            "Updated \"{}\" in {}",
            summary.key, summary.translation_file
        ),
        Ok(EditOutcome::Unchanged) => format!(
            "\"{}\" is already up to date in {}",
            summary.key, summary.translation_file
        ),
        Err(reason) => {
            let _ = writeln!(err, "{}: {}", "error".bold().red(), reason);
            return;
        }
    };
    let _ = writeln!(out, "{} {}", SUCCESS_MARK.green(), message.green());
}

fn print_init<W: Write, E: Write>(summary: &InitSummary, out: &mut W, err: &mut E) {
    match &summary.error {
        Some(error) => {
            let _ = writeln!(err, "Error: {}", error);
        }
        None => {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("Created {}", CONFIG_FILE_NAME).green()
            );
        }
    }
}

fn print_warning<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), message);
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
