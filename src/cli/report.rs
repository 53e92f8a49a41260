//! Report formatting and printing utilities.
//!
//! Summaries go to stdout, diagnostics to stderr. Separate from core logic
//! to allow siftmerge to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{CommandResult, CommandSummary, InitSummary, MergeSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::parsers::go::SourceParseError;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    let stdout = &mut io::stdout().lock();
    match &result.summary {
        CommandSummary::Merge(summary) => print_merge_to(summary, verbose, stdout),
        CommandSummary::Init(summary) => print_init_to(summary, stdout),
    }
}

/// Print a merge summary to a custom writer.
pub fn print_merge_to<W: Write>(summary: &MergeSummary, verbose: bool, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Loaded {} catalog {}",
        summary.files_loaded,
        if summary.files_loaded == 1 { "file" } else { "files" }
    );

    if let Some(files) = summary.files_sifted {
        let via = match &summary.alias {
            Some(alias) => format!(" via {}", alias.cyan()),
            None => String::new(),
        };
        let _ = writeln!(
            writer,
            "Sifted {} Go {}, collected {} message {}{} ({} new)",
            files,
            if files == 1 { "file" } else { "files" },
            summary.ids_collected,
            if summary.ids_collected == 1 { "id" } else { "ids" },
            via,
            summary.stats.added
        );
    }

    for locale in &summary.locales {
        let mark = if locale.untranslated == 0 {
            SUCCESS_MARK.green()
        } else {
            FAILURE_MARK.yellow()
        };
        let source_note = if locale.locale == summary.source_locale {
            " (source)"
        } else {
            ""
        };
        let _ = writeln!(
            writer,
            "{} {}{}: {} {}, {} untranslated",
            mark,
            locale.locale.bold(),
            source_note,
            locale.total,
            if locale.total == 1 { "entry" } else { "entries" },
            locale.untranslated
        );
        if verbose {
            for path in &locale.written {
                let _ = writeln!(writer, "    {} {}", "wrote".dimmed(), path.display());
            }
        }
    }

    let untranslated = summary.untranslated_count();
    let done = format!(
        "Merged {} {} into {} ({} {} untranslated)",
        summary.locales.len(),
        if summary.locales.len() == 1 { "locale" } else { "locales" },
        summary.outdir.display(),
        untranslated,
        if untranslated == 1 { "entry" } else { "entries" }
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), done.green());
}

fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );
    let _ = writeln!(writer, "  {} {}", "-->".blue(), summary.path.display());
}

/// Print a fatal error to stderr.
///
/// Go syntax errors are shown cargo-style with the offending line.
pub fn print_error(err: &anyhow::Error) {
    print_error_to(err, &mut io::stderr().lock());
}

/// Print a fatal error to a custom writer.
pub fn print_error_to<W: Write>(err: &anyhow::Error, writer: &mut W) {
    let parse_error = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<SourceParseError>());

    let Some(parse_error) = parse_error else {
        let _ = writeln!(writer, "{} {:#}", "Error:".bold().red(), err);
        return;
    };

    let loc = &parse_error.location;
    let line_width = loc.line.to_string().len();
    let _ = writeln!(
        writer,
        "{} {}",
        "error:".bold().red(),
        parse_error.message.bold()
    );
    let _ = writeln!(
        writer,
        "{:>width$}{} {}",
        "",
        "-->".blue(),
        loc,
        width = line_width
    );
    let _ = writeln!(writer, "{:>width$} {}", "", "|".blue(), width = line_width);
    let _ = writeln!(
        writer,
        "{} {} {}",
        loc.line.to_string().blue(),
        "|".blue(),
        parse_error.source_line
    );

    // Caret pointing to the column (col is 1-based)
    let prefix: String = parse_error
        .source_line
        .chars()
        .take(loc.col.saturating_sub(1))
        .collect();
    let caret_padding = UnicodeWidthStr::width(prefix.as_str());
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        "^".red(),
        width = line_width,
        padding = caret_padding
    );
}
