//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `merge`: Reconcile translation catalogs and write `all`/`untranslated` views
//! - `init`: Initialize a siftmerge configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Merge(cmd)) => cmd.args.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Parser)]
pub struct MergeArgs {
    /// Translation catalog files to merge (the locale is taken from each file name)
    #[arg(value_name = "FILES")]
    pub translation_files: Vec<PathBuf>,

    /// Locale whose catalog is the source of truth (overrides config file)
    #[arg(long, value_name = "LOCALE")]
    pub source_locale: Option<String>,

    /// Directory to write output files to (overrides config file)
    #[arg(long, value_name = "DIR")]
    pub outdir: Option<PathBuf>,

    /// Output format (overrides config file)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// Go file or directory to scan for new message ids (overrides config file)
    #[arg(long, value_name = "PATH")]
    pub sift: Option<PathBuf>,

    /// Exit with status 1 if any locale has untranslated entries
    #[arg(long)]
    pub fail_on_untranslated: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct MergeCommand {
    #[command(flatten)]
    pub args: MergeArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge translation files, adding ids found in Go source, and write
    /// <locale>.all.<format> and <locale>.untranslated.<format> per locale
    Merge(MergeCommand),
    /// Initialize a new .siftmergerc.json configuration file
    Init,
}
