use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::args::MergeCommand;
use super::{CommandResult, CommandSummary, LocaleSummary, MergeSummary};
use crate::core::{
    MergeContext,
    data::Bundle,
    extract::{SiftOutcome, sift},
    file_scanner::scan_files,
    reconcile::reconcile,
    views::{ViewKind, build_views},
    writer::write_view,
};

pub fn merge(cmd: MergeCommand) -> Result<CommandResult> {
    let ctx = MergeContext::new(&cmd.args)?;
    let summary = run_merge(&ctx)?;

    Ok(CommandResult {
        summary: CommandSummary::Merge(summary),
        exit_on_untranslated: ctx.fail_on_untranslated,
    })
}

/// Load, sift, reconcile and write every locale's views.
///
/// Files written before a later failure are left in place.
pub fn run_merge(ctx: &MergeContext) -> Result<MergeSummary> {
    let mut bundle = Bundle::new();
    for path in &ctx.translation_files {
        let count = bundle.load_file(path).with_context(|| {
            format!("failed to load translation file {}", path.display())
        })?;
        if ctx.verbose {
            eprintln!("Loaded {} entries from {}", count, path.display());
        }
    }

    let (files_sifted, outcome) = match &ctx.sift {
        Some(sift_path) => {
            let (count, outcome) = sift_path_ids(ctx, sift_path)?;
            (Some(count), outcome)
        }
        None => (None, SiftOutcome::default()),
    };

    let stats = reconcile(&mut bundle, &ctx.source_locale, &outcome.message_ids());

    let source = bundle.catalog(&ctx.source_locale.id);
    let mut locales = Vec::with_capacity(bundle.locale_count());
    for catalog in bundle.catalogs() {
        let views = build_views(catalog, source);
        let mut written = Vec::new();
        for kind in [ViewKind::All, ViewKind::Untranslated] {
            let path = write_view(
                &ctx.outdir,
                &catalog.locale.id,
                kind,
                views.get(kind),
                ctx.format,
            )?;
            if ctx.verbose {
                eprintln!("Wrote {}", path.display());
            }
            written.push(path);
        }
        locales.push(LocaleSummary {
            locale: catalog.locale.id.clone(),
            total: views.all.len(),
            untranslated: views.untranslated.len(),
            written,
        });
    }

    Ok(MergeSummary {
        source_locale: ctx.source_locale.id.clone(),
        outdir: ctx.outdir.clone(),
        files_loaded: ctx.translation_files.len(),
        files_sifted,
        alias: outcome.alias,
        ids_collected: outcome.literals.len(),
        stats,
        locales,
    })
}

/// Resolve the sift path and run both scanner passes over it.
fn sift_path_ids(ctx: &MergeContext, sift_path: &Path) -> Result<(usize, SiftOutcome)> {
    let scan = scan_files(sift_path, &ctx.ignores, ctx.ignore_test_files, ctx.verbose)?;
    if scan.skipped_count > 0 {
        eprintln!(
            "{} {} path(s) skipped due to access errors{}",
            "warning:".bold().yellow(),
            scan.skipped_count,
            if ctx.verbose { "" } else { " (use -v for details)" }
        );
    }
    if ctx.verbose {
        for file in &scan.files {
            eprintln!("Sifting {}", file.display());
        }
    }

    let outcome = sift(&scan.files, &ctx.factory)?;
    match &outcome.alias {
        Some(alias) => {
            if ctx.verbose {
                eprintln!("Found translation function alias \"{}\"", alias);
                for literal in &outcome.literals {
                    eprintln!("  {} {}", literal.location, literal.text);
                }
            }
        }
        None => eprintln!(
            "{} no call to {} found in {} file(s); skipping extraction",
            "warning:".bold().yellow(),
            ctx.factory,
            scan.files.len()
        ),
    }

    Ok((scan.files.len(), outcome))
}
