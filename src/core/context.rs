use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result, bail};

use crate::{
    cli::args::MergeArgs,
    config::{Config, load_config},
    core::{data::Locale, extract::FactoryName, marshal::Format},
};

/// Settings for one merge run.
///
/// Configuration is merged with the following priority (highest to lowest):
/// 1. CLI arguments (e.g., `--source-locale fr`)
/// 2. `.siftmergerc.json` config file
/// 3. Built-in defaults
///
/// Every configuration error is detected here, before any catalog is read
/// or output file written.
#[derive(Debug)]
pub struct MergeContext {
    pub translation_files: Vec<PathBuf>,
    pub source_locale: Locale,
    pub outdir: PathBuf,
    pub format: Format,
    /// Go file or directory to scan, `None` to skip scanning.
    pub sift: Option<PathBuf>,
    pub factory: FactoryName,
    pub ignores: Vec<String>,
    pub ignore_test_files: bool,
    pub fail_on_untranslated: bool,
    pub verbose: bool,
}

impl MergeContext {
    /// Build the context from CLI arguments, loading the config file found
    /// from the current directory upwards.
    pub fn new(args: &MergeArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine current directory")?;
        Self::with_root(args, &cwd)
    }

    /// Like [`MergeContext::new`] but searching for the config file from `root`.
    pub fn with_root(args: &MergeArgs, root: &Path) -> Result<Self> {
        let config_result = load_config(root)?;
        if args.verbose {
            match &config_result.path {
                Some(path) => eprintln!("Note: Using configuration from {}", path.display()),
                None => eprintln!("Note: No .siftmergerc.json found, using default configuration"),
            }
        }
        let config_dir = config_result
            .path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf);

        Self::from_config(args, config_result.config, config_dir.as_deref())
    }

    /// Apply CLI overrides to `config`. Relative paths from the config file
    /// are resolved against `config_dir`.
    pub fn from_config(args: &MergeArgs, config: Config, config_dir: Option<&Path>) -> Result<Self> {
        if args.translation_files.is_empty() {
            bail!("need at least one translation file to parse");
        }

        let source_locale_id = args
            .source_locale
            .as_deref()
            .unwrap_or(&config.source_locale);
        let source_locale = Locale::new(source_locale_id)
            .with_context(|| format!("invalid source locale {}", source_locale_id))?;

        let format = Format::from_name(args.format.as_deref().unwrap_or(&config.format))?;

        let factory = config.factory_name()?;

        let outdir = match &args.outdir {
            Some(outdir) => outdir.clone(),
            None => resolve_config_path(config_dir, &config.outdir),
        };

        let sift = match (&args.sift, &config.sift) {
            (Some(sift), _) => Some(sift.clone()),
            (None, Some(sift)) => Some(resolve_config_path(config_dir, sift)),
            (None, None) => None,
        };

        Ok(Self {
            translation_files: args.translation_files.clone(),
            source_locale,
            outdir,
            format,
            sift,
            factory,
            ignores: config.ignores,
            ignore_test_files: config.ignore_test_files,
            fail_on_untranslated: args.fail_on_untranslated,
            verbose: args.verbose,
        })
    }
}

fn resolve_config_path(config_dir: Option<&Path>, value: &str) -> PathBuf {
    let path = Path::new(value);
    match config_dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}
