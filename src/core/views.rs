//! Per-locale output views.
//!
//! - `all`: every entry, normalized to the locale's plural categories
//! - `untranslated`: only incomplete entries, with source text backfilled
//!
//! Both views are sorted by message id so output files diff cleanly.

use std::fmt;

use crate::core::data::{LocaleCatalog, Translation};

/// Which view of a catalog a file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ViewKind {
    All,
    Untranslated,
}

impl ViewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::All => "all",
            ViewKind::Untranslated => "untranslated",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Both views of one locale's catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleViews {
    pub all: Vec<Translation>,
    pub untranslated: Vec<Translation>,
}

impl LocaleViews {
    pub fn get(&self, kind: ViewKind) -> &[Translation] {
        match kind {
            ViewKind::All => &self.all,
            ViewKind::Untranslated => &self.untranslated,
        }
    }
}

/// Build the `all` and `untranslated` views of `catalog`.
///
/// Untranslated entries are backfilled from `source`. An entry the source
/// catalog does not know is emitted normalized but without backfill.
pub fn build_views(catalog: &LocaleCatalog, source: Option<&LocaleCatalog>) -> LocaleViews {
    let language = catalog.locale.language;

    let all = filter_sorted(catalog, |t| Some(t.normalize(language)));

    let untranslated = filter_sorted(catalog, |t| {
        if !t.is_incomplete(language) {
            return None;
        }
        let normalized = t.normalize(language);
        match source.and_then(|s| s.get(&t.id)) {
            Some(src) => Some(normalized.backfill(src)),
            None => Some(normalized),
        }
    });

    LocaleViews { all, untranslated }
}

/// Map every entry through `f`, drop `None`s and sort by id.
fn filter_sorted<F>(catalog: &LocaleCatalog, f: F) -> Vec<Translation>
where
    F: Fn(&Translation) -> Option<Translation>,
{
    let mut filtered: Vec<Translation> = catalog.entries.values().filter_map(f).collect();
    filtered.sort_by(|a, b| a.id.cmp(&b.id));
    filtered
}
