//! Cross-locale reconciliation.
//!
//! After reconciliation every catalog in the bundle has an entry, of the same
//! shape as the source entry, for every id in the source catalog.

use crate::core::data::{Bundle, Locale, Translation};

/// Counts of changes made by [`reconcile`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    /// Discovered ids newly added to the source catalog.
    pub added: usize,
    /// Placeholders inserted (or shape mismatches replaced) in other locales.
    pub placeholders: usize,
}

/// Merge `discovered` ids into the source catalog and align all other
/// catalogs with it.
///
/// Discovered ids already in the source catalog are left alone. Any locale
/// missing a source id, or holding an entry of a different shape, receives
/// an untranslated copy of the source entry. Running this twice makes no
/// further changes.
pub fn reconcile<S: AsRef<str>>(
    bundle: &mut Bundle,
    source_locale: &Locale,
    discovered: &[S],
) -> ReconcileStats {
    let mut stats = ReconcileStats::default();

    let source = bundle.ensure_catalog(source_locale);
    for id in discovered {
        let id = id.as_ref();
        if !source.contains(id) {
            source.add(Translation::untranslated(id));
            stats.added += 1;
        }
    }

    let placeholders: Vec<Translation> = source
        .entries
        .values()
        .map(Translation::untranslated_copy)
        .collect();
    let sources = source.entries.clone();

    for catalog in bundle.catalogs_mut() {
        if catalog.locale.id == source_locale.id {
            continue;
        }
        for placeholder in &placeholders {
            let aligned = catalog
                .get(&placeholder.id)
                .is_some_and(|dst| dst.same_shape(&sources[&placeholder.id]));
            if !aligned {
                catalog
                    .entries
                    .insert(placeholder.id.clone(), placeholder.clone());
                stats.placeholders += 1;
            }
        }
    }

    stats
}
