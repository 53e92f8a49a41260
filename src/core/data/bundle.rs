use std::{
    collections::{BTreeMap, HashMap},
    path::Path,
};

use anyhow::Result;

use super::{Locale, Translation};
use crate::core::parsers::catalog::parse_catalog_file;

/// All entries for one locale, keyed by message id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCatalog {
    pub locale: Locale,
    pub entries: HashMap<String, Translation>,
}

impl LocaleCatalog {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            entries: HashMap::new(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Translation> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Add an entry, keeping a complete translation over an incomplete one.
    pub fn add(&mut self, entry: Translation) {
        let language = self.locale.language;
        if let Some(existing) = self.entries.get(&entry.id)
            && entry.is_incomplete(language)
            && !existing.is_incomplete(language)
        {
            return;
        }
        self.entries.insert(entry.id.clone(), entry);
    }
}

/// Catalogs for every locale seen in the loaded files, keyed by locale id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    catalogs: BTreeMap<String, LocaleCatalog>,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog file, merging its entries into the file's locale.
    ///
    /// Returns the number of entries read.
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        let parsed = parse_catalog_file(path)?;
        let count = parsed.entries.len();
        let catalog = self.ensure_catalog(&parsed.locale);
        for entry in parsed.entries {
            catalog.add(entry);
        }
        Ok(count)
    }

    pub fn add_translation(&mut self, locale: &Locale, entry: Translation) {
        self.ensure_catalog(locale).add(entry);
    }

    /// The catalog for `locale`, created empty if absent.
    pub fn ensure_catalog(&mut self, locale: &Locale) -> &mut LocaleCatalog {
        self.catalogs
            .entry(locale.id.clone())
            .or_insert_with(|| LocaleCatalog::new(locale.clone()))
    }

    pub fn catalog(&self, locale_id: &str) -> Option<&LocaleCatalog> {
        self.catalogs.get(locale_id)
    }

    /// Catalogs in ascending locale id order.
    pub fn catalogs(&self) -> impl Iterator<Item = &LocaleCatalog> {
        self.catalogs.values()
    }

    pub fn catalogs_mut(&mut self) -> impl Iterator<Item = &mut LocaleCatalog> {
        self.catalogs.values_mut()
    }

    pub fn locale_count(&self) -> usize {
        self.catalogs.len()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use tempfile::tempdir;

    fn locale(id: &str) -> Locale {
        Locale::new(id).unwrap()
    }

    #[test]
    fn test_incomplete_does_not_replace_complete() {
        let mut bundle = Bundle::new();
        let en = locale("en-US");
        bundle.add_translation(&en, Translation::single("greeting", "Hi"));
        bundle.add_translation(&en, Translation::untranslated("greeting"));

        let catalog = bundle.catalog("en-US").unwrap();
        assert_eq!(
            catalog.get("greeting"),
            Some(&Translation::single("greeting", "Hi"))
        );
    }

    #[test]
    fn test_later_entry_replaces_earlier() {
        let mut bundle = Bundle::new();
        let en = locale("en");
        bundle.add_translation(&en, Translation::single("greeting", "Hi"));
        bundle.add_translation(&en, Translation::single("greeting", "Hello"));
        assert_eq!(
            bundle.catalog("en").unwrap().get("greeting"),
            Some(&Translation::single("greeting", "Hello"))
        );
    }

    #[test]
    fn test_files_for_same_locale_accumulate() {
        let dir = tempdir().unwrap();
        let first = dir.path().join("en-US.json");
        let second = dir.path().join("en-us.extra.json");
        fs::write(&first, r#"[{"id": "a", "translation": "A"}]"#).unwrap();
        fs::write(&second, r#"[{"id": "b", "translation": "B"}]"#).unwrap();

        let mut bundle = Bundle::new();
        assert_eq!(bundle.load_file(&first).unwrap(), 1);
        assert_eq!(bundle.load_file(&second).unwrap(), 1);

        assert_eq!(bundle.locale_count(), 1);
        let catalog = bundle.catalog("en-US").unwrap();
        assert!(catalog.contains("a"));
        assert!(catalog.contains("b"));
    }

    #[test]
    fn test_catalogs_sorted_by_locale() {
        let mut bundle = Bundle::new();
        for id in ["fr", "de", "en-US"] {
            bundle.ensure_catalog(&locale(id));
        }
        let ids: Vec<&str> = bundle.catalogs().map(|c| c.locale.id.as_str()).collect();
        assert_eq!(ids, vec!["de", "en-US", "fr"]);
    }
}
