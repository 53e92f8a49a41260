use std::collections::BTreeMap;

use serde::{Serialize, ser::SerializeStruct};

use super::locale::{Language, PluralCategory};

/// The content of a translation.
///
/// The two variants are the two "shapes" a message can have. Entries of
/// different shapes are never considered equivalent, even for the same id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationText {
    /// A message without plural forms: `"greeting": "Hi"`.
    Single(String),
    /// A message with one text per plural category.
    Plural(BTreeMap<PluralCategory, String>),
}

/// One message for one locale.
///
/// Completeness is derived from the text: an entry is untranslated while
/// any form the locale requires is blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub id: String,
    pub text: TranslationText,
}

impl Translation {
    pub fn single(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: TranslationText::Single(text.into()),
        }
    }

    pub fn plural<I, S>(id: impl Into<String>, forms: I) -> Self
    where
        I: IntoIterator<Item = (PluralCategory, S)>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            text: TranslationText::Plural(
                forms.into_iter().map(|(c, s)| (c, s.into())).collect(),
            ),
        }
    }

    /// A new, untranslated entry for an id discovered in source code.
    pub fn untranslated(id: impl Into<String>) -> Self {
        Self::single(id, "")
    }

    pub fn is_plural(&self) -> bool {
        matches!(self.text, TranslationText::Plural(_))
    }

    /// True if both entries are single, or both are plural.
    pub fn same_shape(&self, other: &Translation) -> bool {
        self.is_plural() == other.is_plural()
    }

    /// Copy with the same id and shape but no text.
    pub fn untranslated_copy(&self) -> Self {
        let text = match &self.text {
            TranslationText::Single(_) => TranslationText::Single(String::new()),
            TranslationText::Plural(_) => TranslationText::Plural(BTreeMap::new()),
        };
        Self {
            id: self.id.clone(),
            text,
        }
    }

    /// Text for a plural category.
    ///
    /// A single entry answers with its text for every category.
    pub fn form(&self, category: PluralCategory) -> Option<&str> {
        match &self.text {
            TranslationText::Single(text) => Some(text),
            TranslationText::Plural(forms) => forms.get(&category).map(String::as_str),
        }
    }

    /// Restrict plural forms to exactly the categories `language` uses.
    ///
    /// Missing categories are added blank, extra ones are dropped. Single
    /// entries are returned unchanged.
    pub fn normalize(&self, language: &Language) -> Self {
        match &self.text {
            TranslationText::Single(_) => self.clone(),
            TranslationText::Plural(forms) => {
                let normalized = language
                    .categories
                    .iter()
                    .map(|c| (*c, forms.get(c).cloned().unwrap_or_default()))
                    .collect();
                Self {
                    id: self.id.clone(),
                    text: TranslationText::Plural(normalized),
                }
            }
        }
    }

    pub fn is_incomplete(&self, language: &Language) -> bool {
        match &self.text {
            TranslationText::Single(text) => text.is_empty(),
            TranslationText::Plural(forms) => language
                .categories
                .iter()
                .any(|c| forms.get(c).is_none_or(|s| s.is_empty())),
        }
    }

    /// Fill every blank form with the corresponding text from `source`.
    ///
    /// A plural form falls back to the source's `other` text when the source
    /// has nothing for that category. The result is still untranslated as far
    /// as the catalog is concerned; backfilled text is a hint for translators.
    pub fn backfill(mut self, source: &Translation) -> Self {
        match &mut self.text {
            TranslationText::Single(text) => {
                if text.is_empty() {
                    *text = source
                        .form(PluralCategory::Other)
                        .unwrap_or_default()
                        .to_string();
                }
            }
            TranslationText::Plural(forms) => {
                for (category, text) in forms.iter_mut() {
                    if text.is_empty() {
                        let fill = source
                            .form(*category)
                            .filter(|s| !s.is_empty())
                            .or_else(|| source.form(PluralCategory::Other))
                            .unwrap_or_default();
                        *text = fill.to_string();
                    }
                }
            }
        }
        self
    }
}

impl Serialize for Translation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Translation", 2)?;
        state.serialize_field("id", &self.id)?;
        match &self.text {
            TranslationText::Single(text) => state.serialize_field("translation", text)?,
            TranslationText::Plural(forms) => state.serialize_field("translation", forms)?,
        }
        state.end()
    }
}
