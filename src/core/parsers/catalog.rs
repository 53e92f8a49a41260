use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use serde_json::Value;

use crate::core::data::{Locale, PluralCategory, Translation};

/// Entries read from one catalog file.
#[derive(Debug)]
pub struct ParsedCatalog {
    pub locale: Locale,
    pub entries: Vec<Translation>,
}

/// One element of the list form: `{"id": "...", "translation": ...}`.
#[derive(Debug, Deserialize)]
struct ListEntry {
    id: String,
    #[serde(default)]
    translation: Option<Value>,
}

/// Load a catalog file. The locale comes from the file name.
pub fn parse_catalog_file(path: &Path) -> Result<ParsedCatalog> {
    let locale = Locale::from_file_name(path)
        .with_context(|| format!("Failed to determine locale of {}", path.display()))?;

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

    let entries = parse_catalog_str(&content)
        .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;

    Ok(ParsedCatalog { locale, entries })
}

/// Parse catalog content in either supported layout.
///
/// List form:
/// ```json
/// [{"id": "greeting", "translation": "Hi"}]
/// ```
/// Flat form:
/// ```json
/// {"greeting": "Hi", "items": {"one": "item", "other": "items"}}
/// ```
pub fn parse_catalog_str(content: &str) -> Result<Vec<Translation>> {
    let json: Value = serde_json::from_str(content)?;

    match json {
        Value::Array(items) => items
            .into_iter()
            .map(|item| {
                let entry: ListEntry = serde_json::from_value(item)?;
                parse_entry(entry.id, entry.translation.unwrap_or(Value::Null))
            })
            .collect(),
        Value::Object(map) => map
            .into_iter()
            .map(|(id, value)| parse_entry(id, value))
            .collect(),
        _ => bail!("catalog root must be a list of entries or an object"),
    }
}

fn parse_entry(id: String, value: Value) -> Result<Translation> {
    match value {
        Value::Null => Ok(Translation::untranslated(id)),
        Value::String(text) => Ok(Translation::single(id, text)),
        Value::Object(map) => {
            let mut forms = BTreeMap::new();
            for (category, text) in map {
                let category: PluralCategory = category
                    .parse()
                    .with_context(|| format!("in translation \"{}\"", id))?;
                let text = match text {
                    Value::String(s) => s,
                    Value::Null => String::new(),
                    other => bail!(
                        "translation \"{}\" has a non-string {} form: {}",
                        id,
                        category,
                        other
                    ),
                };
                forms.insert(category, text);
            }
            Ok(Translation::plural(id, forms))
        }
        other => bail!("translation \"{}\" has unsupported value: {}", id, other),
    }
}
