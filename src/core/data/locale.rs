use std::{fmt, path::Path, str::FromStr, sync::LazyLock};

use anyhow::{Context, Result, anyhow, bail};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// CLDR plural category.
///
/// Variants are declared in CLDR order so that a `BTreeMap` keyed by category
/// iterates `zero, one, two, few, many, other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PluralCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "zero" => Ok(PluralCategory::Zero),
            "one" => Ok(PluralCategory::One),
            "two" => Ok(PluralCategory::Two),
            "few" => Ok(PluralCategory::Few),
            "many" => Ok(PluralCategory::Many),
            "other" => Ok(PluralCategory::Other),
            _ => bail!("unknown plural category \"{}\"", s),
        }
    }
}

impl Serialize for PluralCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PluralCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A language and the plural categories its cardinal rules distinguish.
#[derive(Debug, PartialEq, Eq)]
pub struct Language {
    pub tag: &'static str,
    pub categories: &'static [PluralCategory],
}

impl Language {
    /// Look up a language by its (lowercase) subtag.
    pub fn find(tag: &str) -> Option<&'static Language> {
        LANGUAGES.iter().find(|lang| lang.tag == tag)
    }
}

use PluralCategory::{Few, Many, One, Other, Two, Zero};

const OTHER: &[PluralCategory] = &[Other];
const ONE_OTHER: &[PluralCategory] = &[One, Other];
const ZERO_ONE_OTHER: &[PluralCategory] = &[Zero, One, Other];
const ONE_TWO_OTHER: &[PluralCategory] = &[One, Two, Other];
const ONE_FEW_OTHER: &[PluralCategory] = &[One, Few, Other];
const ONE_TWO_FEW_OTHER: &[PluralCategory] = &[One, Two, Few, Other];
const ONE_FEW_MANY_OTHER: &[PluralCategory] = &[One, Few, Many, Other];
const ONE_TWO_MANY_OTHER: &[PluralCategory] = &[One, Two, Many, Other];
const ONE_TWO_FEW_MANY_OTHER: &[PluralCategory] = &[One, Two, Few, Many, Other];
const ALL: &[PluralCategory] = &[Zero, One, Two, Few, Many, Other];

macro_rules! languages {
    ($($categories:ident => [$($tag:literal),+ $(,)?]),+ $(,)?) => {
        &[$($(Language { tag: $tag, categories: $categories },)+)+]
    };
}

/// Cardinal plural categories per language (CLDR).
static LANGUAGES: &[Language] = languages! {
    OTHER => [
        "bo", "dz", "id", "ig", "ii", "ja", "jv", "km", "ko", "lo", "ms", "my", "sah", "ses",
        "sg", "th", "to", "vi", "wo", "yo", "yue", "zh",
    ],
    ONE_OTHER => [
        "af", "am", "as", "az", "bg", "bn", "ca", "da", "de", "el", "en", "eo", "es", "et",
        "eu", "fa", "fi", "fil", "fo", "fr", "fy", "gl", "gu", "ha", "hi", "hu", "hy", "is",
        "it", "ka", "kk", "kn", "ky", "lb", "mk", "ml", "mn", "mr", "nb", "ne", "nl", "nn",
        "no", "or", "pa", "ps", "pt", "si", "so", "sq", "sv", "sw", "ta", "te", "tk", "tr",
        "ug", "ur", "uz", "xh", "zu",
    ],
    ZERO_ONE_OTHER => ["ksh", "lag", "lv"],
    ONE_TWO_OTHER => ["iu", "naq", "se", "sma", "smi", "smj", "smn", "sms"],
    ONE_FEW_OTHER => ["bs", "cs", "hr", "mo", "ro", "sh", "sk", "sr"],
    ONE_TWO_FEW_OTHER => ["gd", "sl"],
    ONE_FEW_MANY_OTHER => ["be", "lt", "mt", "pl", "ru", "uk"],
    ONE_TWO_MANY_OTHER => ["he"],
    ONE_TWO_FEW_MANY_OTHER => ["br", "ga", "gv"],
    ALL => ["ar", "cy"],
};

static LOCALE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]{2,3})(?:[-_]([A-Za-z]{4}))?(?:[-_]([A-Za-z]{2}|[0-9]{3}))?$")
        .expect("locale id pattern is valid")
});

/// A validated locale identifier together with its plural rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    /// Canonical id, e.g. `en-US`, `zh-Hans-CN`, `fr`.
    pub id: String,
    pub language: &'static Language,
}

impl Locale {
    /// Validate and canonicalise a locale id.
    ///
    /// The language subtag is lowercased, a script subtag titlecased and a
    /// region uppercased; `_` separators become `-`.
    pub fn new(id: &str) -> Result<Self> {
        let caps = LOCALE_ID
            .captures(id)
            .ok_or_else(|| anyhow!("invalid locale \"{}\"", id))?;

        let lang = caps[1].to_ascii_lowercase();
        let language =
            Language::find(&lang).ok_or_else(|| anyhow!("unknown language \"{}\"", lang))?;

        let mut canonical = lang;
        if let Some(script) = caps.get(2) {
            let script = script.as_str();
            canonical.push('-');
            canonical.push_str(&script[..1].to_ascii_uppercase());
            canonical.push_str(&script[1..].to_ascii_lowercase());
        }
        if let Some(region) = caps.get(3) {
            canonical.push('-');
            canonical.push_str(&region.as_str().to_ascii_uppercase());
        }

        Ok(Self {
            id: canonical,
            language,
        })
    }

    /// Derive the locale from a catalog file name.
    ///
    /// - "en-US.all.json" -> en-US
    /// - "/path/to/fr.json" -> fr
    pub fn from_file_name(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .with_context(|| format!("Invalid file name: {}", path.display()))?;
        let id = name.split('.').next().unwrap_or(name);
        Self::new(id)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
