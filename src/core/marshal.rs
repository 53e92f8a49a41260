use std::{fmt, str::FromStr};

use anyhow::{Context, Result, bail};

use crate::core::data::Translation;

/// Output format for written views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
}

impl Format {
    pub const SUPPORTED: &'static [&'static str] = &["json"];

    /// Resolve a format by name, failing for anything unsupported.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "json" => Ok(Format::Json),
            _ => bail!(
                "unsupported format: {} (supported: {})",
                name,
                Self::SUPPORTED.join(", ")
            ),
        }
    }

    /// File extension, also used as the format's name.
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Json => "json",
        }
    }

    /// Serialize an ordered list of entries.
    pub fn marshal(&self, entries: &[Translation]) -> Result<Vec<u8>> {
        match self {
            Format::Json => {
                let mut buf = serde_json::to_vec_pretty(entries)
                    .context("Failed to serialize translations to JSON")?;
                buf.push(b'\n');
                Ok(buf)
            }
        }
    }
}

impl FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
