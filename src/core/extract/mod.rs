//! Go source scanner ("sift").
//!
//! Two independent passes over the same file set:
//!
//! 1. `alias`: find `T := i18n.MustTfunc(...)` and remember `T`
//! 2. `literals`: collect every string literal passed to `T(...)`
//!
//! The alias found by the first pass is an explicit input to the second.

pub mod alias;
pub mod factory;
pub mod literals;


use std::path::PathBuf;

use anyhow::Result;

pub use alias::discover_alias;
pub use factory::{DEFAULT_FACTORY, FactoryName};
pub use literals::{RawLiteral, collect_literals};

/// Result of sifting a file set.
#[derive(Debug, Default)]
pub struct SiftOutcome {
    /// Local name bound to the factory result, if one was found.
    pub alias: Option<String>,
    /// Literal arguments of calls to the alias.
    pub literals: Vec<RawLiteral>,
}

impl SiftOutcome {
    /// Message ids in collection order (duplicates preserved).
    pub fn message_ids(&self) -> Vec<String> {
        self.literals
            .iter()
            .map(|l| l.message_id().to_string())
            .collect()
    }
}

/// Run both passes. Collection is skipped when no alias is found.
pub fn sift(files: &[PathBuf], factory: &FactoryName) -> Result<SiftOutcome> {
    let Some(alias) = discover_alias(files, factory)? else {
        return Ok(SiftOutcome::default());
    };
    let literals = collect_literals(files, &alias)?;
    Ok(SiftOutcome {
        alias: Some(alias),
        literals,
    })
}
