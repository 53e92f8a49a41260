//! siftmerge - translation catalog merger for Go projects using go-i18n
//!
//! siftmerge loads per-locale translation catalogs, optionally scans Go
//! source for message ids passed to the translate function, reconciles every
//! locale against the source locale, and writes an `all` and an
//! `untranslated` view per locale.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog model, Go scanner, reconciliation and output

pub mod cli;
pub mod config;
pub mod core;
