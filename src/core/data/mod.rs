//! Core data types shared by the scanner and the reconciler.
//!
//! ## Module Structure
//!
//! - `bundle`: Bundle and LocaleCatalog (per-locale entries)
//! - `locale`: Locale ids and CLDR plural categories
//! - `source`: Source code location type
//! - `translation`: Translation entries and their normalize/backfill primitives

pub mod bundle;
pub mod locale;
pub mod source;
pub mod translation;

pub use bundle::{Bundle, LocaleCatalog};
pub use locale::{Language, Locale, PluralCategory};
pub use source::SourceLocation;
pub use translation::{Translation, TranslationText};
