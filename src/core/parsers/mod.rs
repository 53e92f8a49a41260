//! File parsers for translation catalogs and Go source.
//!
//! - `catalog`: JSON catalog file parser (list and flat layouts)
//! - `go`: Go source parser (uses tree-sitter for the syntax tree)

pub mod catalog;
pub mod go;
