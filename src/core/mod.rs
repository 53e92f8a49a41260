//! Core merge engine.
//!
//! ## Pipeline
//!
//! 1. `parsers::catalog` + `data::Bundle`: load every catalog file
//! 2. `file_scanner` + `extract`: sift Go source for message ids
//! 3. `reconcile`: add discovered ids and fill missing entries per locale
//! 4. `views` + `marshal` + `writer`: build and write the output views

pub mod context;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod marshal;
pub mod parsers;
pub mod reconcile;
pub mod views;
pub mod writer;

pub use context::MergeContext;
