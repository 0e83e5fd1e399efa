//! Incremental-fold accumulators behind the [`Scan`] trait.
//!
//! This crate is the scan family of the Strata workspace. A scan folds
//! appended elements into running state and can surface its current result
//! at any point — including mid-sequence — without consuming anything:
//!
//! ```text
//! Scan (trait: append(value) / extract(&self, out))
//! ├── Sum           — wrapping running total of u32 values
//! └── StringBuilder — ordered borrowed string pieces, concatenated lazily
//! ```
//!
//! `extract` takes `&self`, so repeatability is a compile-time property:
//! extracting twice in a row yields identical output, and appends after an
//! extract are reflected in the next one.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod scan;
pub mod sum;

pub use builder::StringBuilder;
pub use scan::Scan;
pub use sum::Sum;
