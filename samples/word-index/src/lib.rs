//! # Word Index Sample Application
//!
//! Counts word occurrences in text and keeps them in a [`bstmap::BstMap`],
//! so that the words come back in alphabetical order for free.
//!
//! ## Module Structure
//!
//! - `error`: Errors raised while reading input
//! - `index`: Tokenizing text and accumulating counts
//! - `report`: Rendering an index in the supported output formats

#![forbid(unsafe_code)]

pub mod error;
pub mod index;
pub mod report;

pub use error::IndexError;
pub use index::{WordIndex, words};
pub use report::{Format, render};
