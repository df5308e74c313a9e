//! Core collection utilities for underbar.
//!
//! This crate holds everything that runs synchronously: the collection
//! abstraction, the traversal/filtering/reduction operations built on it,
//! object merging and the advanced array operations.
//!
//! ## Key Components
//!
//! - **`collection`**: the [`Collection`] trait with its single traversal
//!   entry point, implemented for sequences and string-keyed mappings.
//! - **`capabilities`**: element-level traits ([`Truthy`], [`Property`],
//!   [`MappingMut`], [`Methods`]) that individual operations ask for.
//! - **`functional`**: the operations themselves.
//! - **`errors`**: the [`Error`] enum and [`Result`] alias.

pub mod capabilities;
pub mod collection;
pub mod errors;
pub mod functional;
pub mod nested;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use self::{
    capabilities::{MappingMut, Methods, Property, Truthy},
    collection::{Collection, Key},
    errors::{Error, Result, ResultExt},
    functional::*,
    nested::Nested,
};
