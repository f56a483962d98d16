//! A string dictionary backed by an unbalanced binary search tree.
//!
//! This crate provides [`Bst`], an ordered container of unique-key [`Entry`] values, and
//! [`Dictionary`], a thin wrapper that forwards to it. Unlike the standard library's
//! collections, every fallible operation reports *why* it failed through [`Error`]:
//!
//! - [`insert`](Bst::insert) refuses duplicate keys with [`Error::DuplicateKey`]
//! - [`retrieve`](Bst::retrieve) distinguishes [`Error::EmptyCollection`] from [`Error::KeyNotFound`]
//! - [`traverse_in_order`](Bst::traverse_in_order) visits entries in ascending key order
//!
//! # Example
//!
//! ```
//! use dict_tree::{Dictionary, Entry, Error};
//!
//! let mut dict = Dictionary::new();
//! dict.put(Entry::new("dog", "chien")).unwrap();
//! dict.put(Entry::new("cat", "chat")).unwrap();
//!
//! assert_eq!(dict.get("dog").unwrap().value(), "chien");
//! assert!(matches!(dict.get("fish"), Err(Error::KeyNotFound { .. })));
//!
//! // Duplicate keys are rejected, the stored value is kept.
//! assert!(matches!(dict.put(Entry::new("cat", "chatte")), Err(Error::DuplicateKey { .. })));
//!
//! let mut lines = Vec::new();
//! dict.display_content(|entry| lines.push(entry.to_string())).unwrap();
//! assert_eq!(lines, ["cat:chat", "dog:chien"]);
//! ```
//!
//! # Key ordering
//!
//! Keys are compared with `Ord for str`: byte-wise lexicographic order over UTF-8, which is
//! the same as ordering by Unicode scalar value. Comparison is case-sensitive and
//! locale-independent, so `"Zebra" < "apple"`.
//!
//! # Implementation
//!
//! The tree is not self-balancing. Nodes are stored in a contiguous arena and refer to their
//! children by handle, so insertion, lookup and traversal are iterative and a degenerate
//! (list-shaped) tree cannot exhaust the call stack.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod entry;
mod error;
mod raw;

pub mod bst;
pub mod dictionary;

pub use bst::Bst;
pub use dictionary::Dictionary;
pub use entry::Entry;
pub use error::{AllocationError, Error, Result};
