//! # macl-core
//!
//! Parser and serializer for Mosquitto ACL files.
//!
//! This crate turns the broker's line-oriented ACL syntax into a [`Document`]
//! that can be edited in memory and written back out:
//! - [`parse`]: ACL text → [`Document`]
//! - [`serialize`]: [`Document`] → canonical ACL text
//! - [`Document`] methods: add/remove users and topic grants
//!
//! The crate performs no I/O. Reading and writing the file is left to the
//! caller.
//!
//! # Example
//!
//! ```rust
//! use macl_core::{parse, serialize, Capabilities};
//!
//! let mut doc = parse("user alice\ntopic read a/b\n").unwrap();
//! doc.add_grant("bob", Capabilities::WRITE, "a/#");
//! doc.remove_grant_all_users(Capabilities::READ, "a/b");
//!
//! assert_eq!(serialize(&doc).unwrap(), "user alice\n\nuser bob\ntopic write a/#\n");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod document;
pub mod error;
pub mod grant;
pub mod parser;
pub mod serializer;

#[cfg(test)]
mod proptests;

pub use document::{Document, UserAcl};
pub use error::{Error, MalformedKind, Result};
pub use grant::{Capabilities, Grant};
pub use parser::parse;
pub use serializer::{serialize, unwritable_reason};
