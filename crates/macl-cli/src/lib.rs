//! # macl-cli
//!
//! Command-line tool for editing Mosquitto ACL files.
//!
//! The tool reads an ACL file, applies one edit through the [`macl_core`] crate
//! and prints the result (or writes it back with `--in-place`):
//! - `add-user` / `rm-user`
//! - `add-topic` / `rm-topic` / `rm-topic-all`
//! - `list`
//! - `config path|show|init`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod acl_file;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;

pub use error::{Error, Result};
