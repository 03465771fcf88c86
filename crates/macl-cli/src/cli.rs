//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};
use macl_core::Capabilities;

/// Edit Mosquitto ACL files
#[derive(Parser, Debug)]
#[command(name = "macl", version)]
#[command(about = "Add and remove users and topic permissions in Mosquitto ACL files", long_about = None)]
pub struct Cli {
    /// Mosquitto ACL file path
    #[arg(short, long, global = true, env = "MACL_ACL_FILE")]
    pub acl_file: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, global = true, env = "MACL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write the result back to the ACL file instead of printing it
    #[arg(short, long, global = true)]
    pub in_place: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Declare a new user with no topic permissions
    AddUser {
        /// Username to add
        #[arg(value_parser = acl_value)]
        username: String,
    },

    /// Remove a user and all of its topic permissions
    RmUser {
        /// Username to remove
        #[arg(value_parser = acl_value)]
        username: String,
    },

    /// Grant a user access to a topic, creating the user if needed
    #[command(group(
        ArgGroup::new("permission")
            .args(["read", "write"])
            .required(true)
            .multiple(true)
    ))]
    AddTopic {
        /// Username to grant access to
        #[arg(value_parser = acl_value)]
        username: String,
        /// Topic pattern
        #[arg(value_parser = acl_value)]
        topic: String,
        #[command(flatten)]
        permission: PermissionFlags,
    },

    /// Remove a user's grants matching the topic and permission exactly
    RmTopic {
        /// Username to remove the grant from
        #[arg(value_parser = acl_value)]
        username: String,
        /// Topic pattern
        #[arg(value_parser = acl_value)]
        topic: String,
        #[command(flatten)]
        permission: PermissionFlags,
    },

    /// Remove matching grants from every user
    RmTopicAll {
        /// Topic pattern
        #[arg(value_parser = acl_value)]
        topic: String,
        #[command(flatten)]
        permission: PermissionFlags,
    },

    /// List users and their topic permissions
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration file commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Accepts a username or topic only if it can be written as the tail of an
/// ACL line and read back unchanged.
fn acl_value(value: &str) -> Result<String, String> {
    if value.contains('\r') {
        return Err("must not contain a line break".to_string());
    }
    match macl_core::unwritable_reason(value) {
        Some(reason) => Err(format!("must be a single trimmed line, but it {reason}")),
        None => Ok(value.to_string()),
    }
}

/// `-r` / `-w` flags shared by the topic commands.
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermissionFlags {
    /// User can read from topic
    #[arg(short, long)]
    pub read: bool,

    /// User can write to topic
    #[arg(short, long)]
    pub write: bool,
}

impl PermissionFlags {
    /// The capability set the flags select. No flags selects the empty set.
    pub fn capabilities(&self) -> Capabilities {
        Capabilities::new(self.read, self.write)
    }
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Create a default config file
    Init {
        /// Where to create it (defaults to the platform config dir)
        #[arg(long)]
        file: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
