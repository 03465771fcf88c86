//! ACL command handlers.
//!
//! Each `cmd_*` function loads the ACL file, applies one edit and returns the
//! edited [`Document`]. [`handle_command`] wires them to the parsed command
//! line and either prints the re-serialized file or writes it back.

use std::io::Write;
use std::path::{Path, PathBuf};

use macl_core::{Capabilities, Document, UserAcl};

use crate::acl_file::{load_document, load_document_or_default, write_acl_file};
use crate::cli::{Cli, Command};
use crate::config::MaclConfig;
use crate::config_handlers::handle_config_command;
use crate::error::{Error, Result};

/// Settings for one invocation, merged from the command line and config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    /// ACL file to operate on.
    pub acl_file: Option<PathBuf>,
    /// Write back instead of printing.
    pub in_place: bool,
    /// Explicit config file, if one was given.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Command-line values win over config values.
    pub fn resolve(cli: &Cli, config: &MaclConfig) -> Self {
        Self {
            acl_file: cli.acl_file.clone().or_else(|| config.acl_file.clone()),
            in_place: cli.in_place || config.in_place,
            config_path: cli.config.clone(),
        }
    }

    /// The ACL file, or [`Error::NoAclFile`] if none was configured.
    pub fn acl_file(&self) -> Result<&Path> {
        self.acl_file.as_deref().ok_or(Error::NoAclFile)
    }
}

/// Runs a command, writing any output to `out`.
pub fn handle_command(ctx: &Context, command: Command, out: &mut dyn Write) -> Result<()> {
    let doc = match command {
        Command::AddUser { username } => cmd_add_user(ctx.acl_file()?, &username)?,
        Command::RmUser { username } => cmd_rm_user(ctx.acl_file()?, &username)?,
        Command::AddTopic {
            username,
            topic,
            permission,
        } => cmd_add_topic(ctx.acl_file()?, &username, &topic, permission.capabilities())?,
        Command::RmTopic {
            username,
            topic,
            permission,
        } => cmd_rm_topic(ctx.acl_file()?, &username, &topic, permission.capabilities())?,
        Command::RmTopicAll { topic, permission } => {
            cmd_rm_topic_all(ctx.acl_file()?, &topic, permission.capabilities())?
        }
        Command::List { json } => {
            let listing = cmd_list(ctx.acl_file()?, json)?;
            return write_out(out, &listing);
        }
        Command::Config { action } => {
            return handle_config_command(ctx.config_path.as_deref(), action, out);
        }
    };

    emit(ctx, &doc, out)
}

/// Serializes the document and prints it or writes it back.
pub fn emit(ctx: &Context, doc: &Document, out: &mut dyn Write) -> Result<()> {
    let text = macl_core::serialize(doc)?;
    if ctx.in_place {
        write_acl_file(ctx.acl_file()?, &text)
    } else {
        write_out(out, &text)
    }
}

/// `add-user`: the file must exist and the user must be new.
pub fn cmd_add_user(acl_file: &Path, username: &str) -> Result<Document> {
    let mut doc = load_document(acl_file)?;
    doc.add_user(username)?;
    tracing::debug!(username, "Added user");
    Ok(doc)
}

/// `rm-user`: the file and the user must exist.
pub fn cmd_rm_user(acl_file: &Path, username: &str) -> Result<Document> {
    let mut doc = load_document(acl_file)?;
    doc.remove_user(username)?;
    tracing::debug!(username, "Removed user");
    Ok(doc)
}

/// `add-topic`: a missing file starts an empty document and a missing user
/// is created.
pub fn cmd_add_topic(
    acl_file: &Path,
    username: &str,
    topic: &str,
    capabilities: Capabilities,
) -> Result<Document> {
    let mut doc = load_document_or_default(acl_file)?;
    if !doc.contains_user(username) {
        tracing::info!(username, "User not declared yet, creating it");
    }
    doc.add_grant(username, capabilities, topic);
    tracing::debug!(username, topic, %capabilities, "Added grant");
    Ok(doc)
}

/// `rm-topic`: removes every exact match from one user.
pub fn cmd_rm_topic(
    acl_file: &Path,
    username: &str,
    topic: &str,
    capabilities: Capabilities,
) -> Result<Document> {
    let mut doc = load_document(acl_file)?;
    let removed = doc.remove_grant(username, capabilities, topic)?;
    log_removed(removed, topic, capabilities);
    Ok(doc)
}

/// `rm-topic-all`: removes every exact match from all users.
pub fn cmd_rm_topic_all(
    acl_file: &Path,
    topic: &str,
    capabilities: Capabilities,
) -> Result<Document> {
    let mut doc = load_document(acl_file)?;
    let removed = doc.remove_grant_all_users(capabilities, topic);
    log_removed(removed, topic, capabilities);
    Ok(doc)
}

/// `list`: users and their grants, as text or JSON.
pub fn cmd_list(acl_file: &Path, json: bool) -> Result<String> {
    let doc = load_document(acl_file)?;
    if json {
        let users: Vec<&UserAcl> = doc.users().collect();
        let mut rendered = serde_json::to_string_pretty(&users)?;
        rendered.push('\n');
        return Ok(rendered);
    }
    Ok(format_listing(&doc))
}

/// Plain-text listing: one line per user, grants indented beneath.
pub fn format_listing(doc: &Document) -> String {
    let mut listing = String::new();
    for user in doc.users() {
        listing.push_str(&user.username);
        listing.push('\n');
        if user.grants.is_empty() {
            listing.push_str("  (no topics)\n");
        }
        for grant in &user.grants {
            listing.push_str(&format!("  {:<9} {}\n", grant.capabilities, grant.topic));
        }
    }
    listing
}

fn log_removed(removed: usize, topic: &str, capabilities: Capabilities) {
    if removed == 0 {
        tracing::warn!(topic, %capabilities, "No matching grant to remove");
    } else {
        tracing::debug!(topic, %capabilities, removed, "Removed grants");
    }
}

fn write_out(out: &mut dyn Write, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())
        .map_err(|e| Error::io_with_path(e, "<stdout>"))
}
