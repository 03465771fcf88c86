//! ACL text serialization.
//!
//! Output layout: top-level directives verbatim, then one section per user
//! (`user` line followed by its `topic` lines), with a blank line between
//! sections. Every line is newline-terminated.
//!
//! Usernames and topics are written as the tail of their line, so a value
//! that is blank, has surrounding whitespace or contains `\n` would read back
//! differently (or as extra directives). Such values are rejected with
//! [`Error::UnrepresentableText`] instead of being written.

use crate::document::{Document, UserAcl};
use crate::error::{Error, Result};

/// Serialize a [`Document`] back into ACL file text.
///
/// Fails with [`Error::UnrepresentableGrant`] if a grant has neither read nor
/// write, since the file format has no keyword for that, and with
/// [`Error::UnrepresentableText`] if a username or topic fails
/// [`unwritable_reason`].
///
/// # Example
///
/// ```rust
/// use macl_core::{serialize, Capabilities, Document};
///
/// let mut doc = Document::new();
/// doc.add_grant("carol", Capabilities::READ, "sensors/#");
/// assert_eq!(serialize(&doc).unwrap(), "user carol\ntopic read sensors/#\n");
/// ```
pub fn serialize(doc: &Document) -> Result<String> {
    let mut out = String::new();

    for directive in doc.top_level_directives() {
        out.push_str(directive);
        out.push('\n');
    }

    for (index, user) in doc.users().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        write_user(&mut out, user)?;
    }

    Ok(out)
}

/// Why `value` cannot be written as a username or topic, or `None` if it
/// reads back unchanged.
///
/// ```rust
/// use macl_core::serializer::unwritable_reason;
///
/// assert_eq!(unwritable_reason("sensors/+/temp"), None);
/// assert_eq!(unwritable_reason("  "), Some("is blank"));
/// ```
pub fn unwritable_reason(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some("is blank")
    } else if value.contains('\n') {
        Some("contains a line break")
    } else if value.trim() != value {
        Some("has leading or trailing whitespace")
    } else {
        None
    }
}

fn check_text<'a>(field: &'static str, value: &'a str) -> Result<&'a str> {
    match unwritable_reason(value) {
        Some(reason) => Err(Error::UnrepresentableText {
            field,
            value: value.to_string(),
            reason,
        }),
        None => Ok(value),
    }
}

fn write_user(out: &mut String, user: &UserAcl) -> Result<()> {
    out.push_str("user ");
    out.push_str(check_text("username", &user.username)?);
    out.push('\n');
    for grant in &user.grants {
        let qualifier = grant.capabilities.qualifier().ok_or_else(|| {
            Error::UnrepresentableGrant {
                username: user.username.clone(),
                topic: grant.topic.clone(),
            }
        })?;
        let topic = check_text("topic", &grant.topic)?;
        out.push_str(&format!("topic {qualifier} {topic}\n"));
    }
    Ok(())
}
