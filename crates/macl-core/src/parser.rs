//! ACL text parsing.
//!
//! The file is read line by line. `user` lines open a user section, `topic`
//! lines add a grant to the open section, and everything else the format
//! allows (`pattern` rules, comments, blank lines ahead of the first user) is
//! kept verbatim as a top-level directive.
//!
//! # Example
//!
//! ```rust
//! use macl_core::{parse, Capabilities};
//!
//! let doc = parse("# sensors\nuser alice\ntopic read sensors/#\n").unwrap();
//! assert_eq!(doc.top_level_directives(), ["# sensors"]);
//!
//! let grants = doc.user("alice").unwrap();
//! assert_eq!(grants[0].capabilities, Capabilities::READ);
//! assert_eq!(grants[0].topic, "sensors/#");
//! ```

use crate::document::Document;
use crate::error::{Error, MalformedKind, Result};
use crate::grant::Capabilities;

const USER: &str = "user";
const TOPIC: &str = "topic";
const PATTERN: &str = "pattern";
const DENY: &str = "deny";

/// Parse ACL file text into a [`Document`].
///
/// Empty input yields an empty document. Fails with
/// [`Error::Malformed`] on the first line that is not a valid directive.
pub fn parse(text: &str) -> Result<Document> {
    let mut doc = Document::new();
    let mut current_user: Option<String> = None;

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        // `lines` only strips a `\r` that directly precedes `\n`.
        let raw = raw.trim_end_matches('\r');
        let line = raw.trim();

        if line.is_empty() {
            // Blank lines inside user sections are layout only.
            if current_user.is_none() {
                doc.push_directive(raw);
            }
            continue;
        }
        if line.starts_with('#') {
            doc.push_directive(raw);
            continue;
        }

        let (keyword, rest) = split_token(line);
        match keyword {
            USER => {
                if rest.is_empty() {
                    return Err(Error::malformed(line_no, MalformedKind::MissingUsername));
                }
                doc.open_user(rest);
                current_user = Some(rest.to_string());
            }
            TOPIC => {
                let username = current_user
                    .as_deref()
                    .ok_or_else(|| Error::malformed(line_no, MalformedKind::PermissionBeforeUser))?;
                let (capabilities, topic) =
                    parse_topic_args(rest).map_err(|kind| Error::malformed(line_no, kind))?;
                doc.add_grant(username, capabilities, topic);
            }
            PATTERN => doc.push_directive(raw),
            other => {
                return Err(Error::malformed(
                    line_no,
                    MalformedKind::UnknownDirective(other.to_string()),
                ));
            }
        }
    }

    Ok(doc)
}

/// Splits the arguments of a `topic` line into its capabilities and pattern.
///
/// An omitted qualifier means read-write. `deny` is rejected rather than read
/// as part of the topic.
fn parse_topic_args(args: &str) -> std::result::Result<(Capabilities, &str), MalformedKind> {
    let (first, remainder) = split_token(args);
    if first.eq_ignore_ascii_case(DENY) && !remainder.is_empty() {
        return Err(MalformedKind::UnsupportedQualifier(first.to_string()));
    }
    let (capabilities, topic) = match Capabilities::from_qualifier(first) {
        Some(capabilities) => (capabilities, remainder),
        None => (Capabilities::READ_WRITE, args),
    };
    if topic.is_empty() {
        Err(MalformedKind::MissingTopic)
    } else {
        Ok((capabilities, topic))
    }
}

/// Splits off the first whitespace-delimited token. The remainder has its
/// leading whitespace removed but is otherwise left intact.
fn split_token(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(at) => (&s[..at], s[at..].trim_start()),
        None => (s, ""),
    }
}
