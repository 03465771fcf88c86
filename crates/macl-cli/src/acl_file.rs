//! Reading and writing the ACL file.

use std::io::Write;
use std::path::Path;

use macl_core::Document;

use crate::error::{Error, Result};

/// Reads the ACL file as text.
pub fn read_acl_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::AclFileNotFound(path.to_path_buf())
        } else {
            Error::io_with_path(e, path)
        }
    })
}

/// Writes ACL text to the file, replacing its contents.
///
/// The text goes to a temporary file in the same directory which is then
/// renamed over `path`, so a failed write leaves the old file intact. An
/// existing file's permissions carry over to the new one.
pub fn write_acl_file(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp =
        tempfile::NamedTempFile::new_in(dir).map_err(|e| Error::io_with_path(e, dir))?;
    tmp.write_all(content.as_bytes())
        .map_err(|e| Error::io_with_path(e, tmp.path()))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| Error::io_with_path(e, tmp.path()))?;
    if let Ok(metadata) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| Error::io_with_path(e, tmp.path()))?;
    }
    tmp.persist(path).map_err(|e| Error::io_with_path(e.error, path))?;
    tracing::info!(path = %path.display(), bytes = content.len(), "Wrote ACL file");
    Ok(())
}

/// Reads and parses an ACL file that must exist.
pub fn load_document(path: &Path) -> Result<Document> {
    let text = read_acl_file(path)?;
    let doc = macl_core::parse(&text)?;
    tracing::debug!(
        path = %path.display(),
        users = doc.usernames().count(),
        "Parsed ACL file"
    );
    Ok(doc)
}

/// Like [`load_document`], but a missing file yields an empty document.
pub fn load_document_or_default(path: &Path) -> Result<Document> {
    match load_document(path) {
        Err(Error::AclFileNotFound(_)) => {
            tracing::debug!(path = %path.display(), "ACL file missing, starting empty");
            Ok(Document::new())
        }
        other => other,
    }
}
