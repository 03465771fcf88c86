//! Editing scenarios mirroring the command-line operations.

use macl_core::{parse, serialize, Capabilities, Error, Grant, MalformedKind};

#[test]
fn test_bulk_removal_scenario() {
    let mut doc = parse(
        "user alice\ntopic read a/b\ntopic write a/b\ntopic read a/b\nuser bob\ntopic read a/b\n",
    )
    .unwrap();

    doc.remove_grant_all_users(Capabilities::READ, "a/b");

    assert_eq!(
        doc.user("alice").unwrap(),
        [Grant::new(Capabilities::WRITE, "a/b")]
    );
    assert_eq!(doc.user("bob"), Some(&[][..]));
    assert_eq!(
        serialize(&doc).unwrap(),
        "user alice\ntopic write a/b\n\nuser bob\n"
    );
}

#[test]
fn test_add_user_keeps_order() {
    let mut doc = parse("user zed\ntopic read z\nuser amy\n").unwrap();
    doc.add_user("mike").unwrap();

    let reparsed = parse(&serialize(&doc).unwrap()).unwrap();
    assert_eq!(
        reparsed.usernames().collect::<Vec<_>>(),
        ["zed", "amy", "mike"]
    );
    assert_eq!(reparsed.user("mike"), Some(&[][..]));
}

#[test]
fn test_grant_auto_creates_user() {
    let mut doc = parse("user alice\n").unwrap();
    doc.add_grant("carol", Capabilities::READ, "sensors/#");

    assert_eq!(
        doc.user("carol").unwrap(),
        [Grant::new(Capabilities::READ, "sensors/#")]
    );
    assert_eq!(
        serialize(&doc).unwrap(),
        "user alice\n\nuser carol\ntopic read sensors/#\n"
    );
}

#[test]
fn test_remove_user_then_missing() {
    let mut doc = parse("user alice\ntopic read a\nuser bob\n").unwrap();
    doc.remove_user("alice").unwrap();
    assert_eq!(serialize(&doc).unwrap(), "user bob\n");

    assert!(matches!(
        doc.remove_user("alice"),
        Err(Error::UserNotFound { username }) if username == "alice"
    ));
}

#[test]
fn test_malformed_input_reports_line() {
    let err = parse("# header\ntopic read x/y\n").unwrap_err();
    assert_eq!(err.malformed_kind(), Some(&MalformedKind::PermissionBeforeUser));
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn test_unrepresentable_grant_leaves_document_usable() {
    let mut doc = parse("user alice\n").unwrap();
    doc.add_grant("alice", Capabilities::NONE, "x");
    assert!(matches!(
        serialize(&doc),
        Err(Error::UnrepresentableGrant { .. })
    ));

    doc.remove_grant("alice", Capabilities::NONE, "x").unwrap();
    assert_eq!(serialize(&doc).unwrap(), "user alice\n");
}

#[test]
fn test_injected_username_is_never_written() {
    let mut doc = parse("user alice\ntopic read a/b\n").unwrap();
    doc.add_user("mallory\ntopic readwrite #").unwrap();

    assert!(matches!(
        serialize(&doc),
        Err(Error::UnrepresentableText { field: "username", .. })
    ));

    doc.remove_user("mallory\ntopic readwrite #").unwrap();
    assert_eq!(serialize(&doc).unwrap(), "user alice\ntopic read a/b\n");
}
