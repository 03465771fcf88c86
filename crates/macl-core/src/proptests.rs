//! Property-based tests for the parse/serialize round trip.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::{parse, serialize, Capabilities, Document, Error};
    use proptest::prelude::*;

    fn capabilities() -> impl Strategy<Value = Capabilities> {
        prop_oneof![
            Just(Capabilities::READ),
            Just(Capabilities::WRITE),
            Just(Capabilities::READ_WRITE),
        ]
    }

    fn directive() -> impl Strategy<Value = String> {
        prop_oneof![
            "# [a-z ]{0,12}",
            "pattern (read|write|readwrite) [a-z/%+#]{1,12}",
            Just(String::new()),
        ]
    }

    fn document() -> impl Strategy<Value = Document> {
        let user = (
            "[A-Za-z0-9_.-]{1,10}",
            prop::collection::vec((capabilities(), "[a-z0-9/+#$]{1,16}"), 0..5),
        );
        (
            prop::collection::vec(directive(), 0..4),
            prop::collection::vec(user, 0..6),
        )
            .prop_map(|(directives, users)| {
                let mut doc = Document::new();
                for line in directives {
                    doc.push_directive(line);
                }
                for (username, grants) in users {
                    let _ = doc.add_user(&username);
                    for (capabilities, topic) in grants {
                        doc.add_grant(&username, capabilities, &topic);
                    }
                }
                doc
            })
    }

    /// Lines as they show up in hand-edited files: padded, blank,
    /// whitespace-only and carriage-return-terminated.
    fn raw_line() -> impl Strategy<Value = String> {
        prop_oneof![
            "[ \t]{0,3}# [a-z ]{0,8}\r{0,2}",
            "[ \t]{0,3}",
            "\r",
            "pattern read [a-z/#]{1,8}[ \t\r]{0,2}",
            "[ \t]{0,2}user[ \t]{1,2}[a-z]{1,4}( [a-z]{1,3})?[ \t\r]{0,2}",
            "[ \t]{0,2}topic[ \t]{1,2}(read |write |readwrite |READ |)[a-z/+#]{1,8}( x)?[ \t\r]{0,2}",
        ]
    }

    fn raw_text() -> impl Strategy<Value = String> {
        (
            prop::collection::vec(raw_line(), 0..10),
            prop_oneof![Just("\n"), Just("\r\n")],
            any::<bool>(),
        )
            .prop_map(|(lines, newline, terminated)| {
                let mut text = lines.join(newline);
                if terminated {
                    text.push_str(newline);
                }
                text
            })
    }

    /// Usernames and topics a caller might hand the document API, including
    /// ones no ACL line can carry.
    fn loose_text() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-z/#]{1,6}",
            "[a-z]{1,3}[ \t][a-z]{1,3}",
            "[ \t\r\n]{0,3}",
            "[ \t]?[a-z]{1,4}[ \t\r\n]{0,2}",
            "[a-z]{1,3}\n(topic readwrite #|user root)",
        ]
    }

    proptest! {
        #[test]
        fn test_accepted_text_round_trips(text in raw_text()) {
            if let Ok(first) = parse(&text) {
                let second = parse(&serialize(&first).unwrap()).unwrap();
                prop_assert_eq!(first, second);
            }
        }

        #[test]
        fn test_loose_values_reparse_or_are_rejected(
            grants in prop::collection::vec((loose_text(), capabilities(), loose_text()), 0..6)
        ) {
            let mut doc = Document::new();
            for (username, capabilities, topic) in &grants {
                doc.add_grant(username, *capabilities, topic);
            }
            match serialize(&doc) {
                Ok(text) => prop_assert_eq!(parse(&text).unwrap(), doc),
                Err(err) => prop_assert!(
                    matches!(err, Error::UnrepresentableText { .. }),
                    "unexpected error {:?}",
                    err
                ),
            }
        }


        #[test]
        fn test_serialized_document_parses_back(doc in document()) {
            let text = serialize(&doc).unwrap();
            prop_assert_eq!(parse(&text).unwrap(), doc);
        }

        #[test]
        fn test_round_trip_is_idempotent(doc in document()) {
            let text = serialize(&doc).unwrap();
            let first = parse(&text).unwrap();
            let second = parse(&serialize(&first).unwrap()).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_new_user_is_last(doc in document(), name in "new@[a-z]{1,6}") {
            let mut doc = doc;
            let before: Vec<String> = doc.usernames().map(str::to_string).collect();
            doc.add_user(&name).unwrap();

            let reparsed = parse(&serialize(&doc).unwrap()).unwrap();
            let after: Vec<String> = reparsed.usernames().map(str::to_string).collect();
            prop_assert_eq!(&after[..before.len()], &before[..]);
            prop_assert_eq!(after.last(), Some(&name));
        }
    }
}
