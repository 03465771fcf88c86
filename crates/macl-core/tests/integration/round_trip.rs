//! Round-trip behaviour over full ACL files.

use macl_core::{parse, serialize, Capabilities, Grant};

const BROKER_ACL: &str = "\
# Mosquitto ACL
# Managed by macl

pattern read $SYS/broker/load/#
pattern write devices/%c/status

user admin
topic readwrite #

user sensor-01
topic write sensors/sensor-01/#
topic read config/sensor-01
# legacy topic, remove after migration
topic sensors/legacy

user dashboard
topic read sensors/+/temperature
topic read sensors/+/humidity
";

#[test]
fn test_broker_file_structure() {
    let doc = parse(BROKER_ACL).unwrap();

    assert_eq!(
        doc.top_level_directives(),
        [
            "# Mosquitto ACL",
            "# Managed by macl",
            "",
            "pattern read $SYS/broker/load/#",
            "pattern write devices/%c/status",
            "",
            "# legacy topic, remove after migration",
        ]
    );
    assert_eq!(
        doc.usernames().collect::<Vec<_>>(),
        ["admin", "sensor-01", "dashboard"]
    );
    assert_eq!(
        doc.user("sensor-01").unwrap(),
        [
            Grant::new(Capabilities::WRITE, "sensors/sensor-01/#"),
            Grant::new(Capabilities::READ, "config/sensor-01"),
            Grant::new(Capabilities::READ_WRITE, "sensors/legacy"),
        ]
    );
}

#[test]
fn test_broker_file_round_trips() {
    let doc = parse(BROKER_ACL).unwrap();
    let text = serialize(&doc).unwrap();
    assert_eq!(parse(&text).unwrap(), doc);
    assert_eq!(serialize(&parse(&text).unwrap()).unwrap(), text);
}

#[test]
fn test_canonical_file_is_unchanged() {
    let canonical = "\
# acl
pattern read $SYS/#
user alice
topic read a/b

user bob

user carol
topic write c/#
";
    let doc = parse(canonical).unwrap();
    assert_eq!(serialize(&doc).unwrap(), canonical);
}

#[test]
fn test_empty_and_comment_only_files() {
    assert_eq!(serialize(&parse("").unwrap()).unwrap(), "");

    let comments = "# nothing here yet\n\n";
    let doc = parse(comments).unwrap();
    assert_eq!(doc.usernames().count(), 0);
    assert_eq!(serialize(&doc).unwrap(), comments);
}

#[test]
fn test_crlf_files_round_trip() {
    let crlf = BROKER_ACL.replace('\n', "\r\n");
    let doc = parse(&crlf).unwrap();
    assert_eq!(doc, parse(BROKER_ACL).unwrap());
    assert_eq!(serialize(&doc).unwrap(), serialize(&parse(BROKER_ACL).unwrap()).unwrap());

    for text in ["# header\r", "# header\r\r\n", "user alice\r\ntopic read a/b\r"] {
        let first = parse(text).unwrap();
        let second = parse(&serialize(&first).unwrap()).unwrap();
        assert_eq!(first, second, "round trip of {text:?}");
    }
}
