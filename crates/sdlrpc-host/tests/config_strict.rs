#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use sdlrpc_core::ProtocolVersion;
use sdlrpc_host::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
protocol:
  version: 4
limits:
  max_frame_bytez: 4096 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.protocol_version().unwrap(), ProtocolVersion::LATEST);
    assert_eq!(cfg.min_protocol_version().unwrap(), ProtocolVersion::MIN);
    assert_eq!(cfg.limits.max_frame_bytes, 131072);
    assert!(cfg.policy.allow.is_empty());
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
protocol:
  version: 3
  min_version: 2
limits:
  max_frame_bytes: 4096
policy:
  allow: ["request:DeleteCommand", "notification:*"]
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.protocol_version().unwrap().get(), 3);
    assert_eq!(cfg.limits.max_frame_bytes, 4096);
    assert_eq!(cfg.policy.allow.len(), 2);
}

#[test]
fn rejects_unsupported_protocol_version() {
    let err = config::load_from_str("version: 1\nprotocol:\n  version: 9\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn rejects_min_above_version() {
    let err = config::load_from_str("version: 1\nprotocol:\n  version: 2\n  min_version: 4\n")
        .expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}

#[test]
fn rejects_frame_limit_out_of_range() {
    for limit in [16, 64 * 1024 * 1024] {
        let s = format!("version: 1\nlimits:\n  max_frame_bytes: {limit}\n");
        let err = config::load_from_str(&s).expect_err("must fail");
        assert_eq!(err.code().as_str(), "BAD_REQUEST", "limit={limit}");
    }
}

#[test]
fn rejects_bad_config_version_and_rules() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");

    let err = config::load_from_str("version: 1\npolicy:\n  allow: [\"broadcast:*\"]\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");

    let err = config::load_from_str("version: 1\npolicy:\n  allow: [\"DeleteCommand\"]\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_REQUEST");
}

#[test]
fn missing_file_is_internal() {
    let err = config::load_from_file("does/not/exist.yaml").expect_err("must fail");
    assert_eq!(err.code().as_str(), "INTERNAL");
}
