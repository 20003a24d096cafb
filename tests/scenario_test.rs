// tests/scenario_test.rs
use semver_tag::domain::{apply_bump, BumpKind, BumpOutcome, VersionTag};

fn next(raw: &str, token: &str) -> String {
    let current = VersionTag::parse(raw).expect("tag should parse");
    let kind = BumpKind::from_token(token).expect("token should be valid");
    match apply_bump(current, kind) {
        BumpOutcome::Next(tag) => tag.to_string(),
        other => panic!("expected a new tag, got {:?}", other),
    }
}

#[test]
fn test_major_from_final_release() {
    assert_eq!(next("v1.2.3", "M"), "v2.0.0");
}

#[test]
fn test_minor_from_final_release() {
    assert_eq!(next("v1.2.3", "m"), "v1.3.0");
}

#[test]
fn test_patch_from_final_release() {
    assert_eq!(next("v1.2.3", "p"), "v1.2.4");
}

#[test]
fn test_release_candidate_twice() {
    let rc1 = next("v1.2.3", "rc");
    assert_eq!(rc1, "v1.2.3-rc1");
    assert_eq!(next(&rc1, "rc"), "v1.2.3-rc2");
}

#[test]
fn test_patch_finalizes_release_candidate() {
    assert_eq!(next("v1.2.3-rc2", "p"), "v1.2.3");
}

#[test]
fn test_first_tag_from_empty_history() {
    assert_eq!(VersionTag::parse("").unwrap(), VersionTag::ZERO);
    assert_eq!(next("", "p"), "v0.0.1");
}

#[test]
fn test_major_and_minor_drop_release_candidate() {
    assert_eq!(next("v1.2.3-rc4", "M"), "v2.0.0");
    assert_eq!(next("v1.2.3-rc4", "m"), "v1.3.0");
}

#[test]
fn test_quit_and_help_never_produce_a_tag() {
    for raw in ["", "v0.1.0", "v4.5.6-rc7"] {
        let current = VersionTag::parse(raw).unwrap();
        assert_eq!(apply_bump(current, BumpKind::Quit), BumpOutcome::Quit);
        assert_eq!(apply_bump(current, BumpKind::Help), BumpOutcome::Help);
    }
}

#[test]
fn test_format_error_falls_back_but_numeric_error_is_fatal() {
    assert_eq!(VersionTag::parse("v1.2").unwrap(), VersionTag::ZERO);
    assert!(VersionTag::parse("v1.2.x").is_err());
}
