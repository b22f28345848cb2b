use std::cmp::Ordering;

use mvnmeta_core::version::{compare_versions, MavenVersion};

#[test]
fn qualifier_ordering() {
    let ordered = [
        "1.0-alpha",
        "1.0-beta",
        "1.0-milestone",
        "1.0-rc",
        "1.0-SNAPSHOT",
        "1.0",
        "1.0-sp",
    ];
    for pair in ordered.windows(2) {
        assert_eq!(
            compare_versions(pair[0], pair[1]),
            Ordering::Less,
            "{} should sort before {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn snapshot_before_release() {
    let snap = MavenVersion::parse("1.3.1-SNAPSHOT");
    let rel = MavenVersion::parse("1.3.1");
    let prev = MavenVersion::parse("1.3.0");
    assert!(prev < snap);
    assert!(snap < rel);
}

#[test]
fn unknown_qualifier_after_release() {
    assert_eq!(compare_versions("1.0-jre", "1.0"), Ordering::Greater);
    assert_eq!(compare_versions("1.0-jre", "1.0-sp"), Ordering::Greater);
    assert_eq!(compare_versions("1.0-android", "1.0-jre"), Ordering::Less);
}

#[test]
fn numbers_beat_qualifiers() {
    assert_eq!(compare_versions("1.0.1", "1.0-jre"), Ordering::Greater);
    assert_eq!(compare_versions("1.0.1", "1.0.sp"), Ordering::Greater);
}

#[test]
fn numeric_segments_compare_numerically() {
    assert_eq!(compare_versions("1.10", "1.9"), Ordering::Greater);
    assert_eq!(compare_versions("2.3.0.10", "2.3.0.9"), Ordering::Greater);
}

#[test]
fn digit_letter_transitions_split() {
    assert_eq!(compare_versions("1.0alpha1", "1.0-alpha-1"), Ordering::Equal);
    assert_eq!(compare_versions("1.0-rc1", "1.0-rc2"), Ordering::Less);
    assert_eq!(compare_versions("1.0-a1", "1.0-alpha1"), Ordering::Equal);
    assert_eq!(compare_versions("1.0-m2", "1.0-rc1"), Ordering::Less);
}

#[test]
fn case_insensitive() {
    assert_eq!(compare_versions("1.0-SNAPSHOT", "1.0-snapshot"), Ordering::Equal);
    assert_eq!(compare_versions("1.0-RC1", "1.0-rc1"), Ordering::Equal);
}

#[test]
fn guava_style_versions() {
    let v1 = MavenVersion::parse("31.0-jre");
    let v2 = MavenVersion::parse("32.0-jre");
    assert!(v1 < v2);
}

#[test]
fn sorting_mixed_release_lines() {
    let mut versions = vec![
        "2.3.0.2", "2.3.0.5-SNAPSHOT", "2.3.0.2-SNAPSHOT", "2.3.0.4", "2.3.0.3-SNAPSHOT",
        "2.3.0.3", "2.3.0.4-SNAPSHOT",
    ];
    versions.sort_by(|a, b| compare_versions(a, b));
    assert_eq!(
        versions,
        vec![
            "2.3.0.2-SNAPSHOT", "2.3.0.2", "2.3.0.3-SNAPSHOT", "2.3.0.3", "2.3.0.4-SNAPSHOT",
            "2.3.0.4", "2.3.0.5-SNAPSHOT",
        ]
    );
}

#[test]
fn empty_version_is_comparable() {
    assert_eq!(compare_versions("", "0"), Ordering::Equal);
    assert_eq!(compare_versions("", "1.0"), Ordering::Less);
}

#[test]
fn display() {
    let v = MavenVersion::parse("1.8.0");
    assert_eq!(v.to_string(), "1.8.0");
}
