use mvnmeta_core::model::Metadata;
use mvnmeta_core::model_version::{self, ModelVersion};
use mvnmeta_core::xml::read_str;
use mvnmeta_ops::{MetadataOperand, NexusMergeOperation};
use mvnmeta_util::errors::MetadataError;

fn merge(target: &mut Metadata, source: Metadata) -> Result<bool, MetadataError> {
    NexusMergeOperation::new(MetadataOperand::new(source)).perform(target)
}

fn ga(versions: &[&str], latest: &str, release: &str, last_updated: &str) -> Metadata {
    let versions: String = versions
        .iter()
        .map(|v| format!("      <version>{v}</version>\n"))
        .collect();
    read_str(&format!(
        r#"<metadata>
  <groupId>org.example</groupId>
  <artifactId>demo</artifactId>
  <versioning>
    <latest>{latest}</latest>
    <release>{release}</release>
    <versions>
{versions}    </versions>
    <lastUpdated>{last_updated}</lastUpdated>
  </versioning>
</metadata>"#
    ))
    .unwrap()
}

const V100_OLD: &str = r#"<metadata>
  <groupId>net.test.tamas</groupId>
  <artifactId>test</artifactId>
  <version>1.0-SNAPSHOT</version>
  <versioning>
    <snapshot>
      <timestamp>20110121.213648</timestamp>
      <buildNumber>1</buildNumber>
    </snapshot>
    <lastUpdated>20110121213648</lastUpdated>
  </versioning>
</metadata>"#;

const V100_NEW: &str = r#"<metadata>
  <groupId>net.test.tamas</groupId>
  <artifactId>test</artifactId>
  <version>1.0-SNAPSHOT</version>
  <versioning>
    <snapshot>
      <timestamp>20110122.213648</timestamp>
      <buildNumber>2</buildNumber>
    </snapshot>
    <lastUpdated>20110122213648</lastUpdated>
  </versioning>
</metadata>"#;

fn v110(day: &str, build: u32, extensions: &[&str]) -> Metadata {
    let svs: String = extensions
        .iter()
        .map(|ext| {
            format!(
                "      <snapshotVersion>\n        <extension>{ext}</extension>\n        <value>1.0-201101{day}.213648-{build}</value>\n        <updated>201101{day}213648</updated>\n      </snapshotVersion>\n"
            )
        })
        .collect();
    read_str(&format!(
        r#"<metadata modelVersion="1.1.0">
  <groupId>net.test.tamas</groupId>
  <artifactId>test</artifactId>
  <version>1.0-SNAPSHOT</version>
  <versioning>
    <snapshot>
      <timestamp>201101{day}.213648</timestamp>
      <buildNumber>{build}</buildNumber>
    </snapshot>
    <lastUpdated>201101{day}213648</lastUpdated>
    <snapshotVersions>
{svs}    </snapshotVersions>
  </versioning>
</metadata>"#
    ))
    .unwrap()
}

#[test]
fn ga_merge_sorts_and_recomputes() {
    let mut target = ga(&["1.0", "1.2"], "1.2", "1.2", "20090720100000");
    let source = ga(&["1.1", "1.3-SNAPSHOT"], "1.3-SNAPSHOT", "1.1", "20090721100000");

    assert!(merge(&mut target, source).unwrap());

    let v = target.versioning.as_ref().unwrap();
    assert_eq!(v.versions, vec!["1.0", "1.1", "1.2", "1.3-SNAPSHOT"]);
    assert_eq!(v.latest.as_deref(), Some("1.3-SNAPSHOT"));
    assert_eq!(v.release.as_deref(), Some("1.2"));
    assert_eq!(v.last_updated.as_deref(), Some("20090721100000"));
}

#[test]
fn ga_merge_keeps_newest_last_updated_either_way() {
    let newer = ga(&["1.0"], "1.0", "1.0", "20090721100000");
    let older = ga(&["1.1"], "1.1", "1.1", "20090720100000");

    let mut a = newer.clone();
    merge(&mut a, older.clone()).unwrap();
    let mut b = older;
    merge(&mut b, newer).unwrap();

    for md in [&a, &b] {
        let v = md.versioning.as_ref().unwrap();
        assert_eq!(v.versions, vec!["1.0", "1.1"]);
        assert_eq!(v.last_updated.as_deref(), Some("20090721100000"));
    }
}

#[test]
fn gav_merge_newer_snapshot_wins() {
    let mut target = read_str(V100_OLD).unwrap();
    merge(&mut target, read_str(V100_NEW).unwrap()).unwrap();
    let snapshot = target.versioning.as_ref().unwrap().snapshot.clone().unwrap();
    assert_eq!(snapshot.timestamp.as_deref(), Some("20110122.213648"));
    assert_eq!(snapshot.build_number, 2);

    let mut target = read_str(V100_NEW).unwrap();
    merge(&mut target, read_str(V100_OLD).unwrap()).unwrap();
    let v = target.versioning.as_ref().unwrap();
    assert_eq!(v.snapshot.as_ref().unwrap().build_number, 2);
    assert_eq!(v.last_updated.as_deref(), Some("20110122213648"));
}

#[test]
fn v100_with_v100_stays_legacy() {
    let mut target = read_str(V100_OLD).unwrap();
    merge(&mut target, read_str(V100_NEW).unwrap()).unwrap();
    assert_eq!(model_version::detect(&target), ModelVersion::V100);
    assert!(target.versioning.as_ref().unwrap().snapshot_versions.is_empty());
    assert_eq!(target.model_version, None);
}

#[test]
fn v110_with_v110_merges_snapshot_versions() {
    let mut target = v110("21", 1, &["jar", "pom"]);
    merge(&mut target, v110("22", 2, &["jar", "pom", "war"])).unwrap();

    let v = target.versioning.as_ref().unwrap();
    assert_eq!(v.snapshot_versions.len(), 3);
    assert!(v
        .snapshot_versions
        .iter()
        .all(|sv| sv.version.as_deref() == Some("1.0-20110122.213648-2")));
    assert_eq!(v.snapshot.as_ref().unwrap().build_number, 2);
    assert_eq!(model_version::detect(&target), ModelVersion::V110);
}

#[test]
fn v110_target_with_newer_v100_source_refreshes_updated() {
    let mut target = v110("21", 1, &["jar", "pom"]);
    merge(&mut target, read_str(V100_NEW).unwrap()).unwrap();

    let v = target.versioning.as_ref().unwrap();
    assert_eq!(v.snapshot_versions.len(), 2);
    assert!(v
        .snapshot_versions
        .iter()
        .all(|sv| sv.updated.as_deref() == Some("20110122213648")));
    assert_eq!(v.snapshot.as_ref().unwrap().build_number, 2);
    assert_eq!(model_version::detect(&target), ModelVersion::V110);
}

#[test]
fn newer_v110_target_with_v100_source_keeps_updated() {
    let mut target = v110("22", 2, &["jar", "pom"]);
    merge(&mut target, read_str(V100_OLD).unwrap()).unwrap();

    let v = target.versioning.as_ref().unwrap();
    assert!(v
        .snapshot_versions
        .iter()
        .all(|sv| sv.updated.as_deref() == Some("20110122213648")));
    assert_eq!(v.snapshot.as_ref().unwrap().build_number, 2);
    assert_eq!(v.last_updated.as_deref(), Some("20110122213648"));
}

#[test]
fn v100_target_with_v110_source_is_upgraded() {
    let mut target = read_str(V100_OLD).unwrap();
    merge(&mut target, v110("22", 2, &["jar"])).unwrap();
    assert_eq!(model_version::detect(&target), ModelVersion::V110);
    assert_eq!(target.model_version.as_deref(), Some("1.1.0"));
}

#[test]
fn group_plugins_are_unioned() {
    let mut target = read_str(
        r#"<metadata><plugins>
  <plugin><name>Site</name><prefix>site</prefix><artifactId>maven-site-plugin</artifactId></plugin>
</plugins></metadata>"#,
    )
    .unwrap();
    let source = read_str(
        r#"<metadata><plugins>
  <plugin><name>Clean</name><prefix>clean</prefix><artifactId>maven-clean-plugin</artifactId></plugin>
  <plugin><name>Site</name><prefix>site</prefix><artifactId>maven-site-plugin</artifactId></plugin>
</plugins></metadata>"#,
    )
    .unwrap();

    merge(&mut target, source).unwrap();
    let prefixes: Vec<_> = target.plugins.iter().map(|p| p.prefix.as_deref().unwrap()).collect();
    assert_eq!(prefixes, vec!["clean", "site"]);
    assert!(target.versioning.is_none());
}

#[test]
fn incompatible_coordinates_fail() {
    let mut target = ga(&["1.0"], "1.0", "1.0", "20090720100000");
    let mut source = ga(&["1.1"], "1.1", "1.1", "20090721100000");
    source.artifact_id = Some("other".into());

    let err = merge(&mut target, source).unwrap_err();
    assert!(matches!(err, MetadataError::Incompatible { .. }));
    assert!(err.to_string().contains("artifactId"));
}

#[test]
fn empty_target_coordinates_are_filled() {
    let mut target = Metadata::default();
    merge(&mut target, ga(&["1.0"], "1.0", "1.0", "20090720100000")).unwrap();
    assert_eq!(target.group_id.as_deref(), Some("org.example"));
    assert_eq!(target.artifact_id.as_deref(), Some("demo"));
    assert_eq!(target.versioning.as_ref().unwrap().versions, vec!["1.0"]);
}

#[test]
fn older_v110_source_still_contributes_new_file_types() {
    let mut target = v110("22", 2, &["jar"]);
    merge(&mut target, v110("21", 1, &["jar", "war"])).unwrap();

    let v = target.versioning.as_ref().unwrap();
    assert_eq!(v.snapshot.as_ref().unwrap().build_number, 2);
    assert_eq!(v.last_updated.as_deref(), Some("20110122213648"));
    assert_eq!(v.snapshot_versions.len(), 2);

    let jar = &v.snapshot_versions[0];
    assert_eq!(jar.extension.as_deref(), Some("jar"));
    assert_eq!(jar.version.as_deref(), Some("1.0-20110122.213648-2"));

    let war = &v.snapshot_versions[1];
    assert_eq!(war.extension.as_deref(), Some("war"));
    assert_eq!(war.version.as_deref(), Some("1.0-20110121.213648-1"));
}
