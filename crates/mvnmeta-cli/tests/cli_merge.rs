use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn mvnmeta_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mvnmeta").unwrap();
    cmd.env("MVNMETA_HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

fn ga(versions: &[&str], last_updated: &str) -> String {
    let versions: String = versions
        .iter()
        .map(|v| format!("      <version>{v}</version>\n"))
        .collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<metadata>\n  <groupId>org.example</groupId>\n  \
         <artifactId>demo</artifactId>\n  <versioning>\n    <versions>\n{versions}    </versions>\n    \
         <lastUpdated>{last_updated}</lastUpdated>\n  </versioning>\n</metadata>\n"
    )
}

#[test]
fn test_merge_prints_to_stdout() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.xml"), ga(&["1.0", "1.2"], "20200101000000")).unwrap();
    fs::write(tmp.path().join("b.xml"), ga(&["1.1"], "20210101000000")).unwrap();

    mvnmeta_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["merge", "a.xml", "b.xml"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<version>1.0</version>\n      <version>1.1</version>\n      <version>1.2</version>",
        ))
        .stdout(predicate::str::contains("<lastUpdated>20210101000000</lastUpdated>"));
}

#[test]
fn test_merge_writes_output_and_checksums() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.xml"), ga(&["1.0"], "20200101000000")).unwrap();
    fs::write(tmp.path().join("b.xml"), ga(&["2.0"], "20210101000000")).unwrap();

    mvnmeta_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["merge", "a.xml", "b.xml", "-o", "maven-metadata.xml", "--checksums"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Merged"));

    let merged = fs::read_to_string(tmp.path().join("maven-metadata.xml")).unwrap();
    assert!(merged.contains("<latest>2.0</latest>"));
    for ext in ["md5", "sha1", "sha256", "sha512"] {
        let sidecar = tmp.path().join(format!("maven-metadata.xml.{ext}"));
        assert!(sidecar.is_file(), "missing {ext} sidecar");
    }
    let sha1 = fs::read_to_string(tmp.path().join("maven-metadata.xml.sha1")).unwrap();
    assert_eq!(sha1.len(), 40);
}

#[test]
fn test_merge_release_policy() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.xml"), ga(&["1.0", "1.1-SNAPSHOT"], "20200101000000")).unwrap();

    mvnmeta_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["merge", "a.xml", "--policy", "release"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.1-SNAPSHOT").not());
}

#[test]
fn test_merge_unknown_policy_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.xml"), ga(&["1.0"], "20200101000000")).unwrap();

    mvnmeta_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["merge", "a.xml", "--policy", "nightly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown repository policy"));
}

#[test]
fn test_merge_skips_invalid_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.xml"), "this is not xml").unwrap();
    fs::write(tmp.path().join("b.xml"), ga(&["1.0"], "20200101000000")).unwrap();

    mvnmeta_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["merge", "a.xml", "b.xml"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipped"))
        .stdout(predicate::str::contains("<version>1.0</version>"));
}

#[test]
fn test_merge_strict_fails_on_incompatible() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("a.xml"), ga(&["1.0"], "20200101000000")).unwrap();
    fs::write(
        tmp.path().join("b.xml"),
        ga(&["1.0"], "20200101000000").replace("demo", "other"),
    )
    .unwrap();

    mvnmeta_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["merge", "a.xml", "b.xml"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Ignored"));

    mvnmeta_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["merge", "--strict", "a.xml", "b.xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Incompatible metadata"));
}

#[test]
fn test_merge_disabled_by_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "[merge]\nenabled = false\n").unwrap();
    fs::write(tmp.path().join("a.xml"), ga(&["1.0"], "20200101000000")).unwrap();
    fs::write(tmp.path().join("b.xml"), ga(&["2.0"], "20210101000000")).unwrap();

    mvnmeta_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["merge", "a.xml", "b.xml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2.0").not());
}

#[test]
fn test_merge_missing_file_fails() {
    let tmp = TempDir::new().unwrap();

    mvnmeta_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["merge", "nope.xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_merge_disabled_reports_one_served_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "[merge]\nenabled = false\n").unwrap();
    fs::write(tmp.path().join("a.xml"), ga(&["1.0"], "20200101000000")).unwrap();
    fs::write(tmp.path().join("b.xml"), ga(&["2.0"], "20210101000000")).unwrap();

    mvnmeta_cmd(&tmp)
        .current_dir(tmp.path())
        .args(["merge", "a.xml", "b.xml", "-o", "out.xml"])
        .assert()
        .success()
        .stderr(predicate::str::contains("1 of 2 files into out.xml"));
}
