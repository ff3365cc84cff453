//! Command-line tests for the `uta-rest` binary.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn uta_rest() -> Command {
    let mut cmd = Command::cargo_bin("uta-rest").unwrap();
    cmd.env_remove("UTA_DB_URL")
        .env_remove("UTAREST_URL")
        .env_remove("RUST_LOG");
    cmd
}

fn write_fixture(dir: &Path) -> PathBuf {
    let path = dir.join("uta.json");
    uta_rest()
        .args(["fixture", path.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote fixture"));
    path
}

#[test]
fn test_help_lists_commands() {
    uta_rest()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("query"))
        .stdout(predicate::str::contains("fixture"));
}

#[test]
fn test_fixture_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path());
    uta_rest()
        .args(["fixture", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    uta_rest()
        .args(["fixture", "--force", path.to_str().unwrap()])
        .assert()
        .success();
}

#[test]
fn test_query_fixture_text_table() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = write_fixture(dir.path());
    uta_rest()
        .args(["query", "tx_info", "NM_199425.2", "NC_000020.10", "splign"])
        .arg("--fixture")
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("hgnc\tZBTB46"))
        .stdout(predicate::str::contains("alt_aln_method\tsplign"));
}

#[test]
fn test_query_fixture_json_scalar() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = write_fixture(dir.path());
    uta_rest()
        .args(["--format", "json", "query", "data_version", "--fixture"])
        .arg(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"uta_20210129b\""));
}

#[test]
fn test_query_fixture_sliced_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = write_fixture(dir.path());
    uta_rest()
        .args(["query", "get_seq", "NC_000007.13", "0", "8", "--fixture"])
        .arg(&fixture)
        .assert()
        .success()
        .stdout("ACGTTGCA\n");
}

#[test]
fn test_query_missing_parameter() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = write_fixture(dir.path());
    uta_rest()
        .args(["query", "get_tx_exons", "NM_199425.2", "NC_000020.10", "--fixture"])
        .arg(&fixture)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "get_tx_exons() missing required argument: 'alt_aln_method'",
        ));
}

#[test]
fn test_query_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let fixture = write_fixture(dir.path());
    uta_rest()
        .args(["query", "seq", "fake", "--fixture"])
        .arg(&fixture)
        .assert()
        .failure()
        .stderr(predicate::str::contains("404 (not_found)"));
}

#[test]
fn test_query_unknown_operation() {
    uta_rest()
        .args(["query", "get_everything"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown operation"));
}

#[test]
fn test_query_unreachable_server() {
    uta_rest()
        .args(["query", "data_version", "--url", "http://127.0.0.1:9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP request failed"));
}

#[test]
fn test_serve_requires_backend() {
    uta_rest()
        .arg("serve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--db-url").or(predicate::str::contains("--fixture")));
}

#[test]
fn test_serve_rejects_bad_db_url() {
    uta_rest()
        .args(["serve", "--db-url", "mysql://localhost/uta", "--port", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("postgresql://"));
}
