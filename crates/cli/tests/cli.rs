use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CORPUS: &str = r#"[
    {
        "id": "root",
        "conversation_id": "root",
        "author_id": "u1",
        "text": "انتشر فيديو مضاربة في النسيم",
        "created_at": "2024-03-05T16:00:00Z",
        "has_media": true
    },
    {
        "id": "reply1",
        "conversation_id": "root",
        "author_id": "u2",
        "text": "يا ساتر مضاربة عنيفة",
        "created_at": "2024-03-05T16:10:00Z"
    },
    {
        "id": "lone",
        "conversation_id": "lone",
        "author_id": "u3",
        "text": "مضاربة النسيم ترند",
        "created_at": "2024-03-05T17:30:00Z"
    }
]"#;

fn write_corpus(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("corpus.json");
    std::fs::write(&path, CORPUS).unwrap();
    path
}

#[test]
fn fingerprint_emits_keywords_json() {
    let dir = TempDir::new().unwrap();
    let path = write_corpus(&dir);

    Command::cargo_bin("sarmad")
        .unwrap()
        .args(["--quiet", "fingerprint"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("keywords"))
        .stdout(predicate::str::contains("مضاربة"));
}

#[test]
fn attribute_reports_the_conversation_root() {
    let dir = TempDir::new().unwrap();
    let path = write_corpus(&dir);

    Command::cargo_bin("sarmad")
        .unwrap()
        .args(["--quiet", "attribute"])
        .arg(&path)
        .args(["--report", "reply1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"found\": true"))
        .stdout(predicate::str::contains("trace_conversation"))
        .stdout(predicate::str::contains("\"root\""));
}

#[test]
fn attribute_bisects_with_explicit_keywords() {
    let dir = TempDir::new().unwrap();
    let path = write_corpus(&dir);

    Command::cargo_bin("sarmad")
        .unwrap()
        .args(["--quiet", "attribute"])
        .arg(&path)
        .args(["--keyword", "مضاربة"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"found\": true"))
        .stdout(predicate::str::contains("\"root\""));
}

#[test]
fn volume_prints_24_buckets() {
    let dir = TempDir::new().unwrap();
    let path = write_corpus(&dir);

    Command::cargo_bin("sarmad")
        .unwrap()
        .args(["--quiet", "volume"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hour\": 16"))
        .stdout(predicate::str::contains("\"hour\": 23"));
}

#[test]
fn malformed_corpus_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"[{"id": "x", "created_at": "not-a-time"}]"#).unwrap();

    Command::cargo_bin("sarmad")
        .unwrap()
        .args(["--quiet", "fingerprint"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading corpus"));
}
