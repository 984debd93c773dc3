//! End-to-end CLI flows over a scratch store.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Scratch {
    dir: TempDir,
}

impl Scratch {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    fn store_path(&self) -> String {
        self.dir
            .path()
            .join("tasks.json")
            .to_string_lossy()
            .into_owned()
    }

    fn tm(&self) -> Command {
        let mut cmd = Command::cargo_bin("tm").expect("tm binary");
        cmd.env("TM_CONFIG_DIR", self.dir.path().join("config"))
            .env("TM_DATA_DIR", self.dir.path().join("data"))
            .env_remove("TM_STORE")
            .env_remove("TM_CONTEXT")
            .env_remove("TM_LOG")
            .arg("--file")
            .arg(self.store_path());
        cmd
    }
}

#[test]
fn create_then_show_round_trips() {
    let scratch = Scratch::new();
    scratch
        .tm()
        .args(["create", "buy", "stamps", "--context", "errd"])
        .assert()
        .success()
        .stdout(predicate::str::contains("created task 1: buy stamps"));

    scratch
        .tm()
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("buy stamps"))
        .stdout(predicate::str::contains("Mode: triage"))
        .stdout(predicate::str::contains("Context: errd"));
}

#[test]
fn list_filters_by_view() {
    let scratch = Scratch::new();
    scratch.tm().args(["create", "untriaged"]).assert().success();
    scratch.tm().args(["create", "staged"]).assert().success();
    scratch.tm().args(["stage", "2"]).assert().success();

    scratch
        .tm()
        .args(["list", "--view", "execute"])
        .assert()
        .success()
        .stdout(predicate::str::contains("staged"))
        .stdout(predicate::str::contains("untriaged").not());

    scratch
        .tm()
        .args(["list", "--view", "nonsense"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a known view"));
}

#[test]
fn board_moves_respect_anchors() {
    let scratch = Scratch::new();
    for name in ["first", "second", "third"] {
        scratch
            .tm()
            .args(["create", name, "--list", "1"])
            .assert()
            .success();
    }

    scratch
        .tm()
        .args(["move", "3", "--before", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("moved task 3"));

    // Both anchors at once is refused at the boundary.
    scratch
        .tm()
        .args(["move", "2", "--before", "1", "--after", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not both"));
}

#[test]
fn priority_steps_saturate_with_a_message() {
    let scratch = Scratch::new();
    scratch.tm().args(["create", "ladder"]).assert().success();

    scratch
        .tm()
        .args(["bump", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("now priority C"));

    scratch.tm().args(["demote", "1"]).assert().success();
    scratch
        .tm()
        .args(["demote", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already at minimum"));
}

#[test]
fn triage_makes_a_task_schedulable() {
    let scratch = Scratch::new();
    scratch.tm().args(["create", "plan trip"]).assert().success();
    scratch
        .tm()
        .args(["triage", "1", "--urgent", "--poms", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("triaged task 1"));

    scratch
        .tm()
        .args(["list", "--view", "schedule"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SCHEDULABLE"));
}

#[test]
fn paper_lists_overdue_before_staged_work() {
    let scratch = Scratch::new();
    scratch
        .tm()
        .args(["create", "late thing", "--due", "1999-01-01"])
        .assert()
        .success();
    scratch.tm().args(["create", "hot thing"]).assert().success();
    scratch.tm().args(["stage", "2"]).assert().success();

    let output = scratch.tm().args(["paper"]).output().expect("run paper");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let late = stdout.find("late thing").expect("late thing listed");
    let hot = stdout.find("hot thing").expect("hot thing listed");
    assert!(late < hot, "overdue must print first:\n{stdout}");
}

#[test]
fn close_drops_a_task_from_open_views() {
    let scratch = Scratch::new();
    scratch.tm().args(["create", "old news"]).assert().success();
    scratch.tm().args(["close", "1"]).assert().success();

    scratch
        .tm()
        .args(["list", "--view", "open"])
        .assert()
        .success()
        .stdout(predicate::str::contains("old news").not());

    scratch
        .tm()
        .args(["list", "--view", "closed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("old news"));
}

#[test]
fn json_output_is_machine_readable() {
    let scratch = Scratch::new();
    scratch
        .tm()
        .args(["create", "robot food", "--context", "hmdy"])
        .assert()
        .success();

    let output = scratch
        .tm()
        .args(["--json", "show", "1"])
        .output()
        .expect("run show");
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid json on stdout");
    assert_eq!(value["name"], "robot food");
    assert_eq!(value["mode"], "triage");
    assert_eq!(value["context"], "hmdy");
}

#[test]
fn contexts_reports_codes_in_use() {
    let scratch = Scratch::new();
    scratch
        .tm()
        .args(["create", "a", "--context", "wknw"])
        .assert()
        .success();
    scratch
        .tm()
        .args(["create", "b", "--context", "hmdy"])
        .assert()
        .success();

    scratch
        .tm()
        .args(["contexts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wknw"))
        .stdout(predicate::str::contains("hmdy"));

    scratch
        .tm()
        .args(["create", "c", "--context", "moon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a known context code"));
}

#[test]
fn unknown_task_id_is_a_clean_error() {
    let scratch = Scratch::new();
    scratch
        .tm()
        .args(["show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("task 42 not found"));
}
