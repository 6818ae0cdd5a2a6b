use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn unknown_scene_is_rejected_before_launch() {
    let ctx = TestContext::new().with_sample_library();

    ctx.cli()
        .args(["launch", "maya", "--project", "ProjectA", "--asset", "char", "Hero"])
        .args(["--department", "rig", "--scene", "hero_rig_v09.ma", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Scene 'hero_rig_v09.ma' not found"));
}

#[test]
fn scene_of_another_application_is_not_found() {
    let ctx = TestContext::new().with_sample_library();

    ctx.cli()
        .args(["launch", "maya", "--project", "ProjectA", "--asset", "char", "Hero"])
        .args(["--department", "rig", "--scene", "hero_rig_v01.mb", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn missing_executable_reports_launch_failure() {
    let ctx = TestContext::new().with_sample_library();
    let missing = ctx.root().join("no-such-maya");
    ctx.write_config(&format!("[maya]\nexecutable = '{}'\n", missing.display()));

    ctx.cli()
        .args(["launch", "maya", "--project", "ProjectA", "--asset", "char", "Hero"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to launch"));
}
