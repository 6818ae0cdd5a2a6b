use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn unknown_config_keys_are_rejected() {
    let ctx = TestContext::new();
    ctx.write_config("nuke_root = '/opt/nuke'\n");

    ctx.cli()
        .arg("projects")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOML parse error"));
}

#[test]
fn invalid_launch_mode_is_rejected() {
    let ctx = TestContext::new();
    ctx.write_config("launch_mode = 'detached'\n");

    ctx.cli().arg("projects").assert().failure();
}
