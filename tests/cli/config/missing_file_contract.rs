use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn named_config_file_must_exist() {
    let ctx = TestContext::new();
    let missing = ctx.root().join("absent.toml");

    ctx.cli()
        .arg("--config")
        .arg(&missing)
        .arg("projects")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}
