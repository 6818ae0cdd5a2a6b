use crate::harness::TestContext;

#[test]
fn env_pairs_packages_with_paths() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("env")
        .env("PACKAGES", "anim_tools;rig_tools")
        .env("PACKAGE_PATHS", "/code/local/anim_tools;/code/local/rig_tools")
        .assert()
        .success()
        .stdout("anim_tools\t/code/local/anim_tools\nrig_tools\t/code/local/rig_tools\n");
}

#[test]
fn env_without_packages_reports_none() {
    let ctx = TestContext::new();

    ctx.cli().arg("env").assert().success().stdout("No packages loaded\n");
}
