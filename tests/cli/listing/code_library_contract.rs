use crate::harness::TestContext;

#[test]
fn repos_and_packages_are_listed() {
    let ctx = TestContext::new().with_sample_library();

    ctx.cli().arg("repos").assert().success().stdout("local\nstudio\n");
    ctx.cli().arg("packages").assert().success().stdout("anim_tools\nrig_tools\n");
    ctx.cli().args(["packages", "--repo", "studio"]).assert().success().stdout("shading\n");
}

#[test]
fn unknown_repo_lists_nothing() {
    let ctx = TestContext::new().with_sample_library();

    ctx.cli().args(["packages", "--repo", "archive"]).assert().success().stdout("");
}
