use crate::harness::TestContext;

#[test]
fn project_without_assets_folder_lists_nothing() {
    let ctx = TestContext::new().with_sample_library();

    ctx.cli().args(["asset-types", "ProjectB"]).assert().success().stdout("");
}

#[test]
fn unknown_project_lists_nothing() {
    let ctx = TestContext::new().with_sample_library();

    ctx.cli().args(["sequences", "ProjectZ"]).assert().success().stdout("");
    ctx.cli()
        .args(["departments", "ProjectZ", "--shot", "sq010", "sh0020"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn missing_project_root_lists_nothing() {
    let ctx = TestContext::new();
    std::fs::remove_dir_all(ctx.project_root()).expect("remove project root");

    ctx.cli().arg("projects").assert().success().stdout("");
}
