use crate::harness::TestContext;

#[test]
fn projects_are_listed_in_name_order() {
    let ctx = TestContext::new().with_sample_library();
    ctx.add_project_file("notes.txt");

    ctx.cli().arg("projects").assert().success().stdout("ProjectA\nProjectB\n");
}

#[test]
fn projects_alias_lists_the_same_folders() {
    let ctx = TestContext::new().with_sample_library();

    ctx.cli().arg("p").assert().success().stdout("ProjectA\nProjectB\n");
}
