use crate::harness::TestContext;
use pipelaunch::{
    DataTarget, DccApp, LaunchOptions, LauncherConfig, PackageSelection, Stage, create_context,
    launch, scene_tree,
};

fn context_for(test: &TestContext) -> pipelaunch::DefaultContext {
    create_context(LauncherConfig {
        code_root: test.code_root(),
        project_root: test.project_root(),
        ..LauncherConfig::default()
    })
}

#[test]
fn resolvers_walk_the_project_library() {
    let test = TestContext::new().with_sample_library();
    let ctx = context_for(&test);
    let projects = ctx.project_library();
    let hero = DataTarget::asset("char", "Hero");

    assert_eq!(projects.list_projects().unwrap(), vec!["ProjectA", "ProjectB"]);
    assert_eq!(projects.list_asset_types("ProjectA").unwrap(), vec!["char", "prop"]);
    assert_eq!(projects.list_asset_types("ProjectB").unwrap(), Vec::<String>::new());
    assert_eq!(projects.list_departments("ProjectA", &hero, Stage::Work).unwrap(), vec!["rig"]);
    assert_eq!(
        projects.list_scenes(DccApp::Maya, "ProjectA", &hero, Stage::Work, "rig").unwrap(),
        vec!["hero_rig_v01.ma"]
    );
}

#[test]
fn scene_tree_and_dry_run_launch() {
    let test = TestContext::new().with_sample_library();
    let ctx = context_for(&test);
    let shot = DataTarget::shot("sq010", "sh0020");

    let tree = scene_tree(&ctx, DccApp::Blender, "ProjectA", &shot, Stage::Work).unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].scenes[0].label, "shot_comp_v02.blend");

    let outcome = launch(
        &ctx,
        LaunchOptions {
            app: DccApp::Blender,
            project: "ProjectA".into(),
            target: shot,
            stage: Stage::Work,
            department: Some("comp".into()),
            scene: Some("shot_comp_v02.blend".into()),
            packages: PackageSelection::new().with("shading", "studio"),
            dry_run: true,
        },
    )
    .unwrap();

    assert!(!outcome.dispatched);
    assert_eq!(outcome.request.args, vec![tree[0].scenes[0].path.clone().into_os_string()]);
    let keys: Vec<&str> = outcome.request.env.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["PACKAGES", "PACKAGE_PATHS", "PROJECT", "SEQUENCE", "SHOT", "DEPARTMENT"]
    );
}
