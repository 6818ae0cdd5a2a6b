use crate::harness::TestContext;
use serde_json::Value;

#[test]
fn tree_lists_departments_with_scenes() {
    let ctx = TestContext::new().with_sample_library();
    ctx.add_project_dir("ProjectA/assets/char/Hero/work/anim");

    ctx.cli()
        .args(["tree", "maya", "ProjectA", "--asset", "char", "Hero"])
        .assert()
        .success()
        .stdout("anim/\nrig/\n  hero_rig_v01.ma\n");
}

#[test]
fn tree_json_carries_scene_paths() {
    let ctx = TestContext::new().with_sample_library();

    let output = ctx
        .cli()
        .args(["tree", "maya", "ProjectA", "--shot", "sq010", "sh0020", "--json"])
        .output()
        .expect("run pipelaunch");
    assert!(output.status.success());

    let tree: Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(tree[0]["name"], "comp");
    assert_eq!(tree[0]["scenes"][0]["label"], "shot_comp_v02.ma");

    let expected = ctx
        .project_root()
        .join("ProjectA/shots/sq010/sh0020/work/comp/maya/scenes/shot_comp_v02.ma");
    let path = tree[0]["scenes"][0]["path"].as_str().expect("path string");
    assert_eq!(std::path::Path::new(path), expected);
}
