#![cfg(unix)]

use crate::harness::{TestContext, fake_dcc};
use predicates::prelude::*;

#[test]
fn launch_starts_application_with_scene_and_environment() {
    let ctx = TestContext::new().with_sample_library();
    let record = ctx.root().join("launch-record.txt");
    let exe = fake_dcc::install(ctx.root(), &record);
    ctx.write_config(&format!("[maya]\nexecutable = '{}'\n", exe.display()));
    let scene = ctx
        .project_root()
        .join("ProjectA/shots/sq010/sh0020/work/comp/maya/scenes/shot_comp_v02.ma");

    ctx.cli()
        .args(["launch", "maya", "--project", "ProjectA", "--shot", "sq010", "sh0020"])
        .args(["--department", "comp", "--scene", "shot_comp_v02.ma", "--package", "anim_tools"])
        .env("STUDIO_SITE", "tokyo")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("✅ Launched maya:"));

    let content = fake_dcc::wait_for_record(&record);
    let lines: Vec<&str> = content.lines().collect();
    assert!(lines.contains(&format!("ARGS={}", scene.display()).as_str()));
    assert!(lines.contains(&"PACKAGES=anim_tools"));
    assert!(lines.contains(&"PROJECT=ProjectA"));
    assert!(lines.contains(&"SEQUENCE=sq010"));
    assert!(lines.contains(&"SHOT=sh0020"));
    assert!(lines.contains(&"DEPARTMENT=comp"));
    assert!(lines.contains(&"STUDIO_SITE=tokyo"), "launcher environment is inherited");
}
