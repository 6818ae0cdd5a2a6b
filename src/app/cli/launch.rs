//! Launch command implementation.

use clap::Args;
use serde::Serialize;

use super::{TargetArgs, listing::to_json, parse_packages};
use crate::app::api::{self, DefaultContext, LaunchOptions, LaunchOutcome};
use crate::domain::{AppError, DccApp, PackageSpec, Stage};

#[derive(Args)]
pub struct LaunchArgs {
    /// Application: maya or blender
    app: DccApp,
    /// Project folder name
    #[arg(long)]
    project: String,
    #[command(flatten)]
    target: TargetArgs,
    /// Stage folder: work or publish
    #[arg(long, default_value_t = Stage::Work)]
    stage: Stage,
    /// Department to launch into
    #[arg(long)]
    department: Option<String>,
    /// Scene file name to open
    #[arg(long)]
    scene: Option<String>,
    /// Package to load, optionally from a repo other than `local`
    #[arg(long = "package", value_name = "NAME[=REPO]")]
    packages: Vec<PackageSpec>,
    /// Print the launch instead of starting the application
    #[arg(long)]
    dry_run: bool,
}

#[derive(Serialize)]
struct LaunchReport<'a> {
    program: String,
    args: Vec<String>,
    env: &'a crate::domain::EnvVars,
    dispatched: bool,
}

pub(super) fn run_launch(
    ctx: &DefaultContext,
    args: LaunchArgs,
    json: bool,
) -> Result<(), AppError> {
    let options = LaunchOptions {
        app: args.app,
        project: args.project,
        target: args.target.to_target()?,
        stage: args.stage,
        department: args.department,
        scene: args.scene,
        packages: parse_packages(args.packages),
        dry_run: args.dry_run,
    };
    let app = options.app;

    let outcome = api::launch(ctx, options)?;
    print_outcome(app, &outcome, json)
}

pub(super) fn print_outcome(
    app: DccApp,
    outcome: &LaunchOutcome,
    json: bool,
) -> Result<(), AppError> {
    let request = &outcome.request;

    if json {
        let report = LaunchReport {
            program: request.program.display().to_string(),
            args: request.args.iter().map(|arg| arg.to_string_lossy().into_owned()).collect(),
            env: &request.env,
            dispatched: outcome.dispatched,
        };
        println!("{}", to_json(&report)?);
        return Ok(());
    }

    if outcome.dispatched {
        println!("✅ Launched {}: {}", app, request);
    } else {
        println!("Would launch {}: {}", app, request);
        for (key, value) in &request.env {
            println!("  {}={}", key, value);
        }
    }
    Ok(())
}
