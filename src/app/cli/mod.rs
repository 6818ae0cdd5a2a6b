//! CLI Adapter.

mod launch;
mod listing;
mod pick;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use tracing_subscriber::EnvFilter;

use crate::domain::{
    AppError, DEFAULT_DEPARTMENT, DEFAULT_REPO, DataTarget, DccApp, PackageSpec, Stage,
};

#[derive(Parser)]
#[command(name = "pipelaunch")]
#[command(version)]
#[command(
    about = "Browse the pipeline project library and launch DCC applications on a scene",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Launcher config file (TOML)
    #[arg(long, global = true, env = "PIPELAUNCH_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,
    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

/// Asset or shot addressed by a command.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
struct TargetArgs {
    /// Asset as TYPE NAME
    #[arg(long, num_args = 2, value_names = ["TYPE", "NAME"])]
    asset: Option<Vec<String>>,
    /// Shot as SEQUENCE SHOT
    #[arg(long, num_args = 2, value_names = ["SEQUENCE", "SHOT"])]
    shot: Option<Vec<String>>,
}

impl TargetArgs {
    fn to_target(&self) -> Result<DataTarget, AppError> {
        match (self.asset.as_deref(), self.shot.as_deref()) {
            (Some([asset_type, asset]), None) => Ok(DataTarget::asset(asset_type, asset)),
            (None, Some([sequence, shot])) => Ok(DataTarget::shot(sequence, shot)),
            _ => Err(AppError::config_error(
                "expected exactly one of --asset TYPE NAME or --shot SEQUENCE SHOT",
            )),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List repos of the code library
    Repos,
    /// List packages of a repo
    #[clap(visible_alias = "pkg")]
    Packages {
        /// Repo to list
        #[arg(long, default_value = DEFAULT_REPO)]
        repo: String,
    },
    /// Show the packages loaded into the current environment
    Env,
    /// List projects
    #[clap(visible_alias = "p")]
    Projects,
    /// List asset types of a project
    AssetTypes { project: String },
    /// List assets of an asset type
    Assets { project: String, asset_type: String },
    /// List sequences of a project
    Sequences { project: String },
    /// List shots of a sequence
    Shots { project: String, sequence: String },
    /// List departments of an asset or shot
    #[clap(visible_alias = "d")]
    Departments {
        project: String,
        #[command(flatten)]
        target: TargetArgs,
        /// Stage folder: work or publish
        #[arg(long, default_value_t = Stage::Work)]
        stage: Stage,
    },
    /// List scene files of a department
    #[clap(visible_alias = "s")]
    Scenes {
        /// Application: maya or blender
        app: DccApp,
        project: String,
        #[command(flatten)]
        target: TargetArgs,
        /// Stage folder: work or publish
        #[arg(long, default_value_t = Stage::Work)]
        stage: Stage,
        /// Department folder
        #[arg(long, default_value = DEFAULT_DEPARTMENT)]
        department: String,
    },
    /// Show departments and their scenes for an asset or shot
    #[clap(visible_alias = "t")]
    Tree {
        /// Application: maya or blender
        app: DccApp,
        project: String,
        #[command(flatten)]
        target: TargetArgs,
        /// Stage folder: work or publish
        #[arg(long, default_value_t = Stage::Work)]
        stage: Stage,
    },
    /// Launch an application for a selection
    #[clap(visible_alias = "l")]
    Launch(launch::LaunchArgs),
    /// Pick a selection interactively, then launch
    Pick {
        /// Application: maya or blender
        app: DccApp,
        /// Print the launch instead of starting the application
        #[arg(long)]
        dry_run: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(&cli.verbosity);

    if let Err(e) = dispatch(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbosity: &Verbosity<WarnLevel>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.tracing_level_filter().to_string()));
    tracing_subscriber::fmt()
        .without_time()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn dispatch(cli: Cli) -> Result<(), AppError> {
    let ctx = crate::app::api::load_context(cli.config.as_deref())?;
    let json = cli.json;

    match cli.command {
        Commands::Repos => listing::print_names(ctx.code_library().list_repos()?, json),
        Commands::Packages { repo } => {
            listing::print_names(ctx.code_library().list_packages(&repo)?, json)
        }
        Commands::Env => listing::print_environment(&ctx.code_library(), json),
        Commands::Projects => listing::print_names(ctx.project_library().list_projects()?, json),
        Commands::AssetTypes { project } => {
            listing::print_names(ctx.project_library().list_asset_types(&project)?, json)
        }
        Commands::Assets { project, asset_type } => {
            listing::print_names(ctx.project_library().list_assets(&project, &asset_type)?, json)
        }
        Commands::Sequences { project } => {
            listing::print_names(ctx.project_library().list_sequences(&project)?, json)
        }
        Commands::Shots { project, sequence } => {
            listing::print_names(ctx.project_library().list_shots(&project, &sequence)?, json)
        }
        Commands::Departments { project, target, stage } => {
            let target = target.to_target()?;
            listing::print_names(
                ctx.project_library().list_departments(&project, &target, stage)?,
                json,
            )
        }
        Commands::Scenes { app, project, target, stage, department } => {
            let target = target.to_target()?;
            listing::print_names(
                ctx.project_library().list_scenes(app, &project, &target, stage, &department)?,
                json,
            )
        }
        Commands::Tree { app, project, target, stage } => {
            let target = target.to_target()?;
            let tree = crate::app::api::scene_tree(&ctx, app, &project, &target, stage)?;
            listing::print_tree(&tree, json)
        }
        Commands::Launch(args) => launch::run_launch(&ctx, args, json),
        Commands::Pick { app, dry_run } => pick::run_pick(&ctx, app, dry_run, json),
    }
}

/// Parse `--package` values into the package selection order given on the command line.
fn parse_packages(specs: Vec<PackageSpec>) -> crate::domain::PackageSelection {
    specs.into_iter().collect()
}
