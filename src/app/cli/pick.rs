//! Interactive selection cascade.
//!
//! Walks project → data type → asset/shot → stage → tree entry → packages, the
//! same cascade the launcher window offers with its dropdowns.

use dialoguer::{MultiSelect, Select};
use tracing::debug;

use super::launch::print_outcome;
use crate::app::api::DefaultContext;
use crate::app::commands::{launch, scene_tree};
use crate::domain::{
    AppError, DataTarget, DataType, DccApp, DepartmentNode, HighlightedNode, PackageSelection,
    Selection, Stage,
};

const NO_ENTRY_OPTION: &str = "[no department]";

pub(super) fn run_pick(
    ctx: &DefaultContext,
    app: DccApp,
    dry_run: bool,
    json: bool,
) -> Result<(), AppError> {
    let Some(selection) = pick_selection(ctx, app)? else {
        return Ok(());
    };
    let Some(packages) = pick_packages(ctx)? else {
        return Ok(());
    };

    let outcome = launch::launch_selection(ctx, app, &selection, &packages, dry_run)?;
    print_outcome(app, &outcome, json)
}

fn pick_selection(ctx: &DefaultContext, app: DccApp) -> Result<Option<Selection>, AppError> {
    let projects = ctx.project_library();

    let Some(project) = select_name("Select project", projects.list_projects()?, "projects")? else {
        return Ok(None);
    };

    let data_types: Vec<String> =
        DataType::ALL.iter().map(|data_type| data_type.dir_name().to_string()).collect();
    let Some(data_type) = select_index("Select data type", &data_types)? else {
        return Ok(None);
    };

    let target = match DataType::ALL[data_type] {
        DataType::Assets => {
            let types = projects.list_asset_types(&project)?;
            let Some(asset_type) = select_name("Select asset type", types, "asset types")? else {
                return Ok(None);
            };
            let assets = projects.list_assets(&project, &asset_type)?;
            let Some(asset) = select_name("Select asset", assets, "assets")? else {
                return Ok(None);
            };
            DataTarget::asset(asset_type, asset)
        }
        DataType::Shots => {
            let sequences = projects.list_sequences(&project)?;
            let Some(sequence) = select_name("Select sequence", sequences, "sequences")? else {
                return Ok(None);
            };
            let shots = projects.list_shots(&project, &sequence)?;
            let Some(shot) = select_name("Select shot", shots, "shots")? else {
                return Ok(None);
            };
            DataTarget::shot(sequence, shot)
        }
    };

    let stages: Vec<String> = Stage::ALL.iter().map(|stage| stage.to_string()).collect();
    let Some(stage) = select_index("Select stage", &stages)? else {
        return Ok(None);
    };
    let stage = Stage::ALL[stage];

    let tree = scene_tree::build(&projects, app, &project, &target, stage)?;
    let entries = tree_entries(&tree);
    let labels: Vec<String> = entries.iter().map(|(label, _)| label.clone()).collect();
    let Some(entry) = select_index("Select department or scene", &labels)? else {
        return Ok(None);
    };

    let mut selection = Selection::new(project, target).at_stage(stage);
    selection.highlighted = entries.into_iter().nth(entry).and_then(|(_, node)| node);
    debug!(department = selection.department(), "selection complete");
    Ok(Some(selection))
}

fn pick_packages(ctx: &DefaultContext) -> Result<Option<PackageSelection>, AppError> {
    let code = ctx.code_library();
    let mut choices = Vec::new();
    for repo in code.list_repos()? {
        for package in code.list_packages(&repo)? {
            choices.push((package, repo.clone()));
        }
    }
    if choices.is_empty() {
        return Ok(Some(PackageSelection::new()));
    }

    let items: Vec<String> =
        choices.iter().map(|(package, repo)| format!("{}/{}", repo, package)).collect();
    let picked = MultiSelect::new()
        .with_prompt("Select packages (space to toggle)")
        .items(&items)
        .interact_opt()
        .map_err(|err| AppError::Prompt(format!("Failed to select packages: {}", err)))?;

    Ok(picked.map(|indices| {
        indices
            .into_iter()
            .map(|index| choices[index].clone())
            .fold(PackageSelection::new(), |selection, (package, repo)| {
                selection.with(package, repo)
            })
    }))
}

/// Flatten the tree into selectable rows: each department followed by its scenes.
/// The last row highlights nothing, which publishes the default department.
fn tree_entries(tree: &[DepartmentNode]) -> Vec<(String, Option<HighlightedNode>)> {
    let mut entries = Vec::new();
    for department in tree {
        entries.push((
            format!("{}/", department.name),
            Some(HighlightedNode::Department(department.name.clone())),
        ));
        for scene in &department.scenes {
            entries.push((
                format!("  {}", scene.label),
                Some(HighlightedNode::Scene {
                    department: department.name.clone(),
                    entry: scene.clone(),
                }),
            ));
        }
    }
    entries.push((NO_ENTRY_OPTION.to_string(), None));
    entries
}

/// Pick one of `names`; an empty level ends the cascade without launching.
fn select_name(prompt: &str, names: Vec<String>, what: &str) -> Result<Option<String>, AppError> {
    if names.is_empty() {
        println!("No {} found", what);
        return Ok(None);
    }
    Ok(select_index(prompt, &names)?.map(|index| names[index].clone()))
}

fn select_index(prompt: &str, items: &[String]) -> Result<Option<usize>, AppError> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Prompt(format!("Failed to select: {}", err)))
}
