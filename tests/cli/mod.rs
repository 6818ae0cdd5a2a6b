mod config {
    mod missing_file_contract;
    mod rejects_unknown_keys_contract;
}

mod environment {
    mod pairs_loaded_packages_contract;
    mod reports_mismatched_lists_contract;
}

mod launch {
    mod dry_run_reports_environment_contract;
    mod spawns_application_contract;
    mod unknown_scene_contract;
}

mod listing {
    mod code_library_contract;
    mod departments_contract;
    mod missing_folders_contract;
    mod projects_contract;
    mod scenes_contract;
    mod tree_contract;
}
