pub mod launch;
pub mod scene_tree;
