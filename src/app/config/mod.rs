//! Configuration loaders.
//!
//! Pure schema parsing lives in `domain::launcher_config`.

mod load_config;

pub use load_config::load_config;
