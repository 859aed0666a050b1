//! Configuration loading.
//!
//! - [`schema`] - The [`FixerConfig`] structure and its defaults
//! - [`loader`] - File loading and command-line overrides

pub mod loader;
pub mod schema;

pub use loader::{apply_overrides, load_config, load_config_file, ConfigOverrides};
pub use schema::FixerConfig;
