//! TOML config file loading.

mod loader;
mod paths;


pub use loader::{load_default, load_from_path};
pub use paths::{config_dir, default_config_path};
