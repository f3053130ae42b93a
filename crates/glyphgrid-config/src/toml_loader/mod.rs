//! Reading `config.toml`, and writing the commented template on first run.

mod loader;
mod paths;
mod template;


pub use loader::{load_default, load_from_path, parse_config};
pub use paths::{config_path_in, create_default_config, default_config_path};
