//! Configuration file loading for scrum-poker
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./scrum-poker.toml` or `./.scrum-poker.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/scrum-poker/config.toml`
//! 4. Fallback: `~/.config/scrum-poker/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileGameConfig, FileOutputConfig, FileSessionConfig};
pub use loader::ConfigLoader;
