//! Config Command
//!
//! Manage IdeaForge configuration.
//!
//! Usage:
//!   ideaforge config show [-f json]
//!   ideaforge config path
//!   ideaforge config init [--force]

use crate::config::ConfigLoader;
use crate::types::Result;

/// Show merged effective configuration
pub fn show(format: &str) -> Result<()> {
    ConfigLoader::show_config(format == "json")
}

/// Show configuration paths
pub fn path() -> Result<()> {
    ConfigLoader::show_path();
    Ok(())
}

/// Initialize global configuration
pub fn init_global(force: bool) -> Result<()> {
    let config_path = ConfigLoader::init_global(force)?;
    println!("✓ Initialized global configuration");
    println!("  Config: {}", config_path.display());
    Ok(())
}
