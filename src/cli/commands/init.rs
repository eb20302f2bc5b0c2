use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

pub fn handle(cmd: &Commands, config_path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        Config::init(config_path, *force)?;
        success(format!("Config file: {}", config_path.display()));
    }
    Ok(())
}
