use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, config_path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration ({}):\n", config_path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *check {
            if !config_path.exists() {
                warning(format!(
                    "{} does not exist; defaults are in use (run `prodmetrics init`).",
                    config_path.display()
                ));
                return Ok(());
            }

            let missing = Config::missing_fields(config_path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                for key in missing {
                    warning(format!("Missing key '{key}' (default value applies)"));
                }
            }
        }

        if !*print_config && !*check {
            info("Nothing to do: use --print or --check.");
        }
    }

    Ok(())
}
