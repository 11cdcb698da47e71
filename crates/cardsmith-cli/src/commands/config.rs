//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub async fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            println!("{}", formatter.info(&format!("Configuration file: {}", path.display())));
            println!("{}", render_masked(config)?);
        }
        ConfigAction::Init { force } => {
            init_config(path, force)?;
            let message = format!("Wrote default configuration to {}", path.display());
            println!("{}", formatter.success(&message));
        }
    }
    Ok(())
}

/// Render `config` as TOML with the API key masked.
fn render_masked(config: &Config) -> Result<String> {
    let mut shown = config.clone();
    if shown.llm.api_key().is_some() {
        shown.llm.default_api_key = Some("********".to_string());
    }
    shown.to_toml()
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists; use --force to overwrite",
            path.display()
        )));
    }
    Config::default().save_to(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        init_config(&path, false).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());

        assert!(init_config(&path, false).is_err());
        assert!(init_config(&path, true).is_ok());
    }

    #[test]
    fn test_show_masks_key() {
        let mut config = Config::default();
        config.llm.default_api_key = Some("sk-secret".to_string());

        let rendered = render_masked(&config).unwrap();
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("[llm]"));
    }
}
