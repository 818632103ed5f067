use crate::output::Output;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Attribute, Cell, Color, Table};
use moviecritic_config::{Config, PathManager, BASE_URL_ENV};
use serde_json::json;

pub fn run_config(cmd: crate::ConfigCommands, settings: &Config, output: &Output) -> Result<()> {
    match cmd {
        crate::ConfigCommands::Show => show_config(settings, output),
        crate::ConfigCommands::Path => {
            let config_file = PathManager::default().config_file();
            match output.format() {
                crate::output::OutputFormat::Human => output.info(config_file.display().to_string()),
                _ => output.json(&json!({ "config_file": config_file })),
            }
            Ok(())
        }
        crate::ConfigCommands::SetBaseUrl { url } => set_base_url(url, output),
    }
}

/// Effective settings, after the environment and `--base-url` are applied
fn show_config(settings: &Config, output: &Output) -> Result<()> {
    let config_file = PathManager::default().config_file();

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("Setting").fg(Color::Cyan).add_attribute(Attribute::Bold),
        Cell::new("Value").fg(Color::Cyan).add_attribute(Attribute::Bold),
    ]);
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.apply_modifier(comfy_table::modifiers::UTF8_ROUND_CORNERS);

    let file_note = if config_file.exists() { "" } else { " (not created yet)" };
    let json_logs = match settings.logging.json {
        Some(true) => "yes",
        Some(false) => "no",
        None => "auto",
    };
    let log_file = settings
        .logging
        .file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stderr".to_string());

    table.add_row(vec![Cell::new("Config File"), Cell::new(format!("{}{}", config_file.display(), file_note))]);
    table.add_row(vec![Cell::new("Service URL"), Cell::new(&settings.service.base_url)]);
    table.add_row(vec![Cell::new("Log Level"), Cell::new(&settings.logging.level)]);
    table.add_row(vec![Cell::new("JSON Logs"), Cell::new(json_logs)]);
    table.add_row(vec![Cell::new("Log File"), Cell::new(log_file)]);

    let data = json!({
        "config_file": config_file,
        "service": { "base_url": settings.service.base_url },
        "logging": settings.logging,
    });
    output.table(&table, &data);

    if std::env::var(BASE_URL_ENV).is_ok() {
        output.info(format!("{} is set and overrides the config file", BASE_URL_ENV));
    }
    Ok(())
}

/// Writes to the config file only; environment overrides are left out so
/// they are not persisted by accident
fn set_base_url(url: String, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let config_file = path_manager.config_file();

    let mut config = Config::load_or_default(&config_file)
        .map_err(|e| eyre!("Failed to load config from {}: {}", config_file.display(), e))?;
    config.service.base_url = url.trim().trim_end_matches('/').to_string();
    config.validate().map_err(|e| eyre!("Invalid service URL: {}", e))?;

    path_manager
        .ensure_directories()
        .map_err(|e| eyre!("Failed to create {}: {}", path_manager.config_dir().display(), e))?;
    config
        .save_to_file(&config_file)
        .map_err(|e| eyre!("Failed to save config to {}: {}", config_file.display(), e))?;

    tracing::info!(base_url = %config.service.base_url, "Saved service URL");
    output.success(format!("Service URL set to {}", config.service.base_url));
    Ok(())
}
