// ABOUTME: CLI commands for persisted settings
// ABOUTME: List, read, write, and reset setting slots

use clap::Subcommand;
use colored::*;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use decomp_settings::{SettingKey, SettingsStore};

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// List every setting with its effective value
    List,
    /// Print one setting
    Get {
        /// Setting name, e.g. codeFontSize
        key: SettingKey,
    },
    /// Store a new value for a setting
    Set {
        /// Setting name, e.g. theme
        key: SettingKey,
        /// New value; use "none" to clear monospaceFont
        value: String,
    },
    /// Restore a setting to its default
    Reset {
        /// Setting name
        key: SettingKey,
    },
}

pub async fn handle_settings_command(
    store: &SettingsStore,
    command: SettingsCommands,
) -> anyhow::Result<()> {
    match command {
        SettingsCommands::List => list_settings(store).await,
        SettingsCommands::Get { key } => {
            println!("{}", store.get_value(key).await?);
            Ok(())
        }
        SettingsCommands::Set { key, value } => {
            let stored = store.set_raw(key, &value).await?;
            println!("{} {} = {}", "✅".green(), key.to_string().bold(), stored);
            Ok(())
        }
        SettingsCommands::Reset { key } => {
            store.reset(key).await?;
            println!(
                "{} {} reset to {}",
                "✅".green(),
                key.to_string().bold(),
                key.default_value()
            );
            Ok(())
        }
    }
}

async fn list_settings(store: &SettingsStore) -> anyhow::Result<()> {
    let entries = store.entries().await?;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec!["Key", "Value", "Source", "Description"]);

    for entry in &entries {
        let source = if entry.is_default { "default" } else { "stored" };
        table.add_row(vec![
            entry.key.to_string(),
            entry.value.to_string(),
            source.to_string(),
            entry.key.description().to_string(),
        ]);
    }

    println!("{}", table);
    Ok(())
}
