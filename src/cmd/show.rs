use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use colored::Colorize;
use eyre::{bail, Result};
use tracing::instrument;

use crate::config::NavItem;
use crate::{fs, shared};

fn entries_table(entries: &[NavItem]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Label", "Target"]);
    for entry in entries {
        table.add_row(vec![entry.label.clone(), entry.target.clone()]);
    }
    table
}

/// Prints a human-readable summary of the site configuration
#[instrument]
pub async fn show() -> Result<()> {
    let root = fs::find_config_file().await?;
    if let Some(config_path) = root {
        let site_config = shared::load_site_config(&config_path).await?;

        println!(
            "Site configuration for '{}':\n→ Description: {}\n→ Base path: {}\n→ Logo: {}",
            site_config.title,
            site_config.description,
            site_config.base_path,
            site_config.theme.logo.as_deref().unwrap_or("(none)"),
        );

        if !site_config.theme.nav.is_empty() {
            println!("\nTop navigation:");
            println!("{}", entries_table(&site_config.theme.nav));
        }

        for group in &site_config.theme.sidebar {
            println!(
                "\nSidebar group '{}' (depth {}):",
                group.root_path, group.depth
            );
            println!("{}", entries_table(&group.items));
        }

        if !site_config.theme.social_links.is_empty() {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["Platform", "Target"]);
            for link in &site_config.theme.social_links {
                table.add_row(vec![link.platform.to_string(), link.target.clone()]);
            }
            println!("\nSocial links:");
            println!("{}", table);
        }
    } else {
        bail!(
            "{}: not in a Folleto site directory",
            "Could not display the site configuration".bold()
        );
    }

    Ok(())
}
