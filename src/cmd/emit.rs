use std::path::PathBuf;

use colored::Colorize;
use eyre::{bail, Result, WrapErr};
use tracing::{info, instrument};

use crate::{fs, shared};

/// Emits the resolved site configuration as canonical TOML.
///
/// This is the hand-off surface for the site renderer: the record is loaded,
/// serde defaults are applied, and the result is written to stdout or a file.
#[instrument]
pub async fn emit(output: Option<PathBuf>) -> Result<()> {
    let root = fs::find_config_file().await?;
    if let Some(config_path) = root {
        let site_config = shared::load_site_config(&config_path).await?;
        let rendered = toml::to_string_pretty(&site_config)
            .wrap_err("Failed to serialize site configuration")?;

        match output {
            Some(path) => {
                tokio::fs::write(&path, rendered).await.wrap_err(format!(
                    "{}: {}",
                    "Failed to write resolved configuration".bold(),
                    path.display()
                ))?;
                info!("Resolved configuration written to {}", path.display());
            }
            None => print!("{}", rendered),
        }
    } else {
        bail!(
            "{}: not in a Folleto site directory",
            "Could not emit the site configuration".bold()
        );
    }

    Ok(())
}
