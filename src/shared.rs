use std::path::Path;
use std::time::Instant;

use eyre::{Result, WrapErr};
use tracing::debug;

use crate::config::SiteConfig;

/// Loads and parses the site configuration file
pub async fn load_site_config(config_path: &Path) -> Result<SiteConfig> {
    let config_content = tokio::fs::read_to_string(config_path)
        .await
        .wrap_err("Failed to read config file")?;
    let site_config: SiteConfig =
        toml::from_str(&config_content).wrap_err("Failed to parse site configuration")?;
    debug!(?site_config, "Loaded site configuration");

    Ok(site_config)
}

pub fn get_elapsed_time(instant: Instant) -> String {
    let duration = instant.elapsed();
    let secs = duration.as_secs_f64();

    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else {
        format!("{:.1}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn loads_a_site_configuration_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("folleto.toml");
        std::fs::write(
            &config_path,
            "title = 'Docs'\ndescription = 'Just docs'",
        )
        .unwrap();

        let config = load_site_config(&config_path).await.unwrap();
        assert_eq!(config.title, "Docs");
        assert_eq!(config.base_path, "/");
    }

    #[tokio::test]
    async fn surfaces_parse_failures() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("folleto.toml");
        std::fs::write(&config_path, "title = ").unwrap();

        assert!(load_site_config(&config_path).await.is_err());
    }

    #[test]
    fn formats_elapsed_times() {
        let now = Instant::now();
        let formatted = get_elapsed_time(now);
        assert!(formatted.ends_with("ms"));
    }
}
