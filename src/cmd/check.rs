use std::time::Instant;

use colored::Colorize;
use eyre::{bail, Result};
use tracing::{debug, info, instrument, warn};

use crate::check::{format_issues, scan_site, validate_config, Severity};
use crate::{fs, shared};

/// Checks the site configuration against the site's content tree.
///
/// Warnings are printed but do not fail the check unless strict mode is
/// enabled through `--strict` or `[check] strict = true`.
#[instrument]
pub async fn check(strict: bool) -> Result<()> {
    let root = fs::find_config_file().await?;
    if let Some(config_path) = root {
        let check_start = Instant::now();

        let site_config = shared::load_site_config(&config_path).await?;
        let strict = strict || site_config.check.strict;

        let root_dir = config_path.parent().unwrap().to_path_buf();
        let tree = scan_site(&root_dir)?;
        debug!(
            routes = tree.routes.len(),
            assets = tree.assets.len(),
            "Scanned site tree"
        );

        let issues = validate_config(&site_config, &tree);
        let (errors, warnings): (Vec<_>, Vec<_>) = if strict {
            (issues, Vec::new())
        } else {
            issues
                .into_iter()
                .partition(|issue| issue.severity() == Severity::Error)
        };

        if !warnings.is_empty() {
            warn!("{}", format_issues(&config_path, &warnings, true));
        }
        if !errors.is_empty() {
            bail!(format_issues(&config_path, &errors, false));
        }

        info!(
            "Configuration check passed in {}",
            shared::get_elapsed_time(check_start)
        );
    } else {
        bail!(
            "{}: not in a Folleto site directory",
            "Could not check the site configuration".bold()
        );
    }

    Ok(())
}
