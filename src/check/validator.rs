use std::collections::HashSet;

use crate::check::{is_external, normalize_route, ConfigIssue, SiteTree};
use crate::config::{NavItem, SiteConfig};

/// Runs every consistency check over a loaded configuration.
///
/// Returns the issues in the order the offending fields are declared so the
/// report reads top to bottom like the configuration file itself.
pub fn validate_config(config: &SiteConfig, tree: &SiteTree) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();

    check_base_path(&config.base_path, &mut issues);
    check_entries("theme.nav", &config.theme.nav, tree, &mut issues);

    for (idx, group) in config.theme.sidebar.iter().enumerate() {
        let field = format!("theme.sidebar[{}]", idx);
        check_internal_target(
            &format!("{}.rootPath", field),
            &group.root_path,
            tree,
            &mut issues,
        );
        if group.items.is_empty() {
            issues.push(ConfigIssue::EmptyGroup {
                root_path: group.root_path.clone(),
            });
        }
        check_entries(&format!("{}.items", field), &group.items, tree, &mut issues);
    }

    check_social_links(config, &mut issues);
    check_logo(config, tree, &mut issues);

    issues
}

fn check_base_path(base_path: &str, issues: &mut Vec<ConfigIssue>) {
    if !base_path.starts_with('/') || !base_path.ends_with('/') {
        issues.push(ConfigIssue::MalformedBasePath {
            value: base_path.to_string(),
        });
    }
}

/// Checks an ordered list of navigation entries: labels for authoring issues,
/// internal targets against the route set. External targets are left alone.
fn check_entries(
    field_prefix: &str,
    entries: &[NavItem],
    tree: &SiteTree,
    issues: &mut Vec<ConfigIssue>,
) {
    let mut seen_labels = HashSet::new();

    for (idx, entry) in entries.iter().enumerate() {
        let field = format!("{}[{}]", field_prefix, idx);

        if entry.label.trim().is_empty() {
            issues.push(ConfigIssue::EmptyLabel { field: field.clone() });
        } else if !seen_labels.insert(entry.label.to_lowercase()) {
            issues.push(ConfigIssue::DuplicateLabel {
                field: field.clone(),
                label: entry.label.clone(),
            });
        }

        if !is_external(&entry.target) {
            check_internal_target(&field, &entry.target, tree, issues);
        }
    }
}

fn check_internal_target(
    field: &str,
    target: &str,
    tree: &SiteTree,
    issues: &mut Vec<ConfigIssue>,
) {
    if !target.starts_with('/') {
        issues.push(ConfigIssue::NotAbsolutePath {
            field: field.to_string(),
            target: target.to_string(),
        });
        return;
    }

    if !tree.routes.contains(&normalize_route(target)) {
        issues.push(ConfigIssue::MissingDocument {
            field: field.to_string(),
            target: target.to_string(),
        });
    }
}

fn check_social_links(config: &SiteConfig, issues: &mut Vec<ConfigIssue>) {
    let mut seen_platforms = HashSet::new();

    for (idx, link) in config.theme.social_links.iter().enumerate() {
        if !seen_platforms.insert(link.platform) {
            issues.push(ConfigIssue::DuplicatePlatform {
                platform: link.platform,
            });
        }

        if !is_external(&link.target) {
            issues.push(ConfigIssue::NotAbsoluteUrl {
                field: format!("theme.socialLinks[{}]", idx),
                target: link.target.clone(),
            });
        }
    }
}

fn check_logo(config: &SiteConfig, tree: &SiteTree, issues: &mut Vec<ConfigIssue>) {
    let Some(logo) = config.theme.logo.as_deref() else {
        return;
    };
    if is_external(logo) {
        return;
    }

    if !logo.starts_with('/') {
        issues.push(ConfigIssue::NotAbsolutePath {
            field: String::from("theme.logo"),
            target: logo.to_string(),
        });
    } else if !tree.assets.contains(logo) {
        issues.push(ConfigIssue::MissingAsset {
            field: String::from("theme.logo"),
            target: logo.to_string(),
        });
    }
}
