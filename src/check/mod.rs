use regex::Regex;
use std::{collections::HashSet, path::Path};

use eyre::Result;
use walkdir::WalkDir;

use crate::config::Platform;

mod validator;

pub use validator::validate_config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// A single consistency problem found in the site configuration
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigIssue {
    MissingDocument { field: String, target: String },
    NotAbsolutePath { field: String, target: String },
    NotAbsoluteUrl { field: String, target: String },
    MalformedBasePath { value: String },
    DuplicatePlatform { platform: Platform },
    DuplicateLabel { field: String, label: String },
    EmptyLabel { field: String },
    EmptyGroup { root_path: String },
    MissingAsset { field: String, target: String },
}

impl ConfigIssue {
    /// Broken structure is an error, questionable authoring is a warning
    pub fn severity(&self) -> Severity {
        match self {
            Self::DuplicateLabel { .. }
            | Self::EmptyLabel { .. }
            | Self::EmptyGroup { .. }
            | Self::MissingAsset { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDocument { field, target } => write!(
                f,
                "No content document found for '{}' referenced by '{}'",
                target, field
            ),
            Self::NotAbsolutePath { field, target } => write!(
                f,
                "Target '{}' in '{}' is not an absolute path starting with '/'",
                target, field
            ),
            Self::NotAbsoluteUrl { field, target } => {
                write!(f, "Target '{}' in '{}' is not an absolute URL", target, field)
            }
            Self::MalformedBasePath { value } => {
                write!(f, "Base path '{}' must begin and end with '/'", value)
            }
            Self::DuplicatePlatform { platform } => {
                write!(f, "More than one social link for platform '{}'", platform)
            }
            Self::DuplicateLabel { field, label } => {
                write!(f, "Duplicated label '{}' in '{}'", label, field)
            }
            Self::EmptyLabel { field } => write!(f, "Empty label in '{}'", field),
            Self::EmptyGroup { root_path } => {
                write!(f, "Sidebar group '{}' has no items", root_path)
            }
            Self::MissingAsset { field, target } => write!(
                f,
                "No asset file found for '{}' referenced by '{}'",
                target, field
            ),
        }
    }
}

/// The routable surface of a site: document routes derived from the content
/// directory plus the asset paths served verbatim.
#[derive(Debug, Default)]
pub struct SiteTree {
    pub routes: HashSet<String>,
    pub assets: HashSet<String>,
}

impl SiteTree {
    /// Scans the content and assets directories of a site.
    ///
    /// Every markdown document contributes one route, `index` documents are
    /// collapsed onto their parent directory (`content/guide/index.md` becomes
    /// `/guide`). Assets keep their relative path with a leading slash.
    pub fn scan(content_dir: &Path, assets_dir: &Path) -> Result<Self> {
        let mut tree = Self::default();

        for entry in WalkDir::new(content_dir).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            let is_document = path.extension().is_some_and(|ext| ext == "md");
            if is_document {
                if let Ok(rel_path) = path.strip_prefix(content_dir) {
                    tree.routes.insert(route_for(rel_path));
                }
            }
        }

        if assets_dir.exists() {
            for entry in WalkDir::new(assets_dir)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.path().is_file())
            {
                if let Ok(rel_path) = entry.path().strip_prefix(assets_dir) {
                    let asset = rel_path.to_string_lossy().replace('\\', "/");
                    tree.assets.insert(format!("/{}", asset));
                }
            }
        }

        Ok(tree)
    }
}

/// Derives the site route for a content document path relative to the content
/// directory
pub fn route_for(rel_path: &Path) -> String {
    let mut route_path = rel_path.with_extension("");
    if route_path
        .file_name()
        .is_some_and(|name| name == "index")
    {
        route_path = route_path
            .parent()
            .unwrap_or(Path::new(""))
            .to_path_buf();
    }
    let route = route_path.to_string_lossy().replace('\\', "/");
    if route.is_empty() {
        String::from("/")
    } else {
        format!("/{}", route)
    }
}

/// Strips fragments/queries and the trailing slash so link targets can be
/// matched against the route set (`/intro/#setup` resolves like `/intro`)
pub fn normalize_route(target: &str) -> String {
    let path = target.split(['#', '?']).next().unwrap_or(target);
    if path.len() > 1 {
        path.trim_end_matches('/').to_string()
    } else {
        path.to_string()
    }
}

/// Check whether a link target points outside the site
pub fn is_external(target: &str) -> bool {
    let scheme_re = Regex::new(r"^[a-z][a-z0-9+.-]*://").unwrap();
    scheme_re.is_match(target) || target.starts_with("mailto:")
}

pub fn format_issues(config_path: &Path, issues: &[ConfigIssue], as_warnings: bool) -> String {
    let mut output = format!(
        "{}: Configuration {} for '{}'\n",
        if as_warnings { "Warning" } else { "Error" },
        if as_warnings { "issues" } else { "check failed" },
        config_path.display()
    );
    for issue in issues {
        output.push_str(&format!("  → {}\n", issue));
    }
    output
}

/// Builds the site tree rooted at a site directory, used by the check command
pub fn scan_site(root: &Path) -> Result<SiteTree> {
    SiteTree::scan(&root.join("content"), &root.join("assets"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_routes_from_document_paths() {
        assert_eq!(route_for(Path::new("index.md")), "/");
        assert_eq!(route_for(Path::new("intro.md")), "/intro");
        assert_eq!(route_for(Path::new("guide/index.md")), "/guide");
        assert_eq!(route_for(Path::new("guide/setup.md")), "/guide/setup");
    }

    #[test]
    fn normalizes_link_targets() {
        assert_eq!(normalize_route("/intro"), "/intro");
        assert_eq!(normalize_route("/intro/"), "/intro");
        assert_eq!(normalize_route("/intro/#setup"), "/intro");
        assert_eq!(normalize_route("/intro?lang=en"), "/intro");
        assert_eq!(normalize_route("/"), "/");
    }

    #[test]
    fn detects_external_targets() {
        assert!(is_external("https://example.org/handbook"));
        assert!(is_external("http://localhost:3030/"));
        assert!(is_external("mailto:docs@example.org"));
        assert!(!is_external("/intro"));
        assert!(!is_external("intro"));
    }

    #[test]
    fn scans_documents_and_assets() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        let assets = dir.path().join("assets");
        std::fs::create_dir_all(content.join("guide")).unwrap();
        std::fs::create_dir_all(assets.join("img")).unwrap();
        std::fs::write(content.join("index.md"), "# Home").unwrap();
        std::fs::write(content.join("intro.md"), "# Intro").unwrap();
        std::fs::write(content.join("guide/index.md"), "# Guide").unwrap();
        std::fs::write(content.join("guide/setup.md"), "# Setup").unwrap();
        std::fs::write(content.join("notes.txt"), "not a document").unwrap();
        std::fs::write(assets.join("img/logo.png"), [0u8; 4]).unwrap();

        let tree = SiteTree::scan(&content, &assets).unwrap();
        let expected: HashSet<String> = ["/", "/intro", "/guide", "/guide/setup"]
            .iter()
            .map(|r| r.to_string())
            .collect();
        assert_eq!(tree.routes, expected);
        assert!(tree.assets.contains("/img/logo.png"));
    }

    #[test]
    fn scanning_a_missing_assets_directory_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path().join("content");
        std::fs::create_dir_all(&content).unwrap();
        std::fs::write(content.join("index.md"), "# Home").unwrap();

        let tree = SiteTree::scan(&content, &dir.path().join("assets")).unwrap();
        assert!(tree.routes.contains("/"));
        assert!(tree.assets.is_empty());
    }

    #[test]
    fn formats_issues_with_a_severity_header() {
        let issues = vec![ConfigIssue::MissingDocument {
            field: String::from("theme.nav[1]"),
            target: String::from("/missing"),
        }];
        let output = format_issues(Path::new("folleto.toml"), &issues, false);
        assert!(output.starts_with("Error: Configuration check failed for 'folleto.toml'"));
        assert!(output.contains("  → No content document found for '/missing'"));

        let output = format_issues(Path::new("folleto.toml"), &issues, true);
        assert!(output.starts_with("Warning: Configuration issues for 'folleto.toml'"));
    }
}
