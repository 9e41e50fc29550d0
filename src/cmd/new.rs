use std::path::{Path, PathBuf};

use colored::Colorize;
use eyre::{bail, Result, WrapErr};
use indoc::formatdoc;
use titlecase::titlecase;
use tokio::fs::{create_dir_all, try_exists, write};
use tracing::{info, instrument};

use crate::check::route_for;
use crate::fs;

/// Derive a document title from its path relative to the content directory,
/// e.g. 'guide/query-scopes.md' -> 'Query Scopes'
fn derive_title(rel_path: &Path) -> String {
    let stem = rel_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("index");

    if stem == "index" {
        // 'guide/index.md' is titled after its directory
        match rel_path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|s| s.to_str())
        {
            Some(dir) => titlecase(&dir.replace(['-', '_'], " ")),
            None => String::from("Index"),
        }
    } else {
        titlecase(&stem.replace(['-', '_'], " "))
    }
}

/// Normalize the user-provided document path: always relative, always `.md`
fn normalize_document_path(path: &str) -> PathBuf {
    let rel = PathBuf::from(path.trim_start_matches('/'));
    if rel.extension().is_some_and(|ext| ext == "md") {
        rel
    } else {
        rel.with_extension("md")
    }
}

/// Create a new content document so configuration targets have a page to
/// point at
#[instrument]
pub async fn new(path: String) -> Result<()> {
    let root = fs::find_config_file().await?;
    if let Some(config_path) = root {
        let mut root_dir = config_path.clone();
        // Remove `folleto.toml` from the root path
        root_dir.pop();

        let rel_path = normalize_document_path(&path);
        let document_path = root_dir.join("content").join(&rel_path);

        if try_exists(&document_path).await? {
            bail!(
                "{}: {} already exists",
                "Could not create the content document".bold(),
                document_path.display()
            );
        }

        let title = derive_title(&rel_path);
        let creation_date =
            chrono::offset::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, false);
        let document = formatdoc!(
            r#"
            +++
            title = "{}"
            authors = ["{}"]
            created = {}
            +++

            # {}
            "#,
            title,
            whoami::username(),
            creation_date,
            title,
        );

        if let Some(parent) = document_path.parent() {
            create_dir_all(parent).await.wrap_err(format!(
                "{}: {}",
                "Failed to create parent directory for".bold(),
                document_path.display()
            ))?;
        }
        write(&document_path, document).await.wrap_err(format!(
            "{}: {}",
            "Failed to write content document".bold(),
            document_path.display()
        ))?;

        info!("Created new content document {}", document_path.display());
        println!(
            "→ Reachable as '{}' once added to theme.nav or a theme.sidebar group in folleto.toml",
            route_for(&rel_path)
        );
    } else {
        bail!(
            "{}: not in a Folleto site directory",
            "Could not create the content document".bold()
        );
    }

    Ok(())
}
