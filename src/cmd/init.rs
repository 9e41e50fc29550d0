use std::path::Path;

use eyre::{eyre, Result};
use indoc::formatdoc;
use inquire::Text;
use tokio::fs::{canonicalize, create_dir_all, try_exists, write};
use tracing::instrument;

/// Create basic site configuration TOML
async fn create_config(root: &Path, title: &str, description: &str) -> Result<()> {
    let site_config = formatdoc!(
        r#"
        title = '{}'
        description = '{}'
        basePath = '/'

        [[theme.nav]]
        label = 'Home'
        target = '/'
        "#,
        title,
        description,
    );
    write(root.join("folleto.toml"), site_config).await?;

    Ok(())
}

/// Create a basic hello world markdown document
async fn create_index_document(root: &Path, title: &str) -> Result<()> {
    let creation_date =
        chrono::offset::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, false);
    let index_document = formatdoc!(
        r#"
        +++
        title = "{}"
        authors = ["{}"]
        created = {}
        +++

        # {}

        Welcome to your new documentation site. Replace this document with your
        own content and surface new pages through `theme.nav` and
        `theme.sidebar` in `folleto.toml`."#,
        title,
        whoami::username(),
        creation_date,
        title,
    );
    write(root.join("content/index.md"), index_document).await?;

    Ok(())
}

async fn create_directories(root: &Path) -> Result<()> {
    // Create the site directories and all their parent directories if required
    let directories = vec!["content", "assets"];
    for dir in directories {
        create_dir_all(root.join(dir)).await?;
    }

    Ok(())
}

/// Scaffold a new site: directories, starter configuration and index document.
/// Title and description fall back to interactive prompts when not given.
#[instrument]
pub async fn init(
    name: Option<String>,
    title: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let name = match name {
        Some(name) => name,
        None => Text::new("Site name:").with_default("my-site").prompt()?,
    };

    let path_exists = try_exists(&name).await?;
    if path_exists {
        // Get the canonical (absolute) path to the existing site root
        let path = canonicalize(&name).await?;
        return Err(
            eyre!("The target directory {} already exists.", path.display())
                .wrap_err("Could not initialize the new Folleto site"),
        );
    }

    let title = match title {
        Some(title) => title,
        None => Text::new("Site title:").with_default(&name).prompt()?,
    };
    let description = match description {
        Some(description) => description,
        None => Text::new("Site description:")
            .with_default("A documentation site built with Folleto")
            .prompt()?,
    };

    let root = Path::new(&name);
    create_directories(root).await?;
    create_config(root, &title, &description).await?;
    create_index_document(root, &title).await?;

    // Get the canonical (absolute) path to the new site root
    let path = canonicalize(&name).await?;
    let init_message = formatdoc!(
        r#"
        Congratulations, your new Folleto site was created in {}

        Run 'leto check' inside the site to validate the configuration against
        your content as it grows."#,
        path.display(),
    );
    println!("{}", init_message);

    Ok(())
}
