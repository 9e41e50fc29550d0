use std::path::PathBuf;

use eyre::Result;
use tokio::fs::metadata;

/// Find a given file or directory in the start directory and its parent
/// directories recursively
pub async fn find_in_previous_dirs(
    kind: &str,
    name: &str,
    current_dir: &mut PathBuf,
) -> Result<Option<PathBuf>> {
    loop {
        // Check if the entry exists in the current directory first
        let path = current_dir.join(name);
        if let Ok(meta) = metadata(&path).await {
            let found = match kind {
                "file" => meta.is_file(),
                "dir" => meta.is_dir(),
                _ => false,
            };
            if found {
                return Ok(Some(path));
            }
        }

        // Move to the parent directory if the entry was not found
        match current_dir.parent() {
            Some(parent_dir) => *current_dir = parent_dir.to_path_buf(),
            None => break, // Reached root directory
        }
    }

    Ok(None)
}

/// Locate the `folleto.toml` of the site containing the current working directory
pub async fn find_config_file() -> Result<Option<PathBuf>> {
    let mut current_dir = std::env::current_dir()?;
    find_in_previous_dirs("file", "folleto.toml", &mut current_dir).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn finds_a_file_in_a_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("docs/guide/advanced");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("folleto.toml"), "title = 'Docs'").unwrap();

        let mut current_dir = nested.clone();
        let found = find_in_previous_dirs("file", "folleto.toml", &mut current_dir)
            .await
            .unwrap();
        assert_eq!(found, Some(dir.path().join("folleto.toml")));
    }

    #[tokio::test]
    async fn finds_a_directory_in_a_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("docs/guide");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::create_dir_all(dir.path().join("content")).unwrap();

        let mut current_dir = nested.clone();
        let found = find_in_previous_dirs("dir", "content", &mut current_dir)
            .await
            .unwrap();
        assert_eq!(found, Some(dir.path().join("content")));
    }

    #[tokio::test]
    async fn returns_none_when_the_file_does_not_exist() {
        let dir = tempfile::tempdir().unwrap();
        let mut current_dir = dir.path().to_path_buf();
        let found = find_in_previous_dirs("file", "does-not-exist.toml", &mut current_dir)
            .await
            .unwrap();
        assert_eq!(found, None);
    }

    #[tokio::test]
    #[serial_test::serial]
    #[cfg_attr(feature = "ci", ignore)]
    async fn find_config_file_walks_up_from_the_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("content/guide");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("folleto.toml"), "title = 'Docs'").unwrap();

        let previous_dir = std::env::current_dir().unwrap();
        std::env::set_current_dir(&nested).unwrap();
        let found = find_config_file().await.unwrap();
        std::env::set_current_dir(previous_dir).unwrap();

        // Canonicalize both sides, tempdirs may live behind symlinks (e.g. /tmp on macOS)
        let found = std::fs::canonicalize(found.unwrap()).unwrap();
        let expected = std::fs::canonicalize(dir.path().join("folleto.toml")).unwrap();
        assert_eq!(found, expected);
    }
}
