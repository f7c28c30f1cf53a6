use std::path::Path;

use tokio::fs::read_dir;

/// Names of the entries directly inside `dir`, sorted.
///
/// # Errors
/// Returns error if the directory cannot be read.
pub async fn list_dir_entries(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut entries = read_dir(dir).await?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}
