//! Entry page loading.

use std::path::Path;

/// Page served at `/` when the template directory has no `index.html`.
pub const BUILTIN_INDEX_PAGE: &str = include_str!("../assets/index.html");

/// Read the entry page from `path`, or fall back to [`BUILTIN_INDEX_PAGE`] if no file is there.
///
/// The page is read once at startup; edits on disk need a restart.
///
/// # Errors
/// Returns an error if the file exists but cannot be read.
pub fn load_index_page(path: &Path) -> std::io::Result<String> {
    if path.is_file() {
        tracing::info!("serving entry page from {}", path.display());
        return std::fs::read_to_string(path);
    }
    tracing::info!(
        "no entry page at {}, serving the built-in page",
        path.display()
    );
    Ok(BUILTIN_INDEX_PAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_index_page_prefers_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("index.html");
        std::fs::write(&path, "<p>custom</p>").unwrap();
        assert_eq!(load_index_page(&path).unwrap(), "<p>custom</p>");
    }

    #[test]
    fn test_load_index_page_falls_back_to_builtin() {
        let temp = TempDir::new().unwrap();
        let page = load_index_page(&temp.path().join("index.html")).unwrap();
        assert_eq!(page, BUILTIN_INDEX_PAGE);
        assert!(page.contains("/api/search"));
    }
}
