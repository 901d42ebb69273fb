use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use tracing::info;

const BUILTIN_CSS: &str = include_str!("../../static/app.css");

static STYLESHEET: OnceLock<String> = OnceLock::new();

/// Installs the page stylesheet. Called once from `main`; later calls keep the first value.
/// Without an override the built-in sheet is used.
pub fn install_stylesheet(override_path: Option<&Path>) -> Result<()> {
    let css = match override_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stylesheet '{}'", path.display()))?,
        None => BUILTIN_CSS.to_string(),
    };

    if STYLESHEET.set(css).is_ok() {
        info!(
            "Stylesheet installed ({})",
            override_path
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in".to_string())
        );
    }
    Ok(())
}

/// The installed stylesheet, or the built-in one if nothing was installed.
pub fn stylesheet() -> &'static str {
    STYLESHEET.get().map(String::as_str).unwrap_or(BUILTIN_CSS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sheet_is_served_by_default() {
        assert!(stylesheet().contains(".score-tile"));
    }

    #[test]
    fn test_missing_override_is_an_error() {
        let err = install_stylesheet(Some(Path::new("/nonexistent/app.css"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/app.css"));
    }
}
