mod colors;
mod theme;

use std::fs;
use std::path::Path;

pub use colors::Color;
pub use theme::Theme;

use crate::error::{Error, Result};

pub fn list_builtin_themes() -> Vec<&'static str> {
    vec!["default", "gruvbox-dark", "nord"]
}

pub fn get_builtin_theme(name: &str) -> Option<Theme> {
    match name {
        "default" => Some(Theme::default_dark()),
        "gruvbox-dark" => Some(Theme::gruvbox_dark()),
        "nord" => Some(Theme::nord()),
        _ => None,
    }
}

/// Load `<dir>/<name>.json`.
pub fn load_theme_file(dir: &Path, name: &str) -> Result<Option<Theme>> {
    let path = dir.join(format!("{}.json", name));
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)?;
    let mut theme: Theme =
        serde_json::from_str(&content).map_err(|source| Error::Theme { path, source })?;
    if theme.name.is_empty() {
        theme.name = name.to_string();
    }
    Ok(Some(theme))
}

/// Resolve a theme by name: user themes in `themes_dir` shadow built-ins.
pub fn resolve_theme(name: &str, themes_dir: Option<&Path>) -> Result<Theme> {
    if let Some(dir) = themes_dir {
        if let Some(theme) = load_theme_file(dir, name)? {
            tracing::debug!(name, dir = %dir.display(), "loaded user theme");
            return Ok(theme);
        }
    }
    get_builtin_theme(name).ok_or_else(|| Error::UnknownTheme(name.to_string()))
}
