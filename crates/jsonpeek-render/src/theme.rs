//! Theme catalog backed by syntect theme sets.

use std::path::Path;

use anyhow::Context;
use jsonpeek_core::Result;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{ClassStyle, css_for_theme_with_class_style};

/// Name of the built-in theme that is always offered.
pub const DEFAULT_THEME: &str = "default";

/// Syntect theme backing the "default" entry.
const DEFAULT_BACKING_THEME: &str = "base16-eighties.dark";

/// Enumerates available visual themes and supplies their generated CSS.
///
/// Ordering (and the guaranteed "default" entry) is the renderer's
/// responsibility, not the catalog's.
pub trait ThemeProvider {
    fn theme_names(&self) -> Vec<String>;
    /// CSS for a theme's classed spans; `None` for unknown names.
    fn theme_css(&self, name: &str) -> Option<String>;
}

pub struct ThemeCatalog {
    themes: ThemeSet,
}

impl ThemeCatalog {
    /// Catalog of the themes syntect ships with.
    pub fn builtin() -> Self {
        Self {
            themes: ThemeSet::load_defaults(),
        }
    }

    /// Built-in themes plus every theme file found in an asset directory.
    pub fn with_theme_dir(dir: &Path) -> Result<Self> {
        let mut themes = ThemeSet::load_defaults();
        themes
            .add_from_folder(dir)
            .with_context(|| format!("load themes from {}", dir.display()))?;
        Ok(Self { themes })
    }

    fn backing_theme(&self, name: &str) -> Option<&Theme> {
        if name == DEFAULT_THEME {
            self.themes
                .themes
                .get(DEFAULT_BACKING_THEME)
                .or_else(|| self.themes.themes.values().next())
        } else {
            self.themes.themes.get(name)
        }
    }
}

impl ThemeProvider for ThemeCatalog {
    fn theme_names(&self) -> Vec<String> {
        self.themes.themes.keys().cloned().collect()
    }

    fn theme_css(&self, name: &str) -> Option<String> {
        let theme = self.backing_theme(name)?;
        css_for_theme_with_class_style(theme, ClassStyle::Spaced).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_themes_and_default_css() {
        let catalog = ThemeCatalog::builtin();
        assert!(!catalog.theme_names().is_empty());
        let css = catalog.theme_css(DEFAULT_THEME).expect("default css");
        assert!(css.contains('{'));
    }

    #[test]
    fn unknown_theme_has_no_css() {
        let catalog = ThemeCatalog::builtin();
        assert_eq!(catalog.theme_css("no-such-theme"), None);
    }

    #[test]
    fn every_listed_theme_has_css() {
        let catalog = ThemeCatalog::builtin();
        for name in catalog.theme_names() {
            assert!(catalog.theme_css(&name).is_some(), "missing css for {name}");
        }
    }
}
