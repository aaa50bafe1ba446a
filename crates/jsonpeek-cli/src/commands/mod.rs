use std::path::Path;

use anyhow::Result;
use jsonpeek_render::ThemeCatalog;

pub(crate) mod admin;
pub(crate) mod preview;

pub(crate) fn theme_catalog(theme_dir: Option<&Path>) -> Result<ThemeCatalog> {
    match theme_dir {
        Some(dir) => ThemeCatalog::with_theme_dir(dir),
        None => Ok(ThemeCatalog::builtin()),
    }
}
