//! Rendering: formatted text to a colorized, line-numbered HTML document
//! with the preview panel's control bar.

pub mod colorize;
pub mod html;
pub mod theme;

pub use colorize::{Colorize, JsonColorizer};
pub use html::{Renderer, theme_display_order};
pub use theme::{DEFAULT_THEME, ThemeCatalog, ThemeProvider};
