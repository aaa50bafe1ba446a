//! Assembles the complete preview document: numbered code lines, the
//! control bar, embedded theme CSS, and the message-posting script.

use jsonpeek_core::{DisplayContent, Preferences};

use crate::colorize::Colorize;
use crate::theme::{DEFAULT_THEME, ThemeProvider};

const PANEL_TITLE: &str = "Prettified JSON";

const BASE_STYLE: &str = r#"body {
  margin: 0;
}
.controls {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  padding: 6px 10px;
  font-family: sans-serif;
  font-size: 13px;
  background: rgba(128, 128, 128, 0.15);
  backdrop-filter: blur(2px);
}
.controls label {
  margin-right: 12px;
}
pre {
  margin: 0;
  padding: 40px 10px 10px 10px;
}
pre, code {
  background: transparent !important;
}
code.code {
  display: block;
  white-space: pre;
  font-family: monospace;
}
code.code.wrap {
  white-space: pre-wrap;
}
.ln {
  display: inline-block;
  min-width: 2.5em;
  padding-right: 1em;
  text-align: right;
  opacity: 0.5;
  user-select: none;
  -webkit-user-select: none;
}"#;

const CONTROL_SCRIPT: &str = r#"<script>
(function () {
  const post = (msg) => {
    if (window.jsonpeekHost && window.jsonpeekHost.postMessage) {
      window.jsonpeekHost.postMessage(JSON.stringify(msg));
    }
  };
  document.getElementById('theme').addEventListener('change', (e) => {
    post({ kind: 'themeChanged', theme: e.target.value });
  });
  document.getElementById('wrap').addEventListener('change', (e) => {
    document.getElementById('code').classList.toggle('wrap', e.target.checked);
    post({ kind: 'wrapChanged', wrap: e.target.checked });
  });
  document.getElementById('sticky').addEventListener('change', (e) => {
    post({ kind: 'stickyChanged', sticky: e.target.checked });
  });
})();
</script>"#;

/// Builds full HTML documents from display content and preferences.
///
/// The renderer reads preferences and never writes them; control changes
/// flow back to the session as panel messages.
pub struct Renderer {
    colorizer: Box<dyn Colorize>,
}

impl Renderer {
    pub fn new(colorizer: Box<dyn Colorize>) -> Self {
        Self { colorizer }
    }

    /// Build the complete document for one render cycle.
    pub fn render(
        &self,
        content: &DisplayContent,
        prefs: &Preferences,
        themes: &dyn ThemeProvider,
    ) -> String {
        let code = match content {
            DisplayContent::Empty => String::new(),
            DisplayContent::Document(text) => numbered_lines(&self.colorizer.colorize(text)),
        };
        let theme_css = themes
            .theme_css(&prefs.theme)
            .or_else(|| themes.theme_css(DEFAULT_THEME))
            .unwrap_or_default();
        let options = theme_options(&prefs.theme, &themes.theme_names());
        let wrap_class = if prefs.wrap_enabled { " wrap" } else { "" };
        let wrap_checked = if prefs.wrap_enabled { " checked" } else { "" };
        let sticky_checked = if prefs.sticky_enabled { " checked" } else { "" };

        format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n\
             <meta charset=\"UTF-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
             <title>{PANEL_TITLE}</title>\n\
             <style>\n{theme_css}\n</style>\n\
             <style>\n{BASE_STYLE}\n</style>\n\
             </head>\n\
             <body>\n\
             <div class=\"controls\">\n\
             <label><input type=\"checkbox\" id=\"wrap\"{wrap_checked}> Wrap</label>\n\
             <label><input type=\"checkbox\" id=\"sticky\"{sticky_checked}> Sticky</label>\n\
             <label for=\"theme\">Theme</label>\n\
             <select id=\"theme\">\n{options}</select>\n\
             </div>\n\
             <pre><code id=\"code\" class=\"code{wrap_class}\">{code}</code></pre>\n\
             {CONTROL_SCRIPT}\n\
             </body>\n\
             </html>\n"
        )
    }
}

/// Display order for the theme selector: "default" first, then every other
/// name sorted case-insensitively ascending, duplicates removed.
pub fn theme_display_order(names: &[String]) -> Vec<String> {
    let mut rest: Vec<String> = names
        .iter()
        .filter(|name| name.as_str() != DEFAULT_THEME)
        .cloned()
        .collect();
    rest.sort_by_key(|name| name.to_lowercase());
    rest.dedup();
    let mut ordered = Vec::with_capacity(rest.len() + 1);
    ordered.push(DEFAULT_THEME.to_string());
    ordered.extend(rest);
    ordered
}

fn theme_options(active: &str, names: &[String]) -> String {
    let mut out = String::new();
    for (idx, name) in theme_display_order(names).iter().enumerate() {
        let escaped = escape_html(name);
        let selected = if name == active { " selected" } else { "" };
        out.push_str(&format!(
            "<option value=\"{escaped}\"{selected}>{escaped}</option>\n"
        ));
        if idx == 0 {
            out.push_str("<option disabled>──────────</option>\n");
        }
    }
    out
}

/// Prefix each markup line with a 1-based, non-selectable line number.
fn numbered_lines(markup: &str) -> String {
    let mut out = String::new();
    for (idx, line) in markup.split('\n').enumerate() {
        out.push_str(&format!("<span class=\"ln\">{}</span>{line}\n", idx + 1));
    }
    out
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Escaping pass-through colorizer so tests stay independent of the
    /// syntect grammar.
    struct PlainColorizer;

    impl Colorize for PlainColorizer {
        fn colorize(&self, text: &str) -> String {
            text.split('\n')
                .map(escape_html)
                .collect::<Vec<_>>()
                .join("\n")
        }
    }

    struct FixedThemes(Vec<String>);

    impl ThemeProvider for FixedThemes {
        fn theme_names(&self) -> Vec<String> {
            self.0.clone()
        }
        fn theme_css(&self, name: &str) -> Option<String> {
            (name == DEFAULT_THEME || self.0.iter().any(|n| n == name))
                .then(|| format!(".code {{ /* {name} */ }}"))
        }
    }

    fn renderer() -> Renderer {
        Renderer::new(Box::new(PlainColorizer))
    }

    fn themes() -> FixedThemes {
        FixedThemes(vec!["Monokai".into(), "arta".into(), "Zenburn".into()])
    }

    #[test]
    fn display_order_places_default_first_without_duplicates() {
        let order = theme_display_order(&[
            "Zenburn".to_string(),
            "arta".to_string(),
            "default".to_string(),
            "arta".to_string(),
            "Monokai".to_string(),
        ]);
        assert_eq!(order, vec!["default", "arta", "Monokai", "Zenburn"]);
    }

    #[test]
    fn line_numbers_restart_at_one_and_count_lines() {
        let content = DisplayContent::Document("{\n  \"a\": 1\n}".to_string());
        let html = renderer().render(&content, &Preferences::default(), &themes());
        assert!(html.contains("<span class=\"ln\">1</span>"));
        assert!(html.contains("<span class=\"ln\">3</span>"));
        assert!(!html.contains("<span class=\"ln\">4</span>"));
    }

    #[test]
    fn empty_content_renders_an_empty_code_block() {
        let html = renderer().render(&DisplayContent::Empty, &Preferences::default(), &themes());
        assert!(html.contains("<code id=\"code\" class=\"code\"></code>"));
        assert!(!html.contains("class=\"ln\""));
    }

    #[test]
    fn wrap_preference_sets_initial_css_state() {
        let prefs = Preferences {
            wrap_enabled: true,
            ..Preferences::default()
        };
        let html = renderer().render(&DisplayContent::Empty, &prefs, &themes());
        assert!(html.contains("class=\"code wrap\""));
        assert!(html.contains("id=\"wrap\" checked"));
    }

    #[test]
    fn active_theme_is_preselected_and_its_css_embedded() {
        let prefs = Preferences {
            theme: "Monokai".to_string(),
            ..Preferences::default()
        };
        let html = renderer().render(&DisplayContent::Empty, &prefs, &themes());
        assert!(html.contains("<option value=\"Monokai\" selected>Monokai</option>"));
        assert!(html.contains("/* Monokai */"));
    }

    #[test]
    fn unknown_active_theme_falls_back_to_default_css() {
        let prefs = Preferences {
            theme: "gone".to_string(),
            ..Preferences::default()
        };
        let html = renderer().render(&DisplayContent::Empty, &prefs, &themes());
        assert!(html.contains("/* default */"));
    }

    #[test]
    fn sticky_checkbox_reflects_preferences() {
        let html = renderer().render(&DisplayContent::Empty, &Preferences::default(), &themes());
        assert!(html.contains("id=\"sticky\" checked"));

        let prefs = Preferences {
            sticky_enabled: false,
            ..Preferences::default()
        };
        let html = renderer().render(&DisplayContent::Empty, &prefs, &themes());
        assert!(html.contains("id=\"sticky\">"));
    }
}
