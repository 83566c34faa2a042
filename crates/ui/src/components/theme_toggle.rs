use forgepos_i18n::Translator;

use crate::{I18n, ThemeMode, ThemeProvider, UiContext};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeToggleView {
    pub current: ThemeMode,
    /// Moon while light, sun while dark.
    pub glyph: &'static str,
    pub aria_label: String,
}

impl ThemeToggleView {
    pub fn build(current: ThemeMode, t: &dyn Translator) -> Self {
        let aria_label = match current {
            ThemeMode::Light => t.t("theme.to_dark"),
            ThemeMode::Dark => t.t("theme.to_light"),
        };
        Self {
            current,
            glyph: current.toggle_glyph(),
            aria_label,
        }
    }
}

/// Two-state theme toggle (`light` ⇄ `dark`).
#[derive(Debug, Clone)]
pub struct ThemeToggle {
    theme: ThemeProvider,
    i18n: I18n,
}

impl ThemeToggle {
    pub fn new(ctx: &UiContext) -> Self {
        Self {
            theme: ctx.theme.clone(),
            i18n: ctx.i18n.clone(),
        }
    }

    pub fn render(&self) -> ThemeToggleView {
        ThemeToggleView::build(self.theme.current(), &self.i18n)
    }

    /// Click handler.
    pub fn toggle(&self) -> ThemeMode {
        self.theme.toggle()
    }
}
