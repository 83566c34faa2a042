use forgepos_i18n::{Language, Translator};

use crate::{I18n, LanguageProvider, UiContext};

/// Side of the globe icon that gets the gap before the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSpacing {
    /// Gap on the icon's right; left-to-right layouts.
    Right,
    /// Gap on the icon's left; right-to-left layouts.
    Left,
}

impl IconSpacing {
    pub fn for_language(language: Language) -> Self {
        if language.is_rtl() {
            IconSpacing::Left
        } else {
            IconSpacing::Right
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            IconSpacing::Right => "mr-2",
            IconSpacing::Left => "ml-2",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSwitcherView {
    pub current: Language,
    /// Language a click switches to.
    pub target: Language,
    /// Native name of `target`; the button offers that language.
    pub label: String,
    pub aria_label: String,
    pub icon_spacing: IconSpacing,
}

impl LanguageSwitcherView {
    pub fn build(current: Language, t: &dyn Translator) -> Self {
        let target = current.toggled();
        Self {
            current,
            target,
            label: target.native_name().to_owned(),
            aria_label: t.t("language.switch"),
            icon_spacing: IconSpacing::for_language(current),
        }
    }
}

/// Two-state language toggle (`en` ⇄ `ar`).
#[derive(Debug, Clone)]
pub struct LanguageSwitcher {
    language: LanguageProvider,
    i18n: I18n,
}

impl LanguageSwitcher {
    pub fn new(ctx: &UiContext) -> Self {
        Self {
            language: ctx.language.clone(),
            i18n: ctx.i18n.clone(),
        }
    }

    pub fn render(&self) -> LanguageSwitcherView {
        LanguageSwitcherView::build(self.language.current(), &self.i18n)
    }

    /// Click handler: switch to the other language and return it.
    pub fn toggle(&self) -> Language {
        let next = self.language.current().toggled();
        self.language.set(next);
        next
    }
}
