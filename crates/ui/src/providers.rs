//! Shared UI state read by the components.
//!
//! Each provider is a `watch` cell: reads are synchronous snapshots, writes
//! notify subscribers so a host can schedule a re-render.

use std::sync::Arc;

use tokio::sync::watch;

use forgepos_auth::{AuthProvider, CurrentUser};
use forgepos_i18n::{Catalog, Language, Translator};

use crate::{ThemeMode, UiConfig, UiResult};

/// Owner of the active display language.
#[derive(Debug, Clone)]
pub struct LanguageProvider {
    state: Arc<watch::Sender<Language>>,
}

impl LanguageProvider {
    pub fn new(initial: Language) -> Self {
        Self {
            state: Arc::new(watch::Sender::new(initial)),
        }
    }

    pub fn current(&self) -> Language {
        *self.state.borrow()
    }

    pub fn set(&self, language: Language) {
        let previous = self.state.send_replace(language);
        if previous != language {
            tracing::info!(from = %previous, to = %language, "language changed");
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.state.subscribe()
    }
}

impl Default for LanguageProvider {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

/// Owner of the active color scheme.
#[derive(Debug, Clone)]
pub struct ThemeProvider {
    state: Arc<watch::Sender<ThemeMode>>,
}

impl ThemeProvider {
    pub fn new(initial: ThemeMode) -> Self {
        Self {
            state: Arc::new(watch::Sender::new(initial)),
        }
    }

    pub fn current(&self) -> ThemeMode {
        *self.state.borrow()
    }

    /// Flip between light and dark; returns the new mode.
    pub fn toggle(&self) -> ThemeMode {
        let mut next = ThemeMode::default();
        self.state.send_modify(|mode| {
            *mode = mode.toggled();
            next = *mode;
        });
        tracing::info!(theme = %next, "theme toggled");
        next
    }

    pub fn subscribe(&self) -> watch::Receiver<ThemeMode> {
        self.state.subscribe()
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

/// Translation provider bound to the live language.
#[derive(Debug, Clone)]
pub struct I18n {
    catalog: Arc<Catalog>,
    language: LanguageProvider,
}

impl I18n {
    pub fn new(catalog: Arc<Catalog>, language: LanguageProvider) -> Self {
        Self { catalog, language }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Translator for I18n {
    fn language(&self) -> Language {
        self.language.current()
    }

    fn t(&self, key: &str) -> String {
        self.catalog.lookup(self.language.current(), key).to_owned()
    }
}

/// Everything a component may read, handed to it at construction.
#[derive(Clone)]
pub struct UiContext {
    pub language: LanguageProvider,
    pub theme: ThemeProvider,
    pub i18n: I18n,
    pub auth: Arc<dyn AuthProvider>,
    pub config: UiConfig,
}

impl UiContext {
    pub fn new(config: UiConfig, catalog: Catalog, auth: Arc<dyn AuthProvider>) -> Self {
        let language = LanguageProvider::new(config.language);
        let theme = ThemeProvider::new(config.theme);
        let i18n = I18n::new(Arc::new(catalog), language.clone());
        Self {
            language,
            theme,
            i18n,
            auth,
            config,
        }
    }

    /// Build from configuration, merging the configured catalog file (if any)
    /// over the built-in strings.
    pub fn from_config(config: UiConfig, auth: Arc<dyn AuthProvider>) -> UiResult<Self> {
        config.validate()?;
        let catalog = match &config.catalog_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading translation catalog");
                Catalog::builtin().merge(Catalog::from_path(path)?)
            }
            None => Catalog::builtin(),
        };
        Ok(Self::new(config, catalog, auth))
    }

    pub fn current_user(&self) -> Option<CurrentUser> {
        self.auth.current_user()
    }
}

impl core::fmt::Debug for UiContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UiContext")
            .field("language", &self.language.current())
            .field("theme", &self.theme.current())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
