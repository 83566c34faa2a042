use chrono::{DateTime, Local, Locale};

use forgepos_auth::CurrentUser;
use forgepos_i18n::{Language, TextDirection, Translator};

use super::language_switcher::LanguageSwitcherView;

#[cfg(not(target_arch = "wasm32"))]
pub use mounted::{Header, HeaderProps};

const CLOCK_FORMAT: &str = "%A, %d %B %Y %H:%M:%S";

fn chrono_locale(language: Language) -> Locale {
    match language {
        Language::En => Locale::en_US,
        Language::Ar => Locale::ar_SA,
    }
}

/// Date and time as shown in the header, with day and month names in
/// `language`.
pub fn format_clock(now: &DateTime<Local>, language: Language) -> String {
    now.format_localized(CLOCK_FORMAT, chrono_locale(language))
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserBadgeView {
    pub name: String,
    /// `None` when nobody is signed in.
    pub role: Option<String>,
}

impl UserBadgeView {
    pub fn build(user: Option<&CurrentUser>, t: &dyn Translator) -> Self {
        match user {
            Some(user) => Self {
                name: user.name.clone(),
                role: Some(user.role.to_string()),
            },
            None => Self {
                name: t.t("header.cashier"),
                role: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderActionsView {
    pub language_switcher: LanguageSwitcherView,
    pub user: UserBadgeView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub title: String,
    pub clock: String,
    pub direction: TextDirection,
    pub menu_label: String,
    /// Language switcher and user badge; absent when hidden by props.
    pub actions: Option<HeaderActionsView>,
}

impl HeaderView {
    pub fn build(
        title: Option<&str>,
        show_actions: bool,
        t: &dyn Translator,
        user: Option<&CurrentUser>,
        now: &DateTime<Local>,
    ) -> Self {
        let language = t.language();
        let actions = show_actions.then(|| HeaderActionsView {
            language_switcher: LanguageSwitcherView::build(language, t),
            user: UserBadgeView::build(user, t),
        });

        Self {
            title: title.map_or_else(|| t.t("header.title"), str::to_owned),
            clock: format_clock(now, language),
            direction: language.direction(),
            menu_label: t.t("header.menu"),
            actions,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod mounted {
    use crate::components::LanguageSwitcher;
    use crate::{Callback, Clock, UiContext, UiResult};

    use super::HeaderView;

    /// Header inputs.
    #[derive(Debug, Clone)]
    pub struct HeaderProps {
        pub on_menu: Callback<()>,
        /// Replaces the translated default title.
        pub title: Option<String>,
        pub show_actions: bool,
    }

    impl HeaderProps {
        pub fn new(on_menu: Callback<()>) -> Self {
            Self {
                on_menu,
                title: None,
                show_actions: true,
            }
        }

        pub fn with_title(mut self, title: impl Into<String>) -> Self {
            self.title = Some(title.into());
            self
        }

        pub fn with_actions(mut self, show_actions: bool) -> Self {
            self.show_actions = show_actions;
            self
        }
    }

    /// A mounted header. Owns the clock; dropping it unmounts the header and
    /// stops the clock.
    #[derive(Debug)]
    pub struct Header {
        props: HeaderProps,
        ctx: UiContext,
        clock: Clock,
    }

    impl Header {
        pub fn mount(props: HeaderProps, ctx: &UiContext) -> UiResult<Self> {
            let clock = Clock::start(ctx.config.clock_period())?;
            tracing::debug!(show_actions = props.show_actions, "header mounted");
            Ok(Self {
                props,
                ctx: ctx.clone(),
                clock,
            })
        }

        pub fn render(&self) -> HeaderView {
            let user = self.ctx.current_user();
            HeaderView::build(
                self.props.title.as_deref(),
                self.props.show_actions,
                &self.ctx.i18n,
                user.as_ref(),
                &self.clock.now(),
            )
        }

        /// Menu button click.
        pub fn request_menu(&self) {
            tracing::debug!("menu requested");
            self.props.on_menu.call(());
        }

        /// The hosted switcher, or `None` when the action cluster is hidden.
        pub fn language_switcher(&self) -> Option<LanguageSwitcher> {
            self.props
                .show_actions
                .then(|| LanguageSwitcher::new(&self.ctx))
        }

        pub fn clock(&self) -> &Clock {
            &self.clock
        }
    }

    impl Drop for Header {
        fn drop(&mut self) {
            tracing::debug!("header unmounted");
        }
    }
}
