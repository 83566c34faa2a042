//! The four POS components.
//!
//! Every component has a pure `*View::build` function (props + provider
//! snapshots in, view struct out) and, on the native host, a handle that
//! reads providers from a [`UiContext`](crate::UiContext) and routes events.

pub mod header;
pub mod language_switcher;
pub mod product_grid;
pub mod theme_toggle;

#[cfg(not(target_arch = "wasm32"))]
pub use header::{Header, HeaderProps};
pub use header::{HeaderActionsView, HeaderView, UserBadgeView, format_clock};
pub use language_switcher::{IconSpacing, LanguageSwitcher, LanguageSwitcherView};
pub use product_grid::{
    CardInteraction, Emphasis, NAME_MAX_LINES, ProductCardView, ProductGrid, ProductGridView,
};
pub use theme_toggle::{ThemeToggle, ThemeToggleView};
