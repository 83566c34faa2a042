//! Browser renditions of the POS components.
//!
//! Provider state lives in Leptos signals here; the markup is produced from
//! the same view builders the native host uses.

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use leptos::*;

use forgepos_auth::CurrentUser;
use forgepos_i18n::{Catalog, Language, Localized};
use forgepos_products::Product;

use crate::Callback as UiCallback;
use crate::{Bootstrap, ThemeMode};
use crate::components::{
    CardInteraction, HeaderView, LanguageSwitcherView, ProductCardView, ProductGridView,
    ThemeToggleView,
};

/// Provider state shared through Leptos context.
#[derive(Clone)]
pub struct Shell {
    pub catalog: Arc<Catalog>,
    pub language: RwSignal<Language>,
    pub theme: RwSignal<ThemeMode>,
    pub user: RwSignal<Option<CurrentUser>>,
}

impl Shell {
    fn localized<R>(&self, f: impl FnOnce(&Localized<'_>) -> R) -> R {
        let t = Localized::new(&self.catalog, self.language.get());
        f(&t)
    }
}

/// Main application component, seeded with the page's products and user.
#[component]
pub fn App(#[prop(optional)] bootstrap: Bootstrap) -> impl IntoView {
    let shell = Shell {
        catalog: Arc::new(Catalog::builtin()),
        language: create_rw_signal(Language::En),
        theme: create_rw_signal(ThemeMode::Light),
        user: create_rw_signal(bootstrap.user.clone()),
    };
    provide_context(shell.clone());

    // Keep the document root in sync with language and theme.
    create_effect(move |_| {
        let language = shell.language.get();
        let theme = shell.theme.get();
        if let Some(root) = document().document_element() {
            let _ = root.set_attribute("lang", language.code());
            let _ = root.set_attribute("dir", language.direction().as_str());
            let _ = root.set_attribute("class", theme.root_class().unwrap_or(""));
        }
    });

    let products = create_rw_signal(bootstrap.shared_products());
    let cart = create_rw_signal(Vec::<Arc<Product>>::new());

    view! {
        <div class="pos">
            <Header on_menu=move |_: ()| logging::log!("menu requested")/>
            <main>
                <ThemeToggle/>
                <p class="cart-count">{move || cart.with(Vec::len)}</p>
                <ProductGrid
                    products=products
                    on_add_to_cart=move |product: Arc<Product>| cart.update(|items| items.push(product))
                />
            </main>
        </div>
    }
}

#[component]
pub fn Header(
    #[prop(into)] on_menu: Callback<()>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(default = true)] show_actions: bool,
) -> impl IntoView {
    let shell = expect_context::<Shell>();

    let (now, set_now) = create_signal(Local::now());
    match set_interval_with_handle(move || set_now.set(Local::now()), Duration::from_secs(1)) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => logging::error!("failed to start header clock: {e:?}"),
    }

    let header = create_memo(move |_| {
        let user = shell.user.get();
        shell.localized(|t| {
            HeaderView::build(title.as_deref(), show_actions, t, user.as_ref(), &now.get())
        })
    });

    view! {
        <header class="pos-header" dir=move || header.with(|h| h.direction.as_str())>
            <button
                class="menu"
                aria-label=move || header.with(|h| h.menu_label.clone())
                on:click=move |_| on_menu.call(())
            >
                "☰"
            </button>
            <h1>{move || header.with(|h| h.title.clone())}</h1>
            <time>{move || header.with(|h| h.clock.clone())}</time>
            {move || {
                header
                    .with(|h| h.actions.as_ref().map(|a| a.user.clone()))
                    .map(|user| {
                        view! {
                            <div class="actions">
                                <LanguageSwitcher/>
                                <div class="user-badge">
                                    <span class="name">{user.name}</span>
                                    {user.role.map(|role| view! { <span class="role">{role}</span> })}
                                </div>
                            </div>
                        }
                    })
            }}
        </header>
    }
}

#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let shell = expect_context::<Shell>();
    let language = shell.language;
    let switcher = create_memo(move |_| {
        shell.localized(|t| LanguageSwitcherView::build(language.get(), t))
    });

    view! {
        <button
            class="language-switcher"
            aria-label=move || switcher.with(|s| s.aria_label.clone())
            on:click=move |_| language.update(|lang| *lang = lang.toggled())
        >
            <span class=move || switcher.with(|s| s.icon_spacing.css_class())>"🌐"</span>
            {move || switcher.with(|s| s.label.clone())}
        </button>
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let shell = expect_context::<Shell>();
    let theme = shell.theme;
    let toggle = create_memo(move |_| shell.localized(|t| ThemeToggleView::build(theme.get(), t)));

    view! {
        <button
            class="theme-toggle"
            aria-label=move || toggle.with(|v| v.aria_label.clone())
            on:click=move |_| theme.update(|mode| *mode = mode.toggled())
        >
            {move || toggle.with(|v| v.glyph)}
        </button>
    }
}

#[component]
pub fn ProductGrid(
    #[prop(into)] products: Signal<Vec<Arc<Product>>>,
    #[prop(into)] on_add_to_cart: Callback<Arc<Product>>,
) -> impl IntoView {
    let shell = expect_context::<Shell>();
    let on_add = UiCallback::new(move |product: Arc<Product>| on_add_to_cart.call(product));

    view! {
        <div class="product-grid">
            {move || {
                let cards = products.with(|products| {
                    shell.localized(|t| ProductGridView::build(products, &on_add, t))
                });
                cards
                    .cards
                    .into_iter()
                    .map(|card| view! { <ProductCard card=card/> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn ProductCard(card: ProductCardView) -> impl IntoView {
    let (interaction, set_interaction) = create_signal(CardInteraction::Idle);
    let badge = card.low_stock_badge.clone();
    let stored = store_value(card.clone());

    view! {
        <div
            class="product-card"
            tabindex="0"
            on:mouseenter=move |_| set_interaction.set(CardInteraction::Hovered)
            on:mouseleave=move |_| set_interaction.set(CardInteraction::Idle)
            on:focusin=move |_| set_interaction.set(CardInteraction::Focused)
            on:focusout=move |_| set_interaction.set(CardInteraction::Idle)
        >
            <img src=card.image.clone() alt=card.name.clone()/>
            <div class="meta">
                <span class="sku">{card.sku.clone()}</span>
                <span class="stock">{format!("{}: {}", card.stock_label, card.stock)}</span>
            </div>
            {badge.map(|text| view! { <span class="badge low-stock">{text}</span> })}
            <h3 class="name" style=format!("-webkit-line-clamp: {}", card.name_max_lines)>
                {card.name.clone()}
            </h3>
            <div class="footer">
                <span class="price">{card.price.clone()}</span>
                <span class="category">{card.category.clone()}</span>
            </div>
            <button
                class=move || stored.with_value(|c| c.add_emphasis(interaction.get()).css_class())
                aria-label=card.add_label.clone()
                on:click=move |_| stored.with_value(|c| c.activate_add())
            >
                "+"
            </button>
        </div>
    }
}
