use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use forgepos_auth::{AuthState, CurrentUser, Role};
use forgepos_core::ProductId;
use forgepos_i18n::{Catalog, Language};
use forgepos_products::{Price, Product};
use forgepos_ui::components::{
    Header, HeaderProps, LanguageSwitcher, ProductGrid, ThemeToggle, format_clock,
};
use forgepos_ui::{Callback, ThemeMode, UiConfig, UiContext};

struct TestShell {
    ctx: UiContext,
    auth: Arc<AuthState>,
}

impl TestShell {
    fn new(config: UiConfig) -> Self {
        forgepos_observability::init_with_default("debug");
        let auth = Arc::new(AuthState::new());
        let ctx = UiContext::new(config, Catalog::builtin(), auth.clone());
        Self { ctx, auth }
    }
}

fn catalog_json() -> &'static str {
    r#"[
        {"id": "0190c5a2-7b4e-7000-8000-000000000001", "name": "Flat White", "sku": "COF-002",
         "price": 19.5, "stock": 42, "category": "Coffee", "image": "/img/flat-white.png"},
        {"id": "0190c5a2-7b4e-7000-8000-000000000002", "name": "Blueberry Muffin", "sku": "BAK-010",
         "price": 3.25, "stock": 10, "category": "Bakery", "image": "/img/muffin.png"},
        {"id": "0190c5a2-7b4e-7000-8000-000000000003", "name": "Sparkling Water", "sku": "BEV-001",
         "price": 1, "stock": -2, "category": "Drinks", "image": "/img/water.png"}
    ]"#
}

fn load_products() -> anyhow::Result<Vec<Arc<Product>>> {
    let products: Vec<Product> = serde_json::from_str(catalog_json())?;
    Ok(products.into_iter().map(Arc::new).collect())
}

#[test]
fn grid_renders_catalog_and_routes_add_to_cart() -> anyhow::Result<()> {
    let shell = TestShell::new(UiConfig::default());
    let products = load_products()?;

    let cart: Rc<RefCell<Vec<Arc<Product>>>> = Rc::default();
    let sink = Rc::clone(&cart);
    let grid = ProductGrid::new(
        &shell.ctx,
        products.clone(),
        Callback::new(move |p: Arc<Product>| sink.borrow_mut().push(p)),
    );

    let view = grid.render();
    assert_eq!(view.len(), 3);
    assert_eq!(view.cards[0].price, "$19.50");
    assert_eq!(view.cards[0].low_stock_badge, None);
    assert_eq!(view.cards[1].low_stock_badge.as_deref(), Some("Low stock"));
    assert_eq!(view.cards[2].stock, "-2");
    assert_eq!(view.cards[2].low_stock_badge.as_deref(), Some("Low stock"));

    view.cards[1].activate_add();
    view.cards[0].activate_add();

    let cart = cart.borrow();
    assert_eq!(cart.len(), 2);
    assert!(Arc::ptr_eq(&cart[0], &products[1]));
    assert!(Arc::ptr_eq(&cart[1], &products[0]));
    Ok(())
}

#[test]
fn grid_labels_follow_the_language_switcher() -> anyhow::Result<()> {
    let shell = TestShell::new(UiConfig::default());
    let grid = ProductGrid::new(&shell.ctx, load_products()?, Callback::noop());
    let switcher = LanguageSwitcher::new(&shell.ctx);

    assert_eq!(switcher.toggle(), Language::Ar);
    let view = grid.render();
    assert_eq!(view.cards[1].low_stock_badge.as_deref(), Some("مخزون منخفض"));
    assert_eq!(switcher.render().label, "English");

    assert_eq!(switcher.toggle(), Language::En);
    assert_eq!(grid.render().cards[1].low_stock_badge.as_deref(), Some("Low stock"));
    Ok(())
}

#[test]
fn theme_toggle_round_trip() {
    let shell = TestShell::new(UiConfig::default());
    let toggle = ThemeToggle::new(&shell.ctx);

    assert_eq!(toggle.render().glyph, "🌙");
    assert_eq!(toggle.toggle(), ThemeMode::Dark);
    assert_eq!(toggle.render().glyph, "☀️");
    assert_eq!(toggle.toggle(), ThemeMode::Light);
    assert_eq!(shell.ctx.theme.current(), ThemeMode::Light);
}

#[test]
fn header_cannot_mount_without_runtime() {
    let shell = TestShell::new(UiConfig::default());
    let result = Header::mount(HeaderProps::new(Callback::noop()), &shell.ctx);
    assert!(matches!(result, Err(forgepos_ui::UiError::NoRuntime)));
}

#[tokio::test(start_paused = true)]
async fn header_shows_user_and_reacts_to_sign_in() -> anyhow::Result<()> {
    let shell = TestShell::new(UiConfig::default());
    let menu_clicks = Rc::new(Cell::new(0));
    let clicks = Rc::clone(&menu_clicks);
    let header = Header::mount(
        HeaderProps::new(Callback::new(move |_: ()| clicks.set(clicks.get() + 1))),
        &shell.ctx,
    )?;

    let view = header.render();
    assert_eq!(view.title, "Point of Sale");
    let actions = view.actions.expect("actions visible by default");
    assert_eq!(actions.user.name, "Cashier");
    assert_eq!(actions.user.role, None);
    assert_eq!(actions.language_switcher.target, Language::Ar);

    shell.auth.sign_in(CurrentUser::new("Alice", Role::MANAGER));
    let user = header.render().actions.expect("actions visible").user;
    assert_eq!(user.name, "Alice");
    assert_eq!(user.role.as_deref(), Some("manager"));

    header.request_menu();
    assert_eq!(menu_clicks.get(), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn header_hides_actions_on_request() -> anyhow::Result<()> {
    let shell = TestShell::new(UiConfig::default());
    let header = Header::mount(
        HeaderProps::new(Callback::noop())
            .with_title("Till 3")
            .with_actions(false),
        &shell.ctx,
    )?;

    let view = header.render();
    assert_eq!(view.title, "Till 3");
    assert!(view.actions.is_none());
    assert!(header.language_switcher().is_none());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn header_switcher_flips_the_whole_header_to_rtl() -> anyhow::Result<()> {
    let shell = TestShell::new(UiConfig::default());
    let header = Header::mount(HeaderProps::new(Callback::noop()), &shell.ctx)?;

    let switcher = header.language_switcher().expect("actions visible");
    switcher.toggle();

    let view = header.render();
    assert_eq!(view.title, "نقطة البيع");
    assert_eq!(view.direction.as_str(), "rtl");
    assert_eq!(view.actions.expect("actions visible").user.name, "أمين الصندوق");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn header_clock_ticks_while_mounted_and_stops_after_unmount() -> anyhow::Result<()> {
    let shell = TestShell::new(UiConfig::default());
    let header = Header::mount(HeaderProps::new(Callback::noop()), &shell.ctx)?;
    let mut ticks = header.clock().subscribe();

    for expected in 1..=5 {
        tokio::time::timeout(Duration::from_millis(1_001), ticks.changed()).await??;
        let reading = *ticks.borrow_and_update();
        assert_eq!(reading.ticks, expected);
        assert_eq!(header.render().clock, format_clock(&reading.now, Language::En));
    }

    drop(header);
    let after = tokio::time::timeout(Duration::from_secs(30), ticks.changed()).await?;
    assert!(after.is_err(), "no clock update may follow unmount");
    assert_eq!(ticks.borrow().ticks, 5);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn configured_clock_period_is_respected() -> anyhow::Result<()> {
    let config = UiConfig {
        clock_period_ms: 250,
        ..UiConfig::default()
    };
    let shell = TestShell::new(config);
    let header = Header::mount(HeaderProps::new(Callback::noop()), &shell.ctx)?;
    let mut ticks = header.clock().subscribe();

    tokio::time::sleep(Duration::from_millis(1_100)).await;
    assert!(ticks.has_changed()?);
    assert_eq!(ticks.borrow_and_update().ticks, 4);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn header_clock_text_follows_latest_reading_and_language() -> anyhow::Result<()> {
    let shell = TestShell::new(UiConfig::default());
    let header = Header::mount(HeaderProps::new(Callback::noop()), &shell.ctx)?;
    let mut ticks = header.clock().subscribe();

    tokio::time::timeout(Duration::from_millis(1_001), ticks.changed()).await??;
    assert_eq!(
        header.render().clock,
        format_clock(&header.clock().now(), Language::En)
    );

    shell.ctx.language.set(Language::Ar);
    assert_eq!(
        header.render().clock,
        format_clock(&header.clock().now(), Language::Ar)
    );
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn header_refuses_a_clock_slower_than_one_second() {
    let shell = TestShell::new(UiConfig {
        clock_period_ms: 5_000,
        ..UiConfig::default()
    });
    let result = Header::mount(HeaderProps::new(Callback::noop()), &shell.ctx);
    assert!(matches!(result, Err(forgepos_ui::UiError::Config(_))));
}

#[test]
fn context_from_config_rejects_a_slow_clock() {
    let config = UiConfig {
        clock_period_ms: 5_000,
        ..UiConfig::default()
    };
    let result = UiContext::from_config(config, Arc::new(AuthState::new()));
    assert!(matches!(result, Err(forgepos_ui::UiError::Config(_))));
}

mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_language() -> impl Strategy<Value = Language> {
        prop_oneof![Just(Language::En), Just(Language::Ar)]
    }

    fn arb_theme() -> impl Strategy<Value = ThemeMode> {
        prop_oneof![Just(ThemeMode::Light), Just(ThemeMode::Dark)]
    }

    proptest! {
        /// Property: two clicks on the language switcher restore the start language.
        #[test]
        fn language_double_toggle_is_identity(start in arb_language()) {
            let shell = TestShell::new(UiConfig { language: start, ..UiConfig::default() });
            let switcher = LanguageSwitcher::new(&shell.ctx);
            let before = switcher.render();
            switcher.toggle();
            switcher.toggle();
            prop_assert_eq!(switcher.render(), before);
        }

        /// Property: two clicks on the theme toggle restore the start theme.
        #[test]
        fn theme_double_toggle_is_identity(start in arb_theme()) {
            let shell = TestShell::new(UiConfig { theme: start, ..UiConfig::default() });
            let toggle = ThemeToggle::new(&shell.ctx);
            let before = toggle.render();
            toggle.toggle();
            toggle.toggle();
            prop_assert_eq!(toggle.render(), before);
        }

        /// Property: the badge shows exactly for stock at or below ten, and
        /// the add button hands back the identical product.
        #[test]
        fn cards_flag_low_stock_and_preserve_identity(
            stocks in proptest::collection::vec(-50i64..200, 0..20),
            price in 0.0f64..10_000.0,
        ) {
            let shell = TestShell::new(UiConfig::default());
            let products: Vec<Arc<Product>> = stocks
                .iter()
                .map(|&stock| {
                    Arc::new(
                        Product::new(ProductId::new(), "SKU", "Item")
                            .with_price(Price::new(price).unwrap())
                            .with_stock(stock),
                    )
                })
                .collect();

            let seen: Rc<RefCell<Vec<Arc<Product>>>> = Rc::default();
            let sink = Rc::clone(&seen);
            let grid = ProductGrid::new(
                &shell.ctx,
                products.clone(),
                Callback::new(move |p: Arc<Product>| sink.borrow_mut().push(p)),
            );
            let view = grid.render();
            prop_assert_eq!(view.len(), products.len());

            for (i, card) in view.cards.iter().enumerate() {
                prop_assert_eq!(card.low_stock_badge.is_some(), stocks[i] <= 10);
                card.activate_add();
                let seen = seen.borrow();
                prop_assert_eq!(seen.len(), i + 1);
                prop_assert!(Arc::ptr_eq(&seen[i], &products[i]));
            }
        }
    }
}
