use std::sync::Arc;

use forgepos_i18n::Translator;
use forgepos_products::Product;

use crate::{Callback, I18n, UiContext};

/// Product names are clamped to this many lines on a card.
pub const NAME_MAX_LINES: u8 = 2;

/// Pointer state of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardInteraction {
    #[default]
    Idle,
    Hovered,
    Focused,
}

/// How prominently the add-to-cart button is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Muted,
    Emphasized,
}

impl Emphasis {
    pub fn css_class(&self) -> &'static str {
        match self {
            Emphasis::Muted => "add-to-cart muted",
            Emphasis::Emphasized => "add-to-cart emphasized",
        }
    }
}

/// One card of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCardView {
    product: Arc<Product>,
    on_add: Callback<Arc<Product>>,
    pub image: String,
    pub sku: String,
    /// Stock exactly as reported; empty when the catalog has no figure.
    pub stock: String,
    pub stock_label: String,
    pub name: String,
    pub name_max_lines: u8,
    pub price: String,
    pub category: String,
    pub low_stock_badge: Option<String>,
    pub add_label: String,
}

impl ProductCardView {
    pub fn build(
        product: &Arc<Product>,
        on_add: &Callback<Arc<Product>>,
        t: &dyn Translator,
    ) -> Self {
        Self {
            product: Arc::clone(product),
            on_add: on_add.clone(),
            image: product.image().to_owned(),
            sku: product.sku().to_owned(),
            stock: product.stock().map(|s| s.to_string()).unwrap_or_default(),
            stock_label: t.t("cart.stock"),
            name: product.name().to_owned(),
            name_max_lines: NAME_MAX_LINES,
            price: product.price().to_string(),
            category: product.category().to_owned(),
            low_stock_badge: product.is_low_stock().then(|| t.t("cart.low.stock")),
            add_label: t.t("cart.add"),
        }
    }

    pub fn product(&self) -> &Arc<Product> {
        &self.product
    }

    /// The add button stays muted until the card is hovered or focused.
    pub fn add_emphasis(&self, interaction: CardInteraction) -> Emphasis {
        match interaction {
            CardInteraction::Idle => Emphasis::Muted,
            CardInteraction::Hovered | CardInteraction::Focused => Emphasis::Emphasized,
        }
    }

    /// Add-to-cart click: hands the card's own product to the callback.
    pub fn activate_add(&self) {
        tracing::debug!(product_id = %self.product.id_typed(), sku = %self.product.sku(), "add to cart");
        self.on_add.call(Arc::clone(&self.product));
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductGridView {
    pub cards: Vec<ProductCardView>,
}

impl ProductGridView {
    /// One card per product, in caller order.
    pub fn build(
        products: &[Arc<Product>],
        on_add: &Callback<Arc<Product>>,
        t: &dyn Translator,
    ) -> Self {
        Self {
            cards: products
                .iter()
                .map(|product| ProductCardView::build(product, on_add, t))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }
}

/// Grid of product cards with an add-to-cart affordance per card.
#[derive(Debug, Clone)]
pub struct ProductGrid {
    products: Vec<Arc<Product>>,
    on_add_to_cart: Callback<Arc<Product>>,
    i18n: I18n,
}

impl ProductGrid {
    pub fn new(
        ctx: &UiContext,
        products: Vec<Arc<Product>>,
        on_add_to_cart: Callback<Arc<Product>>,
    ) -> Self {
        Self {
            products,
            on_add_to_cart,
            i18n: ctx.i18n.clone(),
        }
    }

    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    pub fn render(&self) -> ProductGridView {
        ProductGridView::build(&self.products, &self.on_add_to_cart, &self.i18n)
    }
}
