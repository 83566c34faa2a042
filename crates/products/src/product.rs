use serde::{Deserialize, Serialize};

use forgepos_core::{Entity, ProductId};

use crate::Price;

/// Stock level at or below which a product is flagged in the grid.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Catalog product as seen by the POS layer (read-only snapshot).
///
/// `stock` is carried exactly as the catalog reports it: negative counts are
/// kept, and an absent count stays `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    sku: String,
    price: Price,
    #[serde(default)]
    stock: Option<i64>,
    #[serde(default)]
    category: String,
    #[serde(default)]
    image: String,
}

impl Product {
    pub fn new(id: ProductId, sku: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            sku: sku.into(),
            price: Price::ZERO,
            stock: None,
            category: String::new(),
            image: String::new(),
        }
    }

    pub fn with_price(mut self, price: Price) -> Self {
        self.price = price;
        self
    }

    pub fn with_stock(mut self, stock: i64) -> Self {
        self.stock = Some(stock);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn stock(&self) -> Option<i64> {
        self.stock
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    /// True when the reported stock is at or below [`LOW_STOCK_THRESHOLD`].
    ///
    /// A product without a stock figure is never flagged.
    pub fn is_low_stock(&self) -> bool {
        matches!(self.stock, Some(stock) if stock <= LOW_STOCK_THRESHOLD)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: i64) -> Product {
        Product::new(ProductId::new(), "SKU-1", "Espresso").with_stock(stock)
    }

    #[test]
    fn threshold_is_inclusive() {
        assert!(product(10).is_low_stock());
        assert!(product(0).is_low_stock());
        assert!(!product(11).is_low_stock());
    }

    #[test]
    fn negative_stock_is_kept_and_flagged() {
        let p = product(-3);
        assert_eq!(p.stock(), Some(-3));
        assert!(p.is_low_stock());
    }

    #[test]
    fn missing_stock_is_never_low() {
        let p = Product::new(ProductId::new(), "SKU-2", "Latte");
        assert_eq!(p.stock(), None);
        assert!(!p.is_low_stock());
    }

    #[test]
    fn deserializes_catalog_json() {
        let json = r#"{
            "id": "0190c5a2-7b4e-7000-8000-000000000001",
            "name": "Croissant",
            "sku": "BAK-001",
            "price": 2.5,
            "stock": 4,
            "category": "Bakery",
            "image": "/img/croissant.png"
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.name(), "Croissant");
        assert_eq!(p.price().to_string(), "$2.50");
        assert_eq!(p.stock(), Some(4));
        assert_eq!(p.category(), "Bakery");
        assert_eq!(p.image(), "/img/croissant.png");
        assert_eq!(p.id().to_string(), "0190c5a2-7b4e-7000-8000-000000000001");
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let json = r#"{
            "id": "0190c5a2-7b4e-7000-8000-000000000002",
            "name": "Water",
            "sku": "BEV-010",
            "price": 1
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.stock(), None);
        assert_eq!(p.category(), "");
        assert_eq!(p.image(), "");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the badge flag is exactly `stock <= 10`.
            #[test]
            fn low_stock_flag_matches_threshold(stock in -1_000i64..1_000) {
                prop_assert_eq!(product(stock).is_low_stock(), stock <= LOW_STOCK_THRESHOLD);
            }
        }
    }
}
