//! Products read model consumed by the POS grid.
//!
//! Products are created and owned by an external catalog; this crate only
//! describes their shape and the display rules derived from it (price
//! formatting, low-stock flag). Nothing here mutates or persists a product.

pub mod price;
pub mod product;

pub use price::Price;
pub use product::{LOW_STOCK_THRESHOLD, Product};
