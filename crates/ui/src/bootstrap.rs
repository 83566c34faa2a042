//! Initial data handed to a host by the page that embeds it.
//!
//! The browser host reads it from
//! `<script id="forgepos-bootstrap" type="application/json">`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use forgepos_auth::CurrentUser;
use forgepos_products::Product;

use crate::UiResult;

/// DOM id of the script element carrying the payload.
pub const BOOTSTRAP_ELEMENT_ID: &str = "forgepos-bootstrap";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Bootstrap {
    /// Catalog products, in display order.
    pub products: Vec<Product>,
    /// Signed-in user, if the page already knows one.
    pub user: Option<CurrentUser>,
}

impl Bootstrap {
    pub fn from_json(json: &str) -> UiResult<Self> {
        let bootstrap: Bootstrap = serde_json::from_str(json)?;
        tracing::debug!(
            products = bootstrap.products.len(),
            signed_in = bootstrap.user.is_some(),
            "bootstrap payload loaded"
        );
        Ok(bootstrap)
    }

    /// Products wrapped for sharing with the grid.
    pub fn shared_products(&self) -> Vec<Arc<Product>> {
        self.products.iter().cloned().map(Arc::new).collect()
    }
}
