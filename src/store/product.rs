//! Product variant
//!
//! Records are `{id, name, category, description, price, stock}`.
//! Create checks the three strings and `price` for truthiness (so
//! `price: 0` is rejected) but `stock` only for presence (so
//! `stock: 0` is accepted). Patch application keeps the same split:
//! falsy strings and a zero price are silently ignored, a present
//! `stock` always lands.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{StoreError, StoreResult};
use super::fields::{coerce_number, supplied, trimmed_str, truthy, Supply};
use super::profile::Profile;

/// A product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: f64,
    pub stock: f64,
}

/// Derived product statistics.
///
/// `avg_price` is `round(total_value / total_stock)`; with zero stock
/// the division yields NaN or infinity, which serializes as JSON null.
/// `categories` keeps first-seen order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductStats {
    pub total_products: usize,
    pub total_stock: f64,
    pub total_value: f64,
    pub categories: Vec<String>,
    pub avg_price: f64,
}

/// The product deployment variant.
pub struct ProductProfile;

impl Profile for ProductProfile {
    type Record = Product;
    type Stats = ProductStats;

    const NAME: &'static str = "product";
    const COLLECTION: &'static str = "products";

    fn create(id: String, body: &Value) -> StoreResult<Product> {
        let name = body.get("name");
        let category = body.get("category");
        let description = body.get("description");
        let price = body.get("price");
        let stock = body.get("stock");

        if !supplied(name, Supply::Truthy)
            || !supplied(category, Supply::Truthy)
            || !supplied(description, Supply::Truthy)
            || !supplied(price, Supply::Truthy)
            || !supplied(stock, Supply::Present)
        {
            return Err(StoreError::invalid("all fields are required"));
        }

        Ok(Product {
            id,
            name: trimmed_str("name", name.unwrap_or(&Value::Null))?,
            category: trimmed_str("category", category.unwrap_or(&Value::Null))?,
            description: trimmed_str("description", description.unwrap_or(&Value::Null))?,
            price: coerce_number(price.unwrap_or(&Value::Null)),
            stock: coerce_number(stock.unwrap_or(&Value::Null)),
        })
    }

    fn apply_patch(product: &mut Product, body: &Value) -> StoreResult<()> {
        let name = body.get("name");
        let category = body.get("category");
        let description = body.get("description");
        let price = body.get("price");
        let stock = body.get("stock");

        // The gate goes by presence; the per-field rules below do not.
        if name.is_none()
            && category.is_none()
            && description.is_none()
            && price.is_none()
            && stock.is_none()
        {
            return Err(StoreError::invalid("nothing to update"));
        }

        if let Some(value) = name {
            if truthy(value) {
                product.name = trimmed_str("name", value)?;
            }
        }
        if let Some(value) = category {
            if truthy(value) {
                product.category = trimmed_str("category", value)?;
            }
        }
        if let Some(value) = description {
            if truthy(value) {
                product.description = trimmed_str("description", value)?;
            }
        }
        if let Some(value) = price {
            if truthy(value) {
                product.price = coerce_number(value);
            }
        }
        if let Some(value) = stock {
            product.stock = coerce_number(value);
        }
        Ok(())
    }

    fn id(product: &Product) -> &str {
        &product.id
    }

    fn matches(product: &Product, needle: &str) -> bool {
        product.name.to_lowercase().contains(needle)
            || product.category.to_lowercase().contains(needle)
            || product.description.to_lowercase().contains(needle)
    }

    fn stats(records: &[Product]) -> ProductStats {
        let total_stock: f64 = records.iter().map(|p| p.stock).sum();
        let total_value: f64 = records.iter().map(|p| p.price * p.stock).sum();

        let mut categories: Vec<String> = Vec::new();
        for product in records {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }

        ProductStats {
            total_products: records.len(),
            total_stock,
            total_value,
            categories,
            // Unguarded division: zero stock yields NaN or infinity.
            avg_price: (total_value / total_stock).round(),
        }
    }
}
