//! Catalog product types.

use serde::{Deserialize, Serialize};

use eblen_core::{ProductId, Rubles};

/// A catalog item.
///
/// Read-only from the site's perspective; the catalog is maintained outside
/// the storefront (see `eblen seed`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Product {
    /// Unique ID, also the display order.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Absolute image URL, if the item has a photo.
    pub image_url: Option<String>,
    /// Portion weight in grams.
    pub weight_grams: i32,
    /// Ingredients line.
    pub composition: String,
    /// Price in whole rubles.
    pub price_rub: Rubles,
}

/// A catalog item to insert, as read from a seed file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub weight_grams: i32,
    pub composition: String,
    pub price_rub: Rubles,
}
