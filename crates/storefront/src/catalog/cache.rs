//! Cache types for the product and review lists.

use std::sync::Arc;

use crate::models::{Product, Review};

/// Cache key for the two listings.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum CacheKey {
    Products,
    Reviews,
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Products(Arc<Vec<Product>>),
    Reviews(Arc<Vec<Review>>),
}
