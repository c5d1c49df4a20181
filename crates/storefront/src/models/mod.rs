//! Domain models for the storefront.
//!
//! Rows map straight onto these types through `sqlx::FromRow`; the newtypes
//! from `eblen_core` reject out-of-range values while decoding.

pub mod product;
pub mod review;

pub use product::{NewProduct, Product};
pub use review::Review;
