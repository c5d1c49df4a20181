//! Eblen Core - Shared domain library.
//!
//! This crate provides the types and pure logic used by every Eblen Sushi
//! component:
//! - `storefront` - The public single-page site
//! - `cli` - Migrations and catalog seeding
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! database access, no HTTP. Database encoding for the newtypes is available
//! behind the `postgres` feature.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, star ratings and ruble prices
//! - [`reviews`] - Review sampling for display and review intake validation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod reviews;
pub mod types;

pub use reviews::{FEATURED_REVIEW_COUNT, Rejected, ValidReview, sample, sample_with, validate};
pub use types::*;
