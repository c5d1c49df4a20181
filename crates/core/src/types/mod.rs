//! Core types for Eblen Sushi.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod stars;

pub use id::*;
pub use price::Rubles;
pub use stars::{Stars, StarsError};
