//! Shared utilities and common types for the Storefront Admin backend.
//!
//! This crate provides common functionality used across all other crates:
//! - Location text normalization (country/region canonical form)
//! - Common validation logic

pub mod normalize;
pub mod validation;
