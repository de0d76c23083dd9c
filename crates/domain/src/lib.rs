//! Domain models for the Storefront Admin backend.
//!
//! Contains the shipping charge model, its request/response payloads, and
//! the pure pricing computations. No I/O happens in this crate.

pub mod models;
