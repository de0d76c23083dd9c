//! HTTP route handlers.

pub mod health;
pub mod shipping_charges;
