//! Repository implementations.

pub mod shipping_charge;

pub use shipping_charge::ShippingChargeRepository;
