//! Domain model definitions.

pub mod shipping_charge;

pub use shipping_charge::ShippingCharge;
