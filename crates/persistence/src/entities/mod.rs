//! Entity definitions (database row mappings).

pub mod shipping_charge;

pub use shipping_charge::ShippingChargeEntity;
