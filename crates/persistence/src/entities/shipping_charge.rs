//! Shipping charge entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::ShippingCharge;

/// Database row mapping for the shipping_charges table.
#[derive(Debug, Clone, FromRow)]
pub struct ShippingChargeEntity {
    pub id: i64,
    pub charge_id: Uuid,
    pub country: String,
    pub region: Option<String>,
    pub delivery_charge: f64,
    pub return_charge: f64,
    pub estimated_days: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ShippingChargeEntity> for ShippingCharge {
    fn from(entity: ShippingChargeEntity) -> Self {
        Self {
            id: entity.id,
            charge_id: entity.charge_id,
            country: entity.country,
            region: entity.region,
            delivery_charge: entity.delivery_charge,
            return_charge: entity.return_charge,
            estimated_days: entity.estimated_days,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
