//! Shipping charge repository for database operations.
//!
//! All writes stamp `updated_at` explicitly in the SQL statement; there are
//! no framework-level save hooks. Uniqueness of an active (country, region)
//! pair is enforced by a partial unique index, so concurrent duplicate
//! creates cannot both succeed (the loser gets a 23505 database error).

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::ShippingChargeEntity;
use crate::metrics::QueryTimer;
use shared::normalize::{normalize_country, normalize_region};

/// Repository for shipping-charge database operations.
#[derive(Clone)]
pub struct ShippingChargeRepository {
    pool: PgPool,
}

impl ShippingChargeRepository {
    /// Creates a new ShippingChargeRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new shipping charge.
    ///
    /// Country and region are normalized before insert so the uniqueness
    /// index compares canonical values. A duplicate active zone surfaces as
    /// a unique-violation database error.
    pub async fn create(
        &self,
        country: &str,
        region: Option<&str>,
        delivery_charge: f64,
        return_charge: f64,
        estimated_days: i32,
        is_active: bool,
    ) -> Result<ShippingChargeEntity, sqlx::Error> {
        let country = normalize_country(country);
        let region = normalize_region(region);

        let timer = QueryTimer::new("create_shipping_charge");
        let result = sqlx::query_as::<_, ShippingChargeEntity>(
            r#"
            INSERT INTO shipping_charges (country, region, delivery_charge, return_charge,
                                          estimated_days, is_active)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(country)
        .bind(region)
        .bind(delivery_charge)
        .bind(return_charge)
        .bind(estimated_days)
        .bind(is_active)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find the active shipping charge for an exact (country, region) pair.
    ///
    /// Inputs are normalized: whitespace trimmed, absent/empty region mapped
    /// to the whole-country zone. Inactive records are never returned.
    pub async fn find_by_location(
        &self,
        country: &str,
        region: Option<&str>,
    ) -> Result<Option<ShippingChargeEntity>, sqlx::Error> {
        let country = normalize_country(country);
        let region = normalize_region(region);

        let timer = QueryTimer::new("find_shipping_charge_by_location");
        let result = sqlx::query_as::<_, ShippingChargeEntity>(
            r#"
            SELECT * FROM shipping_charges
            WHERE country = $1
              AND region IS NOT DISTINCT FROM $2
              AND is_active = TRUE
            "#,
        )
        .bind(country)
        .bind(region)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a shipping charge by its public UUID, regardless of active flag.
    pub async fn find_by_charge_id(
        &self,
        charge_id: Uuid,
    ) -> Result<Option<ShippingChargeEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_shipping_charge_by_id");
        let result = sqlx::query_as::<_, ShippingChargeEntity>(
            r#"
            SELECT * FROM shipping_charges WHERE charge_id = $1
            "#,
        )
        .bind(charge_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List shipping charges, newest first.
    ///
    /// Filters by country when given; inactive zones are included only when
    /// requested (admin surface).
    pub async fn list(
        &self,
        country: Option<&str>,
        include_inactive: bool,
    ) -> Result<Vec<ShippingChargeEntity>, sqlx::Error> {
        let country = country.map(normalize_country);

        let timer = QueryTimer::new("list_shipping_charges");
        let result = sqlx::query_as::<_, ShippingChargeEntity>(
            r#"
            SELECT * FROM shipping_charges
            WHERE ($1::TEXT IS NULL OR country = $1)
              AND ($2 OR is_active = TRUE)
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(country)
        .bind(include_inactive)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Update a shipping charge (partial update).
    ///
    /// Only provided fields change; None values are preserved. The zone's
    /// country and region are immutable. `updated_at` is refreshed on every
    /// call, even when all fields are None.
    pub async fn update(
        &self,
        charge_id: Uuid,
        delivery_charge: Option<f64>,
        return_charge: Option<f64>,
        estimated_days: Option<i32>,
        is_active: Option<bool>,
    ) -> Result<Option<ShippingChargeEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_shipping_charge");
        let result = sqlx::query_as::<_, ShippingChargeEntity>(
            r#"
            UPDATE shipping_charges SET
                delivery_charge = COALESCE($2, delivery_charge),
                return_charge = COALESCE($3, return_charge),
                estimated_days = COALESCE($4, estimated_days),
                is_active = COALESCE($5, is_active),
                updated_at = NOW()
            WHERE charge_id = $1
            RETURNING *
            "#,
        )
        .bind(charge_id)
        .bind(delivery_charge)
        .bind(return_charge)
        .bind(estimated_days)
        .bind(is_active)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Soft-delete a shipping charge by clearing its active flag.
    ///
    /// The row stays in place for audit; `find_by_location` stops returning
    /// it. Returns None when no such charge exists.
    pub async fn deactivate(
        &self,
        charge_id: Uuid,
    ) -> Result<Option<ShippingChargeEntity>, sqlx::Error> {
        let timer = QueryTimer::new("deactivate_shipping_charge");
        let result = sqlx::query_as::<_, ShippingChargeEntity>(
            r#"
            UPDATE shipping_charges SET
                is_active = FALSE,
                updated_at = NOW()
            WHERE charge_id = $1
            RETURNING *
            "#,
        )
        .bind(charge_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}
