//! Shipping charge endpoint handlers.
//!
//! The admin surface manages shipping zones: create, list, inspect, and
//! price-adjust them. Deletion is always a soft delete; location lookup and
//! cost calculation only ever see active zones.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use persistence::repositories::ShippingChargeRepository;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::{record_zone_created, record_zone_deactivated};
use domain::models::shipping_charge::{
    CreateShippingChargeRequest, ListShippingChargesQuery, ListShippingChargesResponse,
    LookupShippingChargeQuery, ShippingChargeResponse, ShippingCostQuery, ShippingCostResponse,
    UpdateShippingChargeRequest,
};
use domain::models::ShippingCharge;

/// Create a new shipping charge.
///
/// POST /api/v1/shipping-charges
///
/// A duplicate active (country, region) pair is rejected with 409 by the
/// partial unique index; there is no read-then-write race window.
pub async fn create_shipping_charge(
    State(state): State<AppState>,
    Json(request): Json<CreateShippingChargeRequest>,
) -> Result<(StatusCode, Json<ShippingChargeResponse>), ApiError> {
    request.validate()?;

    let repo = ShippingChargeRepository::new(state.pool.clone());
    let entity = repo
        .create(
            &request.country,
            request.region.as_deref(),
            request.delivery_charge,
            request.return_charge,
            request.estimated_days,
            request.is_active,
        )
        .await?;

    let charge: ShippingCharge = entity.into();
    let response: ShippingChargeResponse = charge.into();

    record_zone_created();
    info!(
        charge_id = %response.charge_id,
        zone = %response.display_name,
        "Shipping charge created"
    );

    Ok((StatusCode::CREATED, Json(response)))
}

/// List shipping charges.
///
/// GET /api/v1/shipping-charges?country=<name>&includeInactive=<bool>
pub async fn list_shipping_charges(
    State(state): State<AppState>,
    Query(query): Query<ListShippingChargesQuery>,
) -> Result<Json<ListShippingChargesResponse>, ApiError> {
    let repo = ShippingChargeRepository::new(state.pool.clone());
    let entities = repo
        .list(query.country.as_deref(), query.include_inactive)
        .await?;

    let charges: Vec<ShippingChargeResponse> = entities
        .into_iter()
        .map(|e| {
            let c: ShippingCharge = e.into();
            c.into()
        })
        .collect();

    let total = charges.len();

    Ok(Json(ListShippingChargesResponse { charges, total }))
}

/// Look up the active shipping charge for a location.
///
/// GET /api/v1/shipping-charges/lookup?country=<name>&region=<name>
///
/// Inputs are trimmed; an absent or empty region resolves the whole-country
/// default zone. Deactivated zones are never returned.
pub async fn lookup_shipping_charge(
    State(state): State<AppState>,
    Query(query): Query<LookupShippingChargeQuery>,
) -> Result<Json<ShippingChargeResponse>, ApiError> {
    if query.country.trim().is_empty() {
        return Err(ApiError::Validation("Country is required".to_string()));
    }

    let repo = ShippingChargeRepository::new(state.pool.clone());
    let entity = repo
        .find_by_location(&query.country, query.region.as_deref())
        .await?
        .ok_or_else(|| {
            ApiError::NotFound("No shipping charge configured for this location".to_string())
        })?;

    let charge: ShippingCharge = entity.into();
    Ok(Json(charge.into()))
}

/// Calculate the total shipping cost for a location.
///
/// GET /api/v1/shipping-charges/cost?country=<name>&region=<name>&includeReturn=<bool>
pub async fn get_shipping_cost(
    State(state): State<AppState>,
    Query(query): Query<ShippingCostQuery>,
) -> Result<Json<ShippingCostResponse>, ApiError> {
    if query.country.trim().is_empty() {
        return Err(ApiError::Validation("Country is required".to_string()));
    }

    let repo = ShippingChargeRepository::new(state.pool.clone());
    let entity = repo
        .find_by_location(&query.country, query.region.as_deref())
        .await?
        .ok_or_else(|| {
            ApiError::NotFound("No shipping charge configured for this location".to_string())
        })?;

    let charge: ShippingCharge = entity.into();
    Ok(Json(ShippingCostResponse::from_charge(
        &charge,
        query.include_return,
    )))
}

/// Get a single shipping charge by ID, active or not.
///
/// GET /api/v1/shipping-charges/:charge_id
pub async fn get_shipping_charge(
    State(state): State<AppState>,
    Path(charge_id): Path<Uuid>,
) -> Result<Json<ShippingChargeResponse>, ApiError> {
    let repo = ShippingChargeRepository::new(state.pool.clone());
    let entity = repo
        .find_by_charge_id(charge_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Shipping charge not found".to_string()))?;

    let charge: ShippingCharge = entity.into();
    Ok(Json(charge.into()))
}

/// Update a shipping charge (partial update).
///
/// PUT /api/v1/shipping-charges/:charge_id
///
/// Only pricing, estimated days, and the active flag are mutable; every
/// successful call refreshes `updated_at`.
pub async fn update_shipping_charge(
    State(state): State<AppState>,
    Path(charge_id): Path<Uuid>,
    Json(request): Json<UpdateShippingChargeRequest>,
) -> Result<Json<ShippingChargeResponse>, ApiError> {
    request.validate()?;

    let repo = ShippingChargeRepository::new(state.pool.clone());
    let entity = repo
        .update(
            charge_id,
            request.delivery_charge,
            request.return_charge,
            request.estimated_days,
            request.is_active,
        )
        .await?
        .ok_or_else(|| ApiError::NotFound("Shipping charge not found".to_string()))?;

    let charge: ShippingCharge = entity.into();
    let response: ShippingChargeResponse = charge.into();

    info!(
        charge_id = %response.charge_id,
        zone = %response.display_name,
        "Shipping charge updated"
    );

    Ok(Json(response))
}

/// Deactivate a shipping charge (soft delete).
///
/// DELETE /api/v1/shipping-charges/:charge_id
pub async fn deactivate_shipping_charge(
    State(state): State<AppState>,
    Path(charge_id): Path<Uuid>,
) -> Result<Json<ShippingChargeResponse>, ApiError> {
    let repo = ShippingChargeRepository::new(state.pool.clone());
    let entity = repo
        .deactivate(charge_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Shipping charge not found".to_string()))?;

    let charge: ShippingCharge = entity.into();
    let response: ShippingChargeResponse = charge.into();

    record_zone_deactivated();
    info!(
        charge_id = %response.charge_id,
        zone = %response.display_name,
        "Shipping charge deactivated"
    );

    Ok(Json(response))
}
