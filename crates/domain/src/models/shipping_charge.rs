//! Shipping charge domain model.
//!
//! A shipping charge is the pricing record for one shipping zone: a
//! (country, region) pair with delivery/return pricing and an estimated
//! delivery time. A record with no region is the whole-country default zone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Represents a shipping zone's pricing record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingCharge {
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

impl ShippingCharge {
    /// Human-readable zone label: `"{country} - {region}"`, or just the
    /// country for the whole-country default zone. Derived, never persisted.
    pub fn display_name(&self) -> String {
        match &self.region {
            Some(region) => format!("{} - {}", self.country, region),
            None => self.country.clone(),
        }
    }

    /// Total shipping cost for this zone.
    ///
    /// Returns the delivery charge alone, or delivery plus return charge
    /// when `include_return` is set. Pure function of the record.
    pub fn total_shipping_cost(&self, include_return: bool) -> f64 {
        if include_return {
            self.delivery_charge + self.return_charge
        } else {
            self.delivery_charge
        }
    }
}

/// Default active status for new shipping charges.
fn default_active() -> bool {
    true
}

/// Request payload for creating a shipping charge.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateShippingChargeRequest {
    #[validate(
        length(min = 1, max = 100, message = "Country must be 1-100 characters"),
        custom(function = "shared::validation::validate_location_text")
    )]
    pub country: String,

    #[validate(length(max = 100, message = "Region must be at most 100 characters"))]
    pub region: Option<String>,

    #[validate(custom(function = "shared::validation::validate_charge_amount"))]
    pub delivery_charge: f64,

    #[validate(custom(function = "shared::validation::validate_charge_amount"))]
    pub return_charge: f64,

    #[validate(range(min = 1, max = 365, message = "Estimated days must be between 1 and 365"))]
    pub estimated_days: i32,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Request payload for updating a shipping charge (partial update).
///
/// Country and region identify a zone and are immutable; reconfiguring a
/// zone's location means deactivating it and creating a new one.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShippingChargeRequest {
    #[validate(custom(function = "shared::validation::validate_charge_amount"))]
    pub delivery_charge: Option<f64>,

    #[validate(custom(function = "shared::validation::validate_charge_amount"))]
    pub return_charge: Option<f64>,

    #[validate(range(min = 1, max = 365, message = "Estimated days must be between 1 and 365"))]
    pub estimated_days: Option<i32>,

    pub is_active: Option<bool>,
}

/// Query parameters for zone lookup by location.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupShippingChargeQuery {
    pub country: String,
    pub region: Option<String>,
}

/// Query parameters for shipping cost calculation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingCostQuery {
    pub country: String,
    pub region: Option<String>,
    #[serde(default)]
    pub include_return: bool,
}

/// Query parameters for listing shipping charges.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListShippingChargesQuery {
    pub country: Option<String>,
    #[serde(default)]
    pub include_inactive: bool,
}

/// Response payload for shipping charge operations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingChargeResponse {
    pub charge_id: Uuid,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub display_name: String,
    pub delivery_charge: f64,
    pub return_charge: f64,
    pub estimated_days: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ShippingCharge> for ShippingChargeResponse {
    fn from(c: ShippingCharge) -> Self {
        let display_name = c.display_name();
        Self {
            charge_id: c.charge_id,
            country: c.country,
            region: c.region,
            display_name,
            delivery_charge: c.delivery_charge,
            return_charge: c.return_charge,
            estimated_days: c.estimated_days,
            is_active: c.is_active,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Response payload for listing shipping charges.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListShippingChargesResponse {
    pub charges: Vec<ShippingChargeResponse>,
    pub total: usize,
}

/// Response payload for shipping cost calculation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingCostResponse {
    pub display_name: String,
    pub delivery_charge: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_charge: Option<f64>,
    pub total: f64,
    pub estimated_days: i32,
}

impl ShippingCostResponse {
    /// Builds a cost breakdown from a zone record.
    pub fn from_charge(charge: &ShippingCharge, include_return: bool) -> Self {
        Self {
            display_name: charge.display_name(),
            delivery_charge: charge.delivery_charge,
            return_charge: include_return.then_some(charge.return_charge),
            total: charge.total_shipping_cost(include_return),
            estimated_days: charge.estimated_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_charge(region: Option<&str>) -> ShippingCharge {
        ShippingCharge {
            id: 1,
            charge_id: Uuid::new_v4(),
            country: "India".to_string(),
            region: region.map(|r| r.to_string()),
            delivery_charge: 50.0,
            return_charge: 30.0,
            estimated_days: 5,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_display_name_with_region() {
        let charge = test_charge(Some("North"));
        assert_eq!(charge.display_name(), "India - North");
    }

    #[test]
    fn test_display_name_without_region() {
        let charge = test_charge(None);
        assert_eq!(charge.display_name(), "India");
    }

    #[test]
    fn test_total_shipping_cost_delivery_only() {
        let charge = test_charge(None);
        assert_eq!(charge.total_shipping_cost(false), 50.0);
    }

    #[test]
    fn test_total_shipping_cost_with_return() {
        let charge = test_charge(None);
        assert_eq!(charge.total_shipping_cost(true), 80.0);
    }

    #[test]
    fn test_total_shipping_cost_zero_charges() {
        let mut charge = test_charge(None);
        charge.delivery_charge = 0.0;
        charge.return_charge = 0.0;
        assert_eq!(charge.total_shipping_cost(true), 0.0);
    }

    #[test]
    fn test_create_request_valid() {
        let request = CreateShippingChargeRequest {
            country: "India".to_string(),
            region: Some("North".to_string()),
            delivery_charge: 50.0,
            return_charge: 30.0,
            estimated_days: 5,
            is_active: true,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_blank_country() {
        let request = CreateShippingChargeRequest {
            country: "   ".to_string(),
            region: None,
            delivery_charge: 50.0,
            return_charge: 30.0,
            estimated_days: 5,
            is_active: true,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_empty_country() {
        let request = CreateShippingChargeRequest {
            country: String::new(),
            region: None,
            delivery_charge: 50.0,
            return_charge: 30.0,
            estimated_days: 5,
            is_active: true,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_negative_delivery_charge() {
        let request = CreateShippingChargeRequest {
            country: "India".to_string(),
            region: None,
            delivery_charge: -1.0,
            return_charge: 30.0,
            estimated_days: 5,
            is_active: true,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_estimated_days_bounds() {
        let mut request = CreateShippingChargeRequest {
            country: "India".to_string(),
            region: None,
            delivery_charge: 50.0,
            return_charge: 30.0,
            estimated_days: 0,
            is_active: true,
        };
        assert!(request.validate().is_err());

        request.estimated_days = 366;
        assert!(request.validate().is_err());

        request.estimated_days = 1;
        assert!(request.validate().is_ok());

        request.estimated_days = 365;
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_defaults_active() {
        let request: CreateShippingChargeRequest = serde_json::from_value(serde_json::json!({
            "country": "India",
            "deliveryCharge": 50.0,
            "returnCharge": 30.0,
            "estimatedDays": 5
        }))
        .unwrap();
        assert!(request.is_active);
        assert!(request.region.is_none());
    }

    #[test]
    fn test_update_request_partial() {
        let request: UpdateShippingChargeRequest = serde_json::from_value(serde_json::json!({
            "deliveryCharge": 75.0
        }))
        .unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.delivery_charge, Some(75.0));
        assert!(request.return_charge.is_none());
        assert!(request.estimated_days.is_none());
        assert!(request.is_active.is_none());
    }

    #[test]
    fn test_update_request_out_of_range_days() {
        let request = UpdateShippingChargeRequest {
            delivery_charge: None,
            return_charge: None,
            estimated_days: Some(400),
            is_active: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_response_includes_display_name() {
        let charge = test_charge(Some("North"));
        let response: ShippingChargeResponse = charge.into();
        assert_eq!(response.display_name, "India - North");
        assert_eq!(response.region, Some("North".to_string()));
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let charge = test_charge(None);
        let response: ShippingChargeResponse = charge.into();
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("deliveryCharge").is_some());
        assert!(json.get("estimatedDays").is_some());
        assert!(json.get("isActive").is_some());
        // Absent region is omitted entirely
        assert!(json.get("region").is_none());
    }

    #[test]
    fn test_cost_response_without_return() {
        let charge = test_charge(Some("North"));
        let cost = ShippingCostResponse::from_charge(&charge, false);
        assert_eq!(cost.delivery_charge, 50.0);
        assert_eq!(cost.return_charge, None);
        assert_eq!(cost.total, 50.0);
        assert_eq!(cost.estimated_days, 5);
    }

    #[test]
    fn test_cost_response_with_return() {
        let charge = test_charge(None);
        let cost = ShippingCostResponse::from_charge(&charge, true);
        assert_eq!(cost.return_charge, Some(30.0));
        assert_eq!(cost.total, 80.0);
    }
}
