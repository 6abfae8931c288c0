//! Request DTOs for the billing API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

/// Request body for POST /api/billing/process
///
/// All three fields are required; they are modeled as options so a missing
/// field produces the service's own 400 response instead of a
/// deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessBillingRequest {
    /// Identifier of the user being billed
    pub user_id: Option<String>,
    /// Subscription plan name
    pub plan: Option<String>,
    /// Amount charged
    pub amount: Option<f64>,
}

impl ProcessBillingRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        let user_id_ok = self.user_id.as_deref().is_some_and(|id| !id.is_empty());
        if !user_id_ok || self.plan.is_none() || self.amount.is_none() {
            return Some("user_id, plan, and amount required".to_string());
        }
        None
    }
}

/// Request body for POST /api/billing/validate
#[derive(Debug, Clone, Deserialize)]
pub struct ValidatePaymentRequest {
    /// Payment method label (e.g. "card", "paypal")
    pub payment_method: Option<String>,
    /// Card number, accepted but never echoed back
    #[serde(default)]
    pub card_number: Option<String>,
}

/// Query parameters for GET /api/billing/history
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryParams {
    /// Identifier of the user whose history is requested
    pub user_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_request_deserialize() {
        let json = r#"{"user_id": "u1", "plan": "pro", "amount": 9.99}"#;
        let req: ProcessBillingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.user_id.as_deref(), Some("u1"));
        assert_eq!(req.plan.as_deref(), Some("pro"));
        assert_eq!(req.amount, Some(9.99));
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_process_request_missing_fields() {
        let json = r#"{"user_id": "u1"}"#;
        let req: ProcessBillingRequest = serde_json::from_str(json).unwrap();
        let error = req.validate().unwrap();
        assert_eq!(error, "user_id, plan, and amount required");
    }

    #[test]
    fn test_process_request_empty_user_id() {
        let req = ProcessBillingRequest {
            user_id: Some("".to_string()),
            plan: Some("basic".to_string()),
            amount: Some(1.0),
        };
        assert!(req.validate().is_some());
    }

    #[test]
    fn test_validate_request_card_number_optional() {
        let json = r#"{"payment_method": "card"}"#;
        let req: ValidatePaymentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.payment_method.as_deref(), Some("card"));
        assert!(req.card_number.is_none());
    }

    #[test]
    fn test_history_params_deserialize() {
        let req: HistoryParams = serde_json::from_str(r#"{"user_id": "u42"}"#).unwrap();
        assert_eq!(req.user_id.as_deref(), Some("u42"));
    }
}
