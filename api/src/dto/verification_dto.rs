use serde::{Deserialize, Serialize};
use validator::Validate;

use vg_core::domain::value_objects::Purpose;
use vg_core::services::verification::{RequestCodeResult, VerifyCodeResult};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RequestCodeRequest {
    #[validate(email, length(max = 254))]
    pub identity: String,
    pub purpose: Purpose,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestCodeResponse {
    pub requested: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&RequestCodeResult> for RequestCodeResponse {
    fn from(result: &RequestCodeResult) -> Self {
        match result {
            RequestCodeResult::Delivered { .. } => Self {
                requested: true,
                error: None,
            },
            // The transport's reason is logged, not returned
            RequestCodeResult::DeliveryFailed { .. } => Self {
                requested: false,
                error: Some("Verification code could not be delivered".to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    #[validate(length(min = 1, max = 254))]
    pub identity: String,
    #[validate(length(min = 1, max = 16))]
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyCodeResponse {
    pub valid: bool,
    pub message: String,
}

impl From<VerifyCodeResult> for VerifyCodeResponse {
    fn from(result: VerifyCodeResult) -> Self {
        Self {
            valid: result.is_valid(),
            message: result.message,
        }
    }
}
