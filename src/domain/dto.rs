//! Data Transfer Objects for API requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{UserCategory, UserProfile};

/// Standard API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (0 = success, non-zero = error).
    pub code: i32,

    /// Human-readable message.
    pub message: String,

    /// Response data (null on error).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a success response.
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            message: "success".to_string(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Create a success response with no data.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            code: 0,
            message: "success".to_string(),
            data: None,
        }
    }
}

/// Request to register a citizen account.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    /// Login email.
    pub email: String,

    /// Display name shown on the public feed.
    pub display_name: String,
}

impl SignupRequest {
    /// Validate the request.
    ///
    /// # Errors
    ///
    /// Returns a message describing the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.email.is_empty() {
            return Err("email is required".to_string());
        }
        if !self.email.contains('@') {
            return Err("email must contain '@'".to_string());
        }
        if self.email.len() > 255 {
            return Err("email cannot exceed 255 characters".to_string());
        }
        if self.display_name.trim().is_empty() {
            return Err("display_name is required".to_string());
        }
        if self.display_name.len() > 100 {
            return Err("display_name cannot exceed 100 characters".to_string());
        }
        Ok(())
    }
}

/// Response for a successful signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupResponse {
    /// The account's public JanID.
    pub jan_id: String,

    /// Account category.
    pub category: UserCategory,

    /// Bearer token for the new session.
    pub token: String,

    /// Session expiration timestamp (ISO 8601).
    pub expires_at: String,
}

/// Public view of a user profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// Public JanID string.
    pub jan_id: String,

    /// Account category.
    pub category: UserCategory,

    /// Login email.
    pub email: String,

    /// Display name.
    pub display_name: String,

    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl From<UserProfile> for UserResponse {
    fn from(user: UserProfile) -> Self {
        Self {
            jan_id: user.jan_id,
            category: user.category,
            email: user.email,
            display_name: user.display_name,
            created_at: user.created_at,
        }
    }
}

/// Outcome of one seeded account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeededAccount {
    /// Account email.
    pub email: String,

    /// JanID of the account (freshly allocated or pre-existing).
    pub jan_id: String,

    /// Whether this run created the account.
    pub created: bool,
}

/// Response for the admin seeding routine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedResponse {
    /// Number of accounts created in this run.
    pub created: usize,

    /// Number of accounts that already existed.
    pub skipped: usize,

    /// Per-account outcomes.
    pub accounts: Vec<SeededAccount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_success() {
        let response = ApiResponse::success(vec![1, 2, 3]);
        assert_eq!(response.code, 0);
        assert_eq!(response.message, "success");
        assert_eq!(response.data, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_signup_request_validation() {
        let req = SignupRequest {
            email: "asha@example.in".to_string(),
            display_name: "Asha".to_string(),
        };
        assert!(req.validate().is_ok());

        let req = SignupRequest {
            email: String::new(),
            display_name: "Asha".to_string(),
        };
        assert!(req.validate().is_err());

        let req = SignupRequest {
            email: "not-an-email".to_string(),
            display_name: "Asha".to_string(),
        };
        assert!(req.validate().is_err());

        let req = SignupRequest {
            email: "asha@example.in".to_string(),
            display_name: "   ".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
