//! Graph response types.
//!
//! Failed Graph calls answer with an error envelope:
//! ```json
//! { "error": { "message": "...", "type": "OAuthException", "code": 190 } }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use ff_core::error::FbError;

/// Body of the Graph error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(rename = "type", default)]
    pub error_type: String,
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub error_subcode: Option<i64>,
    #[serde(default)]
    pub fbtrace_id: Option<String>,
}

impl GraphErrorBody {
    /// Extract the error envelope from a decoded body, if there is one.
    ///
    /// Older endpoints report errors as `{"error_code":..,"error_msg":..}`
    /// and are accepted too.
    pub fn from_body(body: &Value) -> Option<Self> {
        if let Some(err) = body.get("error") {
            if let Ok(parsed) = serde_json::from_value::<GraphErrorBody>(err.clone()) {
                return Some(parsed);
            }
            // Some endpoints send a bare string.
            if let Some(msg) = err.as_str() {
                return Some(Self::untyped(msg));
            }
        }
        let code = body.get("error_code").and_then(Value::as_i64)?;
        let message = body
            .get("error_msg")
            .and_then(Value::as_str)
            .unwrap_or_default();
        Some(Self {
            code,
            ..Self::untyped(message)
        })
    }

    fn untyped(message: &str) -> Self {
        Self {
            message: message.to_string(),
            error_type: "Exception".into(),
            code: 0,
            error_subcode: None,
            fbtrace_id: None,
        }
    }

    /// Whether the error means the access token is no longer usable.
    pub fn invalidates_session(&self) -> bool {
        self.error_type == "OAuthException"
            && (self.code == 190
                || self.message.contains("Error validating access token")
                || self.message.contains("Invalid OAuth access token"))
    }
}

impl From<GraphErrorBody> for FbError {
    fn from(body: GraphErrorBody) -> Self {
        FbError::GraphApi {
            code: body.code,
            error_type: body.error_type,
            message: body.message,
        }
    }
}

/// Answer of the token exchange endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

impl TokenResponse {
    /// Parse either the JSON answer or the legacy
    /// `access_token=...&expires=...` form encoding.
    pub fn parse(body: &str) -> Option<Self> {
        if let Ok(parsed) = serde_json::from_str::<TokenResponse>(body) {
            return Some(parsed);
        }
        let mut token = None;
        let mut expires = None;
        for (key, value) in url::form_urlencoded::parse(body.trim().as_bytes()) {
            match key.as_ref() {
                "access_token" => token = Some(value.into_owned()),
                "expires" | "expires_in" => expires = value.parse().ok(),
                _ => {}
            }
        }
        token.filter(|t| !t.is_empty()).map(|access_token| Self {
            access_token,
            token_type: None,
            expires_in: expires,
        })
    }
}
