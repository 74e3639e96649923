//! Mutable client state: application credentials and the user session.

use ff_core::config::GraphConfig;

/// Application credentials plus per-user session data.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub app_id: String,
    pub app_secret: String,
    pub file_upload_support: bool,
    /// User access token, if a user is logged in.
    pub access_token: Option<String>,
    /// Cached id of the user owning `access_token`.
    pub user_id: Option<String>,
    /// Raw signed request, as handed over by the platform.
    pub signed_request: Option<String>,
}

impl Session {
    /// Fresh session with no user attached.
    pub fn from_config(config: &GraphConfig) -> Self {
        Self {
            app_id: config.app_id.clone(),
            app_secret: config.app_secret.clone(),
            file_upload_support: config.file_upload_support,
            ..Self::default()
        }
    }

    /// Application access token, valid for app-level calls.
    pub fn app_access_token(&self) -> String {
        format!("{}|{}", self.app_id, self.app_secret)
    }

    /// User token if present, otherwise the application token.
    pub fn effective_access_token(&self) -> String {
        self.access_token
            .clone()
            .unwrap_or_else(|| self.app_access_token())
    }

    pub fn set_access_token(&mut self, token: &str) {
        if self.access_token.as_deref() != Some(token) {
            self.user_id = None;
        }
        self.access_token = Some(token.to_string());
    }

    /// Drop everything tied to the logged-in user. Credentials survive.
    pub fn clear(&mut self) {
        self.access_token = None;
        self.user_id = None;
        self.signed_request = None;
    }
}
