//! Application-wide constants.

/// Application name.
pub const APP_NAME: &str = "FacebookFacade";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default Graph API origin.
pub const GRAPH_URL: &str = "https://graph.facebook.com";

/// Default web origin used for login/logout dialogs.
pub const WWW_URL: &str = "https://www.facebook.com";

/// Prefix of a public profile link. Deliberately plain http.
pub const PROFILE_URL_PREFIX: &str = "http://facebook.com/profile.php?id=";

/// Origin used in picture URLs. Independent of the configured Graph origin.
pub const PICTURE_URL_ORIGIN: &str = "https://graph.facebook.com";

/// Picture type used when the caller names none.
pub const DEFAULT_PICTURE_TYPE: &str = "square";

/// Default Graph API timeout in milliseconds.
pub const DEFAULT_API_TIMEOUT_MS: u64 = 60_000;

/// Graph paths used by the facade.
pub mod paths {
    pub const ME: &str = "/me";
    pub const MY_FRIENDS: &str = "/me/friends";
    pub const OAUTH_ACCESS_TOKEN: &str = "/oauth/access_token";
}
