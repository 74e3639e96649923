//! Graph API client - the underlying client wrapped by the facade.
//!
//! [`GraphApi`] is the typed interface listing every operation the client
//! supports. [`GraphClient`] implements it over HTTP: application
//! credentials, access-token and session state, login/logout URL builders,
//! and raw Graph API passthrough. Operations can also be invoked by name
//! through [`GraphApi::call`].

pub mod api;
pub mod client;
pub mod dispatch;
pub mod response;
pub mod session;
pub mod urls;

// Re-export key types
pub use api::{id_of, GraphApi, HttpMethod, UserRecord};
pub use dispatch::METHODS;
pub use client::GraphClient;
pub use response::{GraphErrorBody, TokenResponse};
pub use session::Session;
