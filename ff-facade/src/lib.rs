//! Facebook SDK Facade.
//!
//! A thin convenience layer in front of a [`GraphApi`] client. It fetches
//! the current or another user, lists friends, and builds profile and picture
//! URLs. Every other client operation is forwarded unchanged, either through a
//! typed method of the same name or through [`Facade::call_raw`].
//!
//! ```rust,no_run
//! use ff_facade::{Facade, PictureSpec};
//!
//! # async fn demo() -> ff_core::FbResult<()> {
//! let fb = Facade::new("123456", "app-secret")?;
//! fb.set_access_token("user-token").await;
//!
//! if let Some(me) = fb.get_user(None).await? {
//!     println!("hello {}", me["name"]);
//! }
//! let url = fb.get_profile_picture_url(&PictureSpec::dims_current_user(40, 40)).await?;
//! # let _ = url;
//! # Ok(())
//! # }
//! ```

pub mod facade;
pub mod numeric;
pub mod picture;

pub use facade::{profile_url, Facade};
pub use ff_graph::{GraphApi, GraphClient, HttpMethod, UserRecord};
pub use numeric::is_numeric;
pub use picture::{CurrentUserResolver, PictureArg, PictureQuery, PictureSpec, ResolvedPicture};
