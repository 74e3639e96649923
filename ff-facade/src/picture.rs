//! Profile picture URL resolution.
//!
//! A picture request names a subject (a user id, or the current user) and
//! exactly one query: a picture type or explicit dimensions. Building the
//! URL is pure; only resolving "current user" touches the client, through an
//! injected [`CurrentUserResolver`].

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use ff_core::constants::{DEFAULT_PICTURE_TYPE, PICTURE_URL_ORIGIN};
use ff_core::error::{FbError, FbResult};

use crate::numeric::is_numeric;

/// Supplies the id of the current user for implicit-subject pictures.
#[async_trait]
pub trait CurrentUserResolver: Send + Sync {
    /// `Ok(None)` when there is no current user.
    async fn resolve_current_user_id(&self) -> FbResult<Option<String>>;
}

/// The query part of a picture URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PictureQuery {
    /// `type=<name>`, e.g. `square` or `large`.
    Type(String),
    /// `width=<w>&height=<h>`.
    Dims { width: i64, height: i64 },
}

impl fmt::Display for PictureQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PictureQuery::Type(name) => write!(f, "type={name}"),
            PictureQuery::Dims { width, height } => write!(f, "width={width}&height={height}"),
        }
    }
}

/// What picture to build, one variant per accepted call shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PictureSpec {
    SquareCurrentUser,
    SquareUser(String),
    TypeCurrentUser(String),
    TypeUser { id: String, picture_type: String },
    DimsCurrentUser { width: i64, height: i64 },
    DimsUser { id: String, width: i64, height: i64 },
}

impl PictureSpec {
    pub fn square_current_user() -> Self {
        Self::SquareCurrentUser
    }

    pub fn square_user(id: impl Into<String>) -> Self {
        Self::SquareUser(id.into())
    }

    pub fn type_current_user(picture_type: impl Into<String>) -> Self {
        Self::TypeCurrentUser(picture_type.into())
    }

    pub fn type_user(id: impl Into<String>, picture_type: impl Into<String>) -> Self {
        Self::TypeUser {
            id: id.into(),
            picture_type: picture_type.into(),
        }
    }

    pub fn dims_current_user(width: i64, height: i64) -> Self {
        Self::DimsCurrentUser { width, height }
    }

    pub fn dims_user(id: impl Into<String>, width: i64, height: i64) -> Self {
        Self::DimsUser {
            id: id.into(),
            width,
            height,
        }
    }

    /// Classify a positional argument list.
    ///
    /// | args              | result                                   |
    /// |-------------------|------------------------------------------|
    /// | `()`              | square, current user                     |
    /// | `("123")`         | square, user 123 (numeric string)        |
    /// | `("large")`       | type `large`, current user               |
    /// | `(40, 40)`        | 40x40, current user                      |
    /// | `("123", "large")`| type `large`, user 123                   |
    /// | `("123", 40, 40)` | 40x40, user 123                          |
    ///
    /// Anything else fails with `InvalidArguments`.
    pub fn from_args(args: &[PictureArg]) -> FbResult<Self> {
        use PictureArg::{Int, Str};

        match args {
            [] => Ok(Self::SquareCurrentUser),
            [Str(s)] if is_numeric(s) => Ok(Self::SquareUser(s.clone())),
            [Str(s)] => Ok(Self::TypeCurrentUser(s.clone())),
            [other] => Err(invalid(format!(
                "a single argument must be a user id or picture type, got {}",
                other.kind()
            ))),
            [Int(width), Int(height)] => Ok(Self::dims_current_user(*width, *height)),
            [Str(id), Str(picture_type)] => Ok(Self::type_user(id.clone(), picture_type.clone())),
            [a, b] => Err(invalid(format!(
                "two arguments must be (int, int) or (string, string), got ({}, {})",
                a.kind(),
                b.kind()
            ))),
            [id @ (Str(_) | Int(_)), Int(width), Int(height)] => {
                Ok(Self::dims_user(id.to_string(), *width, *height))
            }
            [a, b, c] => Err(invalid(format!(
                "three arguments must be (id, int, int), got ({}, {}, {})",
                a.kind(),
                b.kind(),
                c.kind()
            ))),
            _ => Err(invalid(format!("expected at most 3 arguments, got {}", args.len()))),
        }
    }

    /// The explicit subject id, or `None` for the current user.
    pub fn subject(&self) -> Option<&str> {
        match self {
            Self::SquareUser(id) | Self::TypeUser { id, .. } | Self::DimsUser { id, .. } => {
                Some(id.as_str())
            }
            Self::SquareCurrentUser | Self::TypeCurrentUser(_) | Self::DimsCurrentUser { .. } => None,
        }
    }

    pub fn query(&self) -> PictureQuery {
        match self {
            Self::SquareCurrentUser | Self::SquareUser(_) => {
                PictureQuery::Type(DEFAULT_PICTURE_TYPE.to_string())
            }
            Self::TypeCurrentUser(t) | Self::TypeUser { picture_type: t, .. } => {
                PictureQuery::Type(t.clone())
            }
            Self::DimsCurrentUser { width, height } | Self::DimsUser { width, height, .. } => {
                PictureQuery::Dims {
                    width: *width,
                    height: *height,
                }
            }
        }
    }

    /// Pin the subject, asking `resolver` only for current-user variants.
    pub async fn resolve<R>(&self, resolver: &R) -> FbResult<ResolvedPicture>
    where
        R: CurrentUserResolver + ?Sized,
    {
        let subject_id = match self.subject() {
            Some(id) => id.to_string(),
            None => resolver
                .resolve_current_user_id()
                .await?
                .ok_or(FbError::NoCurrentUser)?,
        };
        Ok(ResolvedPicture {
            subject_id,
            query: self.query(),
        })
    }
}

fn invalid(msg: String) -> FbError {
    FbError::InvalidArguments(msg)
}

/// A picture request with a concrete subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPicture {
    pub subject_id: String,
    pub query: PictureQuery,
}

impl ResolvedPicture {
    /// `https://graph.facebook.com/<subject_id>/picture?<query>`
    pub fn url(&self) -> String {
        picture_url(&self.subject_id, &self.query)
    }
}

/// Format a picture URL. No validation of `subject_id`.
pub fn picture_url(subject_id: &str, query: &PictureQuery) -> String {
    format!("{PICTURE_URL_ORIGIN}/{subject_id}/picture?{query}")
}

/// One positional argument of a loosely typed picture call.
#[derive(Debug, Clone, PartialEq)]
pub enum PictureArg {
    Str(String),
    Int(i64),
    /// Anything else (bool, float, null, list, object). Always rejected.
    Other(Value),
}

impl PictureArg {
    fn kind(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) => "int",
            Self::Other(Value::Null) => "null",
            Self::Other(Value::Bool(_)) => "bool",
            Self::Other(Value::Number(_)) => "non-integer number",
            Self::Other(Value::Array(_)) => "list",
            Self::Other(_) => "object",
        }
    }
}

impl fmt::Display for PictureArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Other(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for PictureArg {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for PictureArg {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for PictureArg {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for PictureArg {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<u32> for PictureArg {
    fn from(n: u32) -> Self {
        Self::Int(n.into())
    }
}

impl From<Value> for PictureArg {
    fn from(v: Value) -> Self {
        match v {
            Value::String(s) => Self::Str(s),
            Value::Number(ref n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Other(v),
            },
            other => Self::Other(other),
        }
    }
}
