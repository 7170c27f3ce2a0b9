//! Caller identity taken from request headers.
//!
//! Callers announce themselves with the `user_id` and `user_role` headers.
//! Nothing authenticates these hints; services check them against the stored
//! user record.

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};

use crate::domain::CallerClaim;

/// Header holding the caller's numeric user id.
pub const USER_ID_HEADER: &str = "user_id";
/// Header holding the caller's claimed role (`0`/`1` or `student`/`teacher`).
pub const USER_ROLE_HEADER: &str = "user_role";

/// Extractor wrapping the [`CallerClaim`] built from the identity headers.
///
/// Never fails: missing or malformed headers leave the matching part of the
/// claim empty.
#[derive(Debug, Clone, Copy)]
pub struct Caller(pub CallerClaim);

impl Caller {
    /// Read the identity headers of `req`.
    pub fn from_headers(req: &HttpRequest) -> Self {
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::trim)
        };
        Self(CallerClaim::from_raw(
            header(USER_ID_HEADER),
            header(USER_ROLE_HEADER),
        ))
    }

    /// The parsed claim.
    pub fn claim(&self) -> &CallerClaim {
        &self.0
    }
}

impl FromRequest for Caller {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(Self::from_headers(req)))
    }
}
