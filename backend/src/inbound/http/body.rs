//! Request body collection that reports failures as domain errors.
//!
//! `web::Bytes` rejects oversized or broken bodies before the handler runs,
//! which bypasses the JSON error shape. Handlers take `web::Payload` and call
//! [`read_body`] instead.

use actix_web::web;
use futures_util::StreamExt;
use tracing::warn;

use crate::domain::Error;

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 256 * 1024;
/// Message returned for bodies over [`MAX_BODY_BYTES`].
pub const BODY_TOO_LARGE_MESSAGE: &str = "Request body too large";
/// Message returned when the body stream breaks off.
pub const BODY_UNREADABLE_MESSAGE: &str = "Request body could not be read";

/// Collect the whole body, failing with `BadRequest` past `limit` bytes.
pub async fn read_body(mut payload: web::Payload, limit: usize) -> Result<web::Bytes, Error> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|err| {
            warn!(error = %err, "request body stream failed");
            Error::bad_request(BODY_UNREADABLE_MESSAGE)
        })?;
        if body.len() + chunk.len() > limit {
            warn!(limit, "request body over limit");
            return Err(Error::bad_request(BODY_TOO_LARGE_MESSAGE));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body.freeze())
}
