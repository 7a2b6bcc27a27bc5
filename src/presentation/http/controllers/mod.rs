// src/presentation/http/controllers/mod.rs
pub mod articles;
pub mod comments;

use crate::presentation::http::error::{HttpError, HttpResult};

/// Route ids that are not integers cannot name a record.
pub(crate) fn parse_id(raw: &str, what: &str) -> HttpResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| HttpError::not_found(format!("{what} not found")))
}
