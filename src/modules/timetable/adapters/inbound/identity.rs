// Owner resolution for inbound adapters.
//
// Authentication lives in front of this service. It forwards the caller's stable id in the
// x-owner-id header; a request without one is a guest.

use crate::modules::timetable::core::state::GUEST_OWNER_ID;
use axum::http::HeaderMap;

pub const OWNER_HEADER: &str = "x-owner-id";

/// Owner resolved from the request headers, attached to each GraphQL request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOwner(pub String);

impl RequestOwner {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self(owner_from_headers(headers))
    }
}

pub fn owner_from_headers(headers: &HeaderMap) -> String {
    owner_or_guest(
        headers
            .get(OWNER_HEADER)
            .and_then(|value| value.to_str().ok()),
    )
}

pub fn owner_or_guest(owner_id: Option<&str>) -> String {
    match owner_id.map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => GUEST_OWNER_ID.to_string(),
    }
}
