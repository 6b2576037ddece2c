//! DTOs for the URL decoration endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /api/decorate`.
///
/// The URL is not required to be a web URL: non-web input is echoed back
/// undecorated.
#[derive(Debug, Deserialize, Validate)]
pub struct DecorateRequest {
    #[validate(length(min = 1, max = 8192, message = "URL must be 1-8192 characters"))]
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct DecorateResponse {
    pub url: String,
    pub decorated: String,
    /// True when decoration changed the URL.
    pub changed: bool,
}
