//! Backend Command Wrappers
//!
//! Frontend bindings to the todo HTTP backend.

mod todo;

use crate::error::ApiError;

pub use todo::*;

/// Turn a non-2xx response into `ApiError::Status`
fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}
