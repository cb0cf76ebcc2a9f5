//! Presence assertion: the endpoint answered. Error statuses pass.

use crate::HarnessError;
use crate::response::ApiResponse;

/// Pass iff a response is present and its status code is greater than zero.
pub fn response_received(response: Option<&ApiResponse>) -> Result<(), HarnessError> {
    let response = response.ok_or_else(|| HarnessError::Assertion {
        context: "response".to_string(),
        message: "response must not be absent".to_string(),
    })?;

    if response.status() == 0 {
        return Err(HarnessError::Assertion {
            context: "status code".to_string(),
            message: format!("status code must be > 0, got {}", response.status()),
        });
    }

    Ok(())
}
