//! Shared HTTP response helpers.

use crate::error::GatewayError;

/// Return the response unchanged on success, or [`GatewayError::Api`] with
/// the status code and body otherwise.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
    if !resp.status().is_success() {
        return Err(GatewayError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
