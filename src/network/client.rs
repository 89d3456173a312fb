//! HTTP client wrapper - executes the data fetch and classifies failures

use std::time::Instant;

use crate::messages::NetworkResponse;
use crate::models::parse_payload;

/// Fetch the data payload from the endpoint.
///
/// Network errors, non-success statuses, and unparseable bodies all become
/// [`NetworkResponse::Error`]; the UI renders them identically, so the
/// distinction only survives in the log.
pub async fn fetch_payload(
    client: &reqwest::Client,
    url: &str,
    request_id: u64,
) -> NetworkResponse {
    let start = Instant::now();

    let result = client.get(url).send().await;
    match result {
        Ok(resp) => {
            let status = resp.status();
            if !status.is_success() {
                return NetworkResponse::Error {
                    id: request_id,
                    message: format!("Endpoint returned HTTP {}", status.as_u16()),
                    time_ms: start.elapsed().as_millis() as u64,
                };
            }
            match resp.text().await {
                Ok(body) => match parse_payload(&body) {
                    Ok(payload) => NetworkResponse::Payload {
                        id: request_id,
                        payload,
                        time_ms: start.elapsed().as_millis() as u64,
                    },
                    Err(e) => NetworkResponse::Error {
                        id: request_id,
                        message: format!("Malformed payload: {}", e),
                        time_ms: start.elapsed().as_millis() as u64,
                    },
                },
                Err(e) => NetworkResponse::Error {
                    id: request_id,
                    message: format!("Error reading body: {}", e),
                    time_ms: start.elapsed().as_millis() as u64,
                },
            }
        }
        Err(e) => {
            let msg = if e.is_connect() {
                format!("Connection failed: {}", e)
            } else {
                format!("Request failed: {}", e)
            };
            NetworkResponse::Error {
                id: request_id,
                message: msg,
                time_ms: start.elapsed().as_millis() as u64,
            }
        }
    }
}

/// Create an HTTP client with default configuration.
///
/// No request timeout: a request that never resolves leaves the page on the
/// loading indicator rather than flipping to the fallback.
pub fn create_client() -> reqwest::Client {
    reqwest::Client::new()
}
