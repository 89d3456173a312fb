//! Network messages - communication between App and Network layers

use crate::models::ApiPayload;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Fetch the data payload from the given endpoint URL (issued once, at mount)
    FetchData {
        id: u64,
        url: String,
    },
    /// Shutdown the network actor, cancelling any in-flight request
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// The endpoint returned a well-formed payload
    Payload {
        id: u64,
        payload: ApiPayload,
        time_ms: u64,
    },
    /// The request failed: network error, non-success status, or a body
    /// that is not valid JSON. The app treats all of these the same.
    Error {
        id: u64,
        message: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Payload { id, .. } => *id,
            NetworkResponse::Error { id, .. } => *id,
        }
    }
}
