use serde::{Deserialize, Serialize};

/// Payload returned by `GET /api/data`
///
/// `data` items are intentionally untyped; the backend may put anything in
/// the array and we only ever pretty-print it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiPayload {
    pub message: String,
    pub data: Vec<serde_json::Value>,
}

/// Parse a response body into an [`ApiPayload`].
///
/// The single parse point for the endpoint; a malformed body surfaces here
/// and collapses into the failed fetch state upstream.
pub fn parse_payload(body: &str) -> Result<ApiPayload, serde_json::Error> {
    serde_json::from_str(body)
}

/// Lifecycle of the one data fetch issued at startup.
///
/// Begins as `Loading` and transitions at most once, to `Succeeded` or
/// `Failed`. There is no retry and no re-fetch.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Loading,
    Succeeded(ApiPayload),
    Failed,
}

impl FetchState {
    /// No further automatic transition occurs from a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, FetchState::Succeeded(_) | FetchState::Failed)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
}
