//! App state - pure data structure with no I/O logic

use crate::messages::{NetworkCommand, NetworkResponse, RenderState};
use crate::models::FetchState;

/// Main application state - pure data, no I/O
///
/// The fetch cell is written only through [`AppState::handle_response`],
/// and only while a matching request is pending. Responses arriving with a
/// stale id, or after the state is already terminal, are discarded.
pub struct AppState {
    pub fetch: FetchState,
    pub scroll: u16,
    pub show_help: bool,
    pub fetch_time_ms: u64,

    next_request_id: u64,
    /// Liveness token for the in-flight request; `None` once resolved
    pending_request_id: Option<u64>,

    api_url: String,
}

impl AppState {
    pub fn new(api_url: impl Into<String>) -> Self {
        AppState {
            fetch: FetchState::Loading,
            scroll: 0,
            show_help: false,
            fetch_time_ms: 0,
            next_request_id: 1,
            pending_request_id: None,
            api_url: api_url.into(),
        }
    }

    /// Generate a unique request ID
    fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Prepare the single startup fetch.
    ///
    /// Returns `None` if a request is already pending or the state has
    /// already reached a terminal value, so at most one fetch is ever
    /// issued per mount.
    pub fn begin_fetch(&mut self) -> Option<NetworkCommand> {
        if self.pending_request_id.is_some() || self.fetch.is_terminal() {
            return None;
        }
        let id = self.next_id();
        self.pending_request_id = Some(id);
        Some(NetworkCommand::FetchData {
            id,
            url: self.api_url.clone(),
        })
    }

    /// Apply a network response to the fetch cell.
    ///
    /// The one transition function: `Loading -> Succeeded | Failed`. A
    /// response whose id does not match the pending request is stale and
    /// ignored.
    pub fn handle_response(&mut self, response: NetworkResponse) {
        if self.pending_request_id != Some(response.id()) {
            tracing::warn!(id = response.id(), "Dropping stale network response");
            return;
        }
        if self.fetch.is_terminal() {
            return;
        }
        self.pending_request_id = None;

        match response {
            NetworkResponse::Payload { payload, time_ms, .. } => {
                self.fetch_time_ms = time_ms;
                self.fetch = FetchState::Succeeded(payload);
            }
            NetworkResponse::Error { message, time_ms, .. } => {
                tracing::error!(error = %message, "Data fetch failed");
                self.fetch_time_ms = time_ms;
                self.fetch = FetchState::Failed;
            }
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            fetch: self.fetch.clone(),
            scroll: self.scroll,
            fetch_time_ms: self.fetch_time_ms,
            show_help: self.show_help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApiPayload;

    fn payload(message: &str, data: serde_json::Value) -> ApiPayload {
        ApiPayload {
            message: message.to_string(),
            data: data.as_array().cloned().unwrap_or_default(),
        }
    }

    fn state_with_pending() -> (AppState, u64) {
        let mut state = AppState::new("http://localhost:5000/api/data");
        let cmd = state.begin_fetch().expect("first fetch must be issued");
        let id = match cmd {
            NetworkCommand::FetchData { id, .. } => id,
            other => panic!("unexpected command: {:?}", other),
        };
        (state, id)
    }

    #[test]
    fn test_starts_loading() {
        let state = AppState::new("http://localhost:5000/api/data");
        assert_eq!(state.fetch, FetchState::Loading);
    }

    #[test]
    fn test_only_one_fetch_per_mount() {
        let (mut state, _) = state_with_pending();
        assert!(state.begin_fetch().is_none());
    }

    #[test]
    fn test_success_transitions_to_succeeded() {
        let (mut state, id) = state_with_pending();
        state.handle_response(NetworkResponse::Payload {
            id,
            payload: payload("Hello", serde_json::json!([1, 2, 3])),
            time_ms: 12,
        });
        match &state.fetch {
            FetchState::Succeeded(p) => {
                assert_eq!(p.message, "Hello");
                assert_eq!(p.data.len(), 3);
            }
            other => panic!("expected Succeeded, got {:?}", other),
        }
        assert_eq!(state.fetch_time_ms, 12);
    }

    #[test]
    fn test_error_transitions_to_failed() {
        let (mut state, id) = state_with_pending();
        state.handle_response(NetworkResponse::Error {
            id,
            message: String::from("Connection refused"),
            time_ms: 5,
        });
        assert_eq!(state.fetch, FetchState::Failed);
    }

    #[test]
    fn test_stale_id_is_ignored() {
        let (mut state, id) = state_with_pending();
        state.handle_response(NetworkResponse::Error {
            id: id + 99,
            message: String::from("stale"),
            time_ms: 1,
        });
        assert_eq!(state.fetch, FetchState::Loading);
    }

    #[test]
    fn test_no_second_transition() {
        let (mut state, id) = state_with_pending();
        state.handle_response(NetworkResponse::Error {
            id,
            message: String::from("boom"),
            time_ms: 1,
        });
        // A late duplicate must not overwrite the terminal state
        state.handle_response(NetworkResponse::Payload {
            id,
            payload: payload("Late", serde_json::json!([])),
            time_ms: 2,
        });
        assert_eq!(state.fetch, FetchState::Failed);
        // And no re-fetch can be started
        assert!(state.begin_fetch().is_none());
    }

    #[test]
    fn test_render_state_snapshot() {
        let (mut state, id) = state_with_pending();
        state.handle_response(NetworkResponse::Payload {
            id,
            payload: payload("Empty", serde_json::json!([])),
            time_ms: 3,
        });
        let render = state.to_render_state();
        assert_eq!(render.fetch, state.fetch);
        assert_eq!(render.fetch_time_ms, 3);
        // Snapshots of unchanged state are identical
        assert_eq!(render, state.to_render_state());
    }

    #[test]
    fn test_scroll_saturates_at_top() {
        let mut state = AppState::new("http://localhost:5000/api/data");
        state.scroll_up();
        assert_eq!(state.scroll, 0);
        state.scroll_down();
        state.scroll_down();
        state.scroll_up();
        assert_eq!(state.scroll, 1);
    }
}
