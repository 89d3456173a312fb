//! # East End
//!
//! A single-page landing site for the terminal. The page renders a header,
//! hero, live-data card, feature grid, and footer; on startup it issues
//! exactly one GET to the backend's `/api/data` endpoint and shows either a
//! loading spinner, the pretty-printed payload, or a fallback message.
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (fetch state machine)
//! - Network Layer (Tokio runtime)

pub mod models;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;
pub mod constants;

// Re-export commonly used types
pub use models::{ApiPayload, FetchState};
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use app::{AppActor, AppState};
pub use network::NetworkActor;
