//! Render state - data structure sent from App layer to UI for rendering

use crate::models::FetchState;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderState {
    /// Lifecycle of the one startup fetch
    pub fetch: FetchState,
    /// Vertical scroll offset of the page
    pub scroll: u16,
    /// How long the fetch took, for the status bar (0 while loading)
    pub fetch_time_ms: u64,
    /// Help popup visibility
    pub show_help: bool,
}
