//! App layer - central state management and the fetch state machine
//!
//! The App actor receives UI events and network responses,
//! updates state, and emits network commands and render state.

pub mod state;
pub mod actor;

pub use state::AppState;
pub use actor::AppActor;
