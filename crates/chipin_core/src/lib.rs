//! chipin core: widget reducers, the chip-in settlement engine and the
//! ordered event queue that drives them. No UI dependency.

pub mod config;
pub mod error;
pub mod event_queue;
pub mod ids;
pub mod models;
pub mod script;
pub mod settlement;
pub mod state_builder;
pub mod ticker;

pub use config::PageConfig;
pub use error::CoreError;
pub use event_queue::{EventQueue, QueuedEvent};
pub use settlement::{aggregate, settle, settle_with_tolerance, SETTLE_EPSILON};
pub use state_builder::{apply_event, apply_events, build_state, PageState};
