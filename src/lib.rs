//! Core state management for a local event planner.
//!
//! This crate is the state layer a presentation front-end drives:
//! - `event` — the domain types (`Event`, `Attendee`, `RsvpStatus`)
//! - `state` — `EventState` and its action reducer
//! - `store` — durable JSON persistence for the event collection
//! - `planner` — the `Planner` facade: id generation, dispatch, reads

pub mod config;
pub mod error;
pub mod event;
pub mod planner;
pub mod state;
pub mod store;

// Re-export the public surface at the crate root for convenience
pub use config::PlannerConfig;
pub use error::{PlannerError, PlannerResult};
pub use event::{Attendee, Event, EventDraft, RsvpStatus};
pub use planner::Planner;
pub use state::{EventAction, EventState};
pub use store::{EventStore, STORAGE_KEY};
