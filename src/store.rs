//! Durable storage for the event collection.
//!
//! The full event list lives in a single slot file as a JSON array, with no
//! envelope and no version field. Every save rewrites the slot in its
//! entirety; a missing or empty slot reads back as an empty collection.

use std::path::{Path, PathBuf};

use log::debug;

use crate::config::PlannerConfig;
use crate::error::{PlannerError, PlannerResult};
use crate::event::Event;

/// Fixed name of the persistence slot.
pub const STORAGE_KEY: &str = "planner_events_1";

/// Adapter between the in-memory event collection and its on-disk slot.
pub struct EventStore {
    path: PathBuf,
}

impl EventStore {
    /// A store whose slot file lives in the given directory.
    pub fn new(dir: &Path) -> EventStore {
        EventStore {
            path: dir.join(format!("{STORAGE_KEY}.json")),
        }
    }

    /// A store in the configured data directory.
    pub fn open_default() -> PlannerResult<EventStore> {
        let config = PlannerConfig::load()?;
        Ok(EventStore::new(&config.data_path()))
    }

    /// Path to the slot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the slot. A missing or empty slot is an empty collection;
    /// malformed JSON is a fatal fault surfaced to the caller.
    pub fn load(&self) -> PlannerResult<Vec<Event>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let events: Vec<Event> = serde_json::from_str(&content)
            .map_err(|e| PlannerError::Serialization(e.to_string()))?;

        debug!("loaded {} events from {}", events.len(), self.path.display());
        Ok(events)
    }

    /// Overwrite the slot with the full collection. Writes go through a
    /// temp file + rename so a crash never leaves a partial slot behind.
    pub fn save(&self, events: &[Event]) -> PlannerResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(events)
            .map_err(|e| PlannerError::Serialization(e.to_string()))?;

        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;

        debug!("saved {} events to {}", events.len(), self.path.display());
        Ok(())
    }
}
