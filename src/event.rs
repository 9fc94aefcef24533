//! Core event types for the planner.
//!
//! These types are the single root of the domain: an ordered collection of
//! events, each carrying an ordered attendee list with RSVP responses.
//! All date/time/location fields are free text; the core enforces no format
//! on them.

use serde::{Deserialize, Serialize};

/// A planned event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Opaque unique identifier, immutable after creation.
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    /// Insertion order is display order. Emails are unique within one event.
    #[serde(default)]
    pub attendees: Vec<Attendee>,
}

impl Event {
    /// Number of attendees who responded `Yes`.
    pub fn confirmed_count(&self) -> usize {
        self.attendees
            .iter()
            .filter(|a| a.status == RsvpStatus::Yes)
            .count()
    }

    /// Whether an attendee with this email is already on the list.
    /// Comparison is case-sensitive.
    pub fn has_attendee(&self, email: &str) -> bool {
        self.attendees.iter().any(|a| a.email == email)
    }
}

/// An event attendee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendee {
    pub email: String,
    pub status: RsvpStatus,
}

impl Attendee {
    /// A new attendee with the default `Yes` response.
    pub fn new(email: impl Into<String>) -> Self {
        Attendee {
            email: email.into(),
            status: RsvpStatus::Yes,
        }
    }
}

/// RSVP response, serialized as "Yes" / "No" / "Maybe".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RsvpStatus {
    Yes,
    No,
    Maybe,
}

/// Payload for creating an event: everything but the id, which the planner
/// generates. Attendees may be collected up front (the create form allows
/// it) and default to none.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    #[serde(default)]
    pub attendees: Vec<Attendee>,
}

impl EventDraft {
    /// Build the full event record for a freshly generated id.
    pub fn into_event(self, id: String) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            date: self.date,
            time: self.time,
            location: self.location,
            attendees: self.attendees,
        }
    }
}
