//! Event state and the action reducer.
//!
//! `EventState` is the single root of the domain, and `apply` is the only
//! code that mutates it. Transitions never fail: actions that target a
//! missing event, or that would break an invariant, leave the state
//! unchanged without signaling the caller.

use serde::{Deserialize, Serialize};

use crate::event::{Attendee, Event, RsvpStatus};

/// The full in-memory state: events in creation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventState {
    pub events: Vec<Event>,
}

/// One state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum EventAction {
    /// Append a fully-formed event (id already generated).
    AddEvent(Event),
    /// Replace the event with a matching id; unknown ids change nothing.
    UpdateEvent(Event),
    /// Remove the event with this id; absent ids are a no-op.
    DeleteEvent(String),
    /// Append an attendee to an event. A duplicate email on that event is
    /// silently rejected.
    AddAttendee { event_id: String, attendee: Attendee },
    /// Set the status of one attendee; absent event or email is a no-op.
    UpdateAttendeeStatus {
        event_id: String,
        email: String,
        status: RsvpStatus,
    },
}

impl EventAction {
    /// Stable action name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            EventAction::AddEvent(_) => "add_event",
            EventAction::UpdateEvent(_) => "update_event",
            EventAction::DeleteEvent(_) => "delete_event",
            EventAction::AddAttendee { .. } => "add_attendee",
            EventAction::UpdateAttendeeStatus { .. } => "update_attendee_status",
        }
    }
}

impl EventState {
    pub fn new(events: Vec<Event>) -> EventState {
        EventState { events }
    }

    /// Look an event up by id.
    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Apply one action to the state.
    pub fn apply(&mut self, action: EventAction) {
        match action {
            EventAction::AddEvent(event) => {
                self.events.push(event);
            }

            EventAction::UpdateEvent(event) => {
                if let Some(existing) = self.events.iter_mut().find(|e| e.id == event.id) {
                    *existing = event;
                }
            }

            EventAction::DeleteEvent(id) => {
                self.events.retain(|e| e.id != id);
            }

            EventAction::AddAttendee { event_id, attendee } => {
                if let Some(event) = self.events.iter_mut().find(|e| e.id == event_id)
                    && !event.has_attendee(&attendee.email)
                {
                    event.attendees.push(attendee);
                }
            }

            EventAction::UpdateAttendeeStatus {
                event_id,
                email,
                status,
            } => {
                if let Some(event) = self.events.iter_mut().find(|e| e.id == event_id)
                    && let Some(attendee) = event.attendees.iter_mut().find(|a| a.email == email)
                {
                    attendee.status = status;
                }
            }
        }
    }
}
