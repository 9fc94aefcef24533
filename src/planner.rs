//! Planner facade: the single entry point for reading and mutating state.
//!
//! The planner owns the live `EventState` and the `EventStore`, generates
//! event ids, and turns caller data into reducer actions. Every dispatch
//! persists the full collection before returning, so the slot on disk always
//! matches the state a reader sees.

use log::{debug, info};
use uuid::Uuid;

use crate::error::PlannerResult;
use crate::event::{Attendee, Event, EventDraft, RsvpStatus};
use crate::state::{EventAction, EventState};
use crate::store::EventStore;

pub struct Planner {
    state: EventState,
    store: EventStore,
}

impl Planner {
    /// Open the planner against the configured data directory.
    pub fn open() -> PlannerResult<Planner> {
        Planner::with_store(EventStore::open_default()?)
    }

    /// Open the planner on an explicit store. Used by tests and by embedders
    /// that manage their own data directory.
    pub fn with_store(store: EventStore) -> PlannerResult<Planner> {
        let events = store.load()?;
        info!("planner opened with {} events", events.len());

        Ok(Planner {
            state: EventState::new(events),
            store,
        })
    }

    // =========================================================================
    // Read model
    // =========================================================================

    pub fn state(&self) -> &EventState {
        &self.state
    }

    pub fn events(&self) -> &[Event] {
        &self.state.events
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.state.event(id)
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Create an event from a draft, generating a fresh id.
    pub fn create_event(&mut self, draft: EventDraft) -> PlannerResult<()> {
        let event = draft.into_event(Uuid::new_v4().to_string());
        self.dispatch(EventAction::AddEvent(event))
    }

    /// Replace an event wholesale. The caller supplies the unchanged id;
    /// an unknown id leaves the collection as it was.
    pub fn update_event(&mut self, event: Event) -> PlannerResult<()> {
        self.dispatch(EventAction::UpdateEvent(event))
    }

    pub fn delete_event(&mut self, id: &str) -> PlannerResult<()> {
        self.dispatch(EventAction::DeleteEvent(id.to_string()))
    }

    /// Add an attendee with the default `Yes` response. Duplicate emails are
    /// rejected by the reducer without signal.
    pub fn add_attendee(&mut self, event_id: &str, email: &str) -> PlannerResult<()> {
        self.dispatch(EventAction::AddAttendee {
            event_id: event_id.to_string(),
            attendee: Attendee::new(email),
        })
    }

    pub fn update_attendee_status(
        &mut self,
        event_id: &str,
        email: &str,
        status: RsvpStatus,
    ) -> PlannerResult<()> {
        self.dispatch(EventAction::UpdateAttendeeStatus {
            event_id: event_id.to_string(),
            email: email.to_string(),
            status,
        })
    }

    /// Apply an action and rewrite the slot, whether or not the action
    /// changed anything.
    fn dispatch(&mut self, action: EventAction) -> PlannerResult<()> {
        debug!("dispatch {}", action.kind());
        self.state.apply(action);
        self.store.save(&self.state.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_planner(dir: &std::path::Path) -> Planner {
        Planner::with_store(EventStore::new(dir)).unwrap()
    }

    fn make_draft(title: &str) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            description: "d".to_string(),
            date: "2025-07-01".to_string(),
            time: "18:00".to_string(),
            location: "Park".to_string(),
            attendees: vec![],
        }
    }

    #[test]
    fn create_event_generates_an_id_and_empty_attendees() {
        let dir = tempfile::tempdir().unwrap();
        let mut planner = make_planner(dir.path());

        planner.create_event(make_draft("Summer BBQ")).unwrap();

        let events = planner.events();
        assert_eq!(events.len(), 1);
        assert!(!events[0].id.is_empty());
        assert_eq!(events[0].title, "Summer BBQ");
        assert!(events[0].attendees.is_empty());
    }

    #[test]
    fn generated_ids_are_unique() {
        let dir = tempfile::tempdir().unwrap();
        let mut planner = make_planner(dir.path());

        planner.create_event(make_draft("a")).unwrap();
        planner.create_event(make_draft("b")).unwrap();

        assert_ne!(planner.events()[0].id, planner.events()[1].id);
    }

    #[test]
    fn duplicate_attendee_leaves_one_entry() {
        let dir = tempfile::tempdir().unwrap();
        let mut planner = make_planner(dir.path());
        planner.create_event(make_draft("BBQ")).unwrap();
        let id = planner.events()[0].id.clone();

        planner.add_attendee(&id, "a@x.com").unwrap();
        planner.add_attendee(&id, "a@x.com").unwrap();

        assert_eq!(planner.event(&id).unwrap().attendees.len(), 1);
    }

    #[test]
    fn attendee_status_can_be_changed() {
        let dir = tempfile::tempdir().unwrap();
        let mut planner = make_planner(dir.path());
        planner.create_event(make_draft("BBQ")).unwrap();
        let id = planner.events()[0].id.clone();

        planner.add_attendee(&id, "a@x.com").unwrap();
        planner
            .update_attendee_status(&id, "a@x.com", RsvpStatus::No)
            .unwrap();

        let attendee = &planner.event(&id).unwrap().attendees[0];
        assert_eq!(attendee.status, RsvpStatus::No);
        assert_eq!(planner.event(&id).unwrap().confirmed_count(), 0);
    }

    #[test]
    fn delete_removes_only_the_matching_event() {
        let dir = tempfile::tempdir().unwrap();
        let mut planner = make_planner(dir.path());
        planner.create_event(make_draft("first")).unwrap();
        planner.create_event(make_draft("second")).unwrap();
        let first_id = planner.events()[0].id.clone();

        planner.delete_event(&first_id).unwrap();

        assert_eq!(planner.events().len(), 1);
        assert_eq!(planner.events()[0].title, "second");
    }

    #[test]
    fn update_event_replaces_the_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut planner = make_planner(dir.path());
        planner.create_event(make_draft("Draft title")).unwrap();

        let mut event = planner.events()[0].clone();
        event.title = "Final title".to_string();
        event.location = "Beach".to_string();
        planner.update_event(event).unwrap();

        assert_eq!(planner.events()[0].title, "Final title");
        assert_eq!(planner.events()[0].location, "Beach");
    }

    #[test]
    fn state_survives_a_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let id = {
            let mut planner = make_planner(dir.path());
            planner.create_event(make_draft("BBQ")).unwrap();
            let id = planner.events()[0].id.clone();
            planner.add_attendee(&id, "a@x.com").unwrap();
            planner
                .update_attendee_status(&id, "a@x.com", RsvpStatus::Maybe)
                .unwrap();
            id
        };

        let reopened = make_planner(dir.path());
        let event = reopened.event(&id).unwrap();
        assert_eq!(event.title, "BBQ");
        assert_eq!(event.attendees.len(), 1);
        assert_eq!(event.attendees[0].status, RsvpStatus::Maybe);
    }

    #[test]
    fn every_operation_persists_even_noops() {
        let dir = tempfile::tempdir().unwrap();
        let mut planner = make_planner(dir.path());

        // A no-op delete on an empty planner still writes the slot.
        planner.delete_event("ghost").unwrap();

        let store = EventStore::new(dir.path());
        assert!(store.path().exists());
        assert_eq!(store.load().unwrap(), Vec::new());
    }
}
