use crate::{
    internal::probe,
    runtime::{ExecutionUnit, Role},
};

/// Outcome of classifying one live execution unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification<A> {
    /// The runtime doesn't manage the unit; it is dumped as a plain thread.
    NotParticipant,
    /// The unit plays the actor role, with the actor it currently owns.
    Actor(Option<A>),
    /// Runtime machinery outside the actor role. Not dumped.
    Internal,
}

impl<A> Classification<A> {
    /// Role tag of the unit, `None` for non-participants.
    pub fn role(&self) -> Option<Role> {
        match self {
            Classification::NotParticipant => None,
            Classification::Actor(_) => Some(Role::Actor),
            Classification::Internal => Some(Role::Other),
        }
    }
}

/// Decide how a unit takes part in the dump.
///
/// Never blocks and never fails: a role query that panics (typically a
/// unit terminating under our feet) classifies the unit as a
/// non-participant, and a failing actor lookup leaves the actor slot empty.
pub fn classify<U: ExecutionUnit>(unit: &U) -> Classification<U::Actor> {
    match probe("unit.role", || unit.role()).flatten() {
        None => Classification::NotParticipant,
        Some(Role::Other) => Classification::Internal,
        Some(Role::Actor) => Classification::Actor(probe("unit.actor", || unit.actor()).flatten()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeActor, FakeUnit};

    #[test]
    fn plain_threads_are_not_participants() {
        let unit = FakeUnit::thread(1);
        assert_eq!(classify(&unit), Classification::NotParticipant);
        assert_eq!(classify(&unit).role(), None);
    }

    #[test]
    fn actor_units_carry_their_actor() {
        let actor = FakeActor::new(7);
        let unit = FakeUnit::actor(1, actor.clone());
        assert_eq!(classify(&unit), Classification::Actor(Some(actor)));
        assert_eq!(classify(&unit).role(), Some(Role::Actor));
    }

    #[test]
    fn actor_units_between_actors_have_empty_slot() {
        let unit = FakeUnit::idle_actor_thread(1);
        assert_eq!(classify(&unit), Classification::Actor(None));
    }

    #[test]
    fn internal_units_are_recognized() {
        let unit = FakeUnit::internal(3);
        assert_eq!(classify(&unit), Classification::Internal);
        assert_eq!(classify(&unit).role(), Some(Role::Other));
    }

    #[test]
    fn failing_role_query_degrades_to_not_participant() {
        let unit = FakeUnit::internal(3).panicking_role();
        assert_eq!(classify(&unit), Classification::NotParticipant);
    }

    #[test]
    fn failing_actor_lookup_degrades_to_empty_slot() {
        let unit = FakeUnit::actor(1, FakeActor::new(2)).panicking_actor();
        assert_eq!(classify(&unit), Classification::Actor(None));
    }
}
