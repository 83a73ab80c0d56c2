//! The three transitions of a participant's placement.
//!
//! ```text
//!  unassigned --assign--> assigned --unassign--> unassigned
//!      |                     |
//!      +------refund---------+-----> refunded --assign--> assigned
//! ```
//!
//! Capacity is advisory only: assigning to a full table succeeds and is
//! logged. Assigning a refunded participant is allowed as well.

use tracing::{debug, warn};

use crate::error::SeatingError;
use crate::participant::{Participant, ParticipantId, ParticipantPatch, Placement, Status};
use crate::store::ParticipantStore;
use crate::table::{TableId, TableRegistry};

pub fn assign(
    store: &mut ParticipantStore,
    registry: &TableRegistry,
    participant_id: &ParticipantId,
    table_id: &TableId,
) -> Result<Participant, SeatingError> {
    let table = registry
        .get(table_id)
        .ok_or_else(|| SeatingError::InvalidTable(table_id.clone()))?;
    let previous = store
        .get(participant_id)
        .ok_or_else(|| SeatingError::ParticipantNotFound(participant_id.clone()))?;
    if previous.status() == Status::Refunded {
        warn!(participant = %participant_id, table = %table_id, "assigning a refunded participant");
    }
    let already_there = previous.is_seated_at(table_id);

    let updated = store
        .update(
            participant_id,
            ParticipantPatch::placement(Placement::Assigned(table_id.clone())),
        )?
        .clone();

    if !already_there {
        let seated = store.list().filter(|p| p.is_seated_at(table_id)).count();
        if seated >= table.capacity.get() as usize {
            warn!(
                table = %table_id,
                seated,
                capacity = table.capacity.get(),
                "table is at or over capacity"
            );
        }
    }
    debug!(participant = %participant_id, table = %table_id, "assigned");
    Ok(updated)
}

/// Releases the participant's seat. Unassigned and refunded participants are
/// left as they are.
pub fn unassign(
    store: &mut ParticipantStore,
    participant_id: &ParticipantId,
) -> Result<Participant, SeatingError> {
    let current = store
        .get(participant_id)
        .ok_or_else(|| SeatingError::ParticipantNotFound(participant_id.clone()))?;
    if current.status() != Status::Assigned {
        debug!(participant = %participant_id, status = ?current.status(), "nothing to unassign");
        return Ok(current.clone());
    }
    let updated = store
        .update(participant_id, ParticipantPatch::placement(Placement::Unassigned))?
        .clone();
    debug!(participant = %participant_id, "unassigned");
    Ok(updated)
}

pub fn refund(
    store: &mut ParticipantStore,
    participant_id: &ParticipantId,
) -> Result<Participant, SeatingError> {
    let updated = store
        .update(participant_id, ParticipantPatch::placement(Placement::Refunded))?
        .clone();
    debug!(participant = %participant_id, "refunded");
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use core::num::NonZeroU32;

    use super::{assign, refund, unassign};
    use crate::error::SeatingError;
    use crate::participant::tests::participant;
    use crate::participant::{Gender, ParticipantId, Placement, Status};
    use crate::store::ParticipantStore;
    use crate::table::{TableId, TableRegistry};

    fn setup() -> (ParticipantStore, TableRegistry) {
        let store = [participant("u1", Gender::M), participant("u2", Gender::F)]
            .into_iter()
            .collect();
        (store, TableRegistry::uniform(2, NonZeroU32::new(1).unwrap(), "Mesa"))
    }

    #[test]
    fn assign_then_reassign_moves_the_participant() {
        let (mut store, registry) = setup();
        let id = ParticipantId::from("u1");
        assign(&mut store, &registry, &id, &"t1".into()).unwrap();
        let moved = assign(&mut store, &registry, &id, &"t2".into()).unwrap();
        assert_eq!(moved.placement, Placement::Assigned(TableId::from("t2")));
        assert_eq!(store.get(&id).unwrap().table_id(), Some(&TableId::from("t2")));
    }

    #[test]
    fn assign_to_unknown_table_changes_nothing() {
        let (mut store, registry) = setup();
        let id = ParticipantId::from("u1");
        let before = store.get(&id).unwrap().clone();
        assert_eq!(
            assign(&mut store, &registry, &id, &"nonexistent-table".into()),
            Err(SeatingError::InvalidTable("nonexistent-table".into()))
        );
        assert_eq!(store.get(&id), Some(&before));
    }

    #[test]
    fn assign_of_unknown_participant_fails() {
        let (mut store, registry) = setup();
        assert_eq!(
            assign(&mut store, &registry, &"ghost".into(), &"t1".into()),
            Err(SeatingError::ParticipantNotFound("ghost".into()))
        );
    }

    #[test]
    fn capacity_does_not_block_assignment() {
        let (mut store, registry) = setup();
        assign(&mut store, &registry, &"u1".into(), &"t1".into()).unwrap();
        let second = assign(&mut store, &registry, &"u2".into(), &"t1".into()).unwrap();
        assert_eq!(second.status(), Status::Assigned);
        assert_eq!(
            store
                .list()
                .filter(|p| p.is_seated_at(&"t1".into()))
                .count(),
            2
        );
    }

    #[test]
    fn unassign_is_idempotent() {
        let (mut store, registry) = setup();
        let id = ParticipantId::from("u2");
        assign(&mut store, &registry, &id, &"t1".into()).unwrap();
        let once = unassign(&mut store, &id).unwrap();
        let twice = unassign(&mut store, &id).unwrap();
        assert_eq!(once, twice);
        assert_eq!(twice.placement, Placement::Unassigned);
    }

    #[test]
    fn unassign_leaves_refunded_participants_refunded() {
        let (mut store, _registry) = setup();
        let id = ParticipantId::from("u1");
        refund(&mut store, &id).unwrap();
        assert_eq!(unassign(&mut store, &id).unwrap().status(), Status::Refunded);
    }

    #[test]
    fn refund_releases_the_seat_and_can_be_reassigned() {
        let (mut store, registry) = setup();
        let id = ParticipantId::from("u1");
        assign(&mut store, &registry, &id, &"t2".into()).unwrap();
        let refunded = refund(&mut store, &id).unwrap();
        assert_eq!(refunded.status(), Status::Refunded);
        assert_eq!(refunded.table_id(), None);

        let back = assign(&mut store, &registry, &id, &"t1".into()).unwrap();
        assert_eq!(back.placement, Placement::Assigned("t1".into()));
    }

    #[test]
    fn refund_of_unknown_participant_fails() {
        let (mut store, _registry) = setup();
        assert_eq!(
            refund(&mut store, &"ghost".into()),
            Err(SeatingError::ParticipantNotFound("ghost".into()))
        );
    }
}
