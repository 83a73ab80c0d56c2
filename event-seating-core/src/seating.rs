use crate::assignment;
use crate::error::SeatingError;
use crate::participant::{Participant, ParticipantId, Placement};
use crate::stats::{self, TableStats};
use crate::store::ParticipantStore;
use crate::table::{TableId, TableRegistry};
use crate::view;

/// The table registry and the participant store side by side.
///
/// Only the store is ever mutated. Statistics and views are recomputed from
/// both on each call, so they can't go stale.
#[derive(Debug, Clone, Default)]
pub struct Seating {
    registry: TableRegistry,
    store: ParticipantStore,
}

impl Seating {
    #[must_use]
    pub fn new(registry: TableRegistry) -> Self {
        Self {
            registry,
            store: ParticipantStore::new(),
        }
    }

    /// Adds a participant, e.g. from seed data or a ticket purchase.
    pub fn admit(&mut self, participant: Participant) -> Result<(), SeatingError> {
        if let Placement::Assigned(table_id) = &participant.placement {
            if !self.registry.contains(table_id) {
                return Err(SeatingError::InvalidTable(table_id.clone()));
            }
        }
        self.store.insert(participant)
    }

    #[must_use]
    pub const fn registry(&self) -> &TableRegistry {
        &self.registry
    }

    #[must_use]
    pub const fn store(&self) -> &ParticipantStore {
        &self.store
    }

    #[must_use]
    pub fn participant(&self, id: &ParticipantId) -> Option<&Participant> {
        self.store.get(id)
    }

    pub fn assign(
        &mut self,
        participant_id: &ParticipantId,
        table_id: &TableId,
    ) -> Result<Participant, SeatingError> {
        assignment::assign(&mut self.store, &self.registry, participant_id, table_id)
    }

    pub fn unassign(&mut self, participant_id: &ParticipantId) -> Result<Participant, SeatingError> {
        assignment::unassign(&mut self.store, participant_id)
    }

    pub fn refund(&mut self, participant_id: &ParticipantId) -> Result<Participant, SeatingError> {
        assignment::refund(&mut self.store, participant_id)
    }

    #[must_use]
    pub fn table_stats(&self) -> Vec<TableStats> {
        stats::compute_all(self.store.list(), self.registry.list())
    }

    pub fn stats_for(&self, table_id: &TableId) -> Result<TableStats, SeatingError> {
        let table = self
            .registry
            .get(table_id)
            .ok_or_else(|| SeatingError::TableNotFound(table_id.clone()))?;
        let mut stats = stats::compute_all(self.store.list(), core::slice::from_ref(table));
        Ok(stats.remove(0))
    }

    #[must_use]
    pub fn queue(&self) -> Vec<&Participant> {
        view::unassigned(self.store.list())
    }

    #[must_use]
    pub fn roster(&self, table_id: &TableId) -> Vec<&Participant> {
        view::by_table(self.store.list(), table_id)
    }

    #[must_use]
    pub fn refunds(&self) -> Vec<&Participant> {
        view::refunded(self.store.list())
    }
}

#[cfg(test)]
mod tests {
    use core::num::NonZeroU32;

    use super::Seating;
    use crate::error::SeatingError;
    use crate::participant::tests::participant;
    use crate::participant::{Gender, Participant, ParticipantId, Placement, Status};
    use crate::table::{TableId, TableRegistry};

    fn seating() -> Seating {
        let mut seating = Seating::new(TableRegistry::uniform(
            2,
            NonZeroU32::new(8).unwrap(),
            "Mesa",
        ));
        seating.admit(participant("u1", Gender::M)).unwrap();
        seating.admit(participant("u2", Gender::F)).unwrap();
        seating
    }

    fn assert_consistent(seating: &Seating) {
        for participant in seating.store().list() {
            assert_eq!(
                participant.status() == Status::Assigned,
                participant.table_id().is_some()
            );
        }
        for stats in seating.table_stats() {
            assert_eq!(stats.count, seating.roster(&stats.id).len());
            assert_eq!(stats.male_count + stats.female_count, stats.count);
        }
    }

    #[test]
    fn admit_rejects_unknown_tables() {
        let mut seating = seating();
        let stray = Participant {
            placement: Placement::Assigned("t9".into()),
            ..participant("u3", Gender::F)
        };
        assert_eq!(
            seating.admit(stray),
            Err(SeatingError::InvalidTable("t9".into()))
        );
        assert!(seating.participant(&"u3".into()).is_none());
    }

    #[test]
    fn reassignment_moves_one_seat() {
        let mut seating = seating();
        let id = ParticipantId::from("u1");
        let (t1, t2) = (TableId::from("t1"), TableId::from("t2"));

        seating.assign(&id, &t1).unwrap();
        let before = (
            seating.stats_for(&t1).unwrap().count,
            seating.stats_for(&t2).unwrap().count,
        );
        seating.assign(&id, &t2).unwrap();

        assert_eq!(seating.stats_for(&t1).unwrap().count, before.0 - 1);
        assert_eq!(seating.stats_for(&t2).unwrap().count, before.1 + 1);
        assert_consistent(&seating);
    }

    #[test]
    fn refund_moves_participant_out_of_every_view() {
        let mut seating = seating();
        let id = ParticipantId::from("u2");
        seating.assign(&id, &"t1".into()).unwrap();
        assert_eq!(seating.stats_for(&"t1".into()).unwrap().count, 1);

        seating.refund(&id).unwrap();
        assert_eq!(seating.stats_for(&"t1".into()).unwrap().count, 0);
        assert!(seating.queue().iter().all(|p| p.id != id));
        assert!(seating.roster(&"t1".into()).is_empty());
        assert_eq!(seating.refunds().len(), 1);
        assert_consistent(&seating);
    }

    #[test]
    fn stats_for_unknown_table() {
        assert_eq!(
            seating().stats_for(&"t5".into()),
            Err(SeatingError::TableNotFound("t5".into()))
        );
    }

    #[test]
    fn invariants_hold_after_mixed_operations() {
        let mut seating = seating();
        let (u1, u2) = (ParticipantId::from("u1"), ParticipantId::from("u2"));
        seating.assign(&u1, &"t1".into()).unwrap();
        seating.assign(&u2, &"t1".into()).unwrap();
        assert_consistent(&seating);
        seating.unassign(&u1).unwrap();
        assert_consistent(&seating);
        seating.refund(&u2).unwrap();
        assert_consistent(&seating);
        seating.assign(&u2, &"t2".into()).unwrap();
        seating.assign(&u1, &"nope".into()).unwrap_err();
        assert_consistent(&seating);
        assert_eq!(seating.queue().len(), 1);
    }
}
