use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::error::SeatingError;
use crate::participant::{Participant, ParticipantId, ParticipantPatch};

/// The authoritative participant collection, keyed by id and kept in
/// insertion order so views render deterministically.
#[derive(Debug, Clone, Default)]
pub struct ParticipantStore {
    participants: IndexMap<ParticipantId, Participant>,
}

impl ParticipantStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, id: &ParticipantId) -> Option<&Participant> {
        self.participants.get(id)
    }

    pub fn list(&self) -> impl Iterator<Item = &Participant> + Clone {
        self.participants.values()
    }

    pub fn insert(&mut self, participant: Participant) -> Result<(), SeatingError> {
        match self.participants.entry(participant.id.clone()) {
            Entry::Occupied(occupied) => {
                Err(SeatingError::DuplicateParticipant(occupied.key().clone()))
            }
            Entry::Vacant(vacant) => {
                vacant.insert(participant);
                Ok(())
            }
        }
    }

    /// Applies `patch` to the participant. The stored record is swapped for
    /// the fully patched one in one step.
    pub fn update(
        &mut self,
        id: &ParticipantId,
        patch: ParticipantPatch,
    ) -> Result<&Participant, SeatingError> {
        let slot = self
            .participants
            .get_mut(id)
            .ok_or_else(|| SeatingError::ParticipantNotFound(id.clone()))?;
        *slot = patch.apply_to(slot);
        Ok(slot)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

impl FromIterator<Participant> for ParticipantStore {
    /// Later duplicates replace earlier ones, keeping the first position.
    fn from_iter<T: IntoIterator<Item = Participant>>(iter: T) -> Self {
        Self {
            participants: iter
                .into_iter()
                .map(|participant| (participant.id.clone(), participant))
                .collect(),
        }
    }
}
