//! Read-only filters the console renders from.

use crate::participant::{Participant, Status};
use crate::stats::TableStats;
use crate::table::TableId;

pub fn by_status<'a>(
    participants: impl IntoIterator<Item = &'a Participant>,
    status: Status,
) -> Vec<&'a Participant> {
    participants
        .into_iter()
        .filter(|participant| participant.status() == status)
        .collect()
}

/// The incoming queue.
pub fn unassigned<'a>(participants: impl IntoIterator<Item = &'a Participant>) -> Vec<&'a Participant> {
    by_status(participants, Status::Unassigned)
}

pub fn refunded<'a>(participants: impl IntoIterator<Item = &'a Participant>) -> Vec<&'a Participant> {
    by_status(participants, Status::Refunded)
}

/// Everyone seated at `table_id`. Empty for a table nobody sits at,
/// including one that doesn't exist.
pub fn by_table<'a>(
    participants: impl IntoIterator<Item = &'a Participant>,
    table_id: &TableId,
) -> Vec<&'a Participant> {
    participants
        .into_iter()
        .filter(|participant| participant.is_seated_at(table_id))
        .collect()
}

/// Tables a participant can be moved to: all of them except `current`.
pub fn reassignment_targets<'a>(
    stats: &'a [TableStats],
    current: Option<&TableId>,
) -> impl Iterator<Item = &'a TableStats> + 'a {
    let current = current.cloned();
    stats
        .iter()
        .filter(move |table| Some(&table.id) != current.as_ref())
}

#[cfg(test)]
mod tests {
    use core::num::NonZeroU32;

    use super::{by_table, reassignment_targets, refunded, unassigned};
    use crate::participant::tests::participant;
    use crate::participant::{Gender, Participant, Placement};
    use crate::stats::compute_all;
    use crate::table::{TableId, TableRegistry};

    fn guests() -> Vec<Participant> {
        vec![
            participant("u1", Gender::M),
            Participant {
                placement: Placement::Assigned("t1".into()),
                ..participant("u2", Gender::F)
            },
            Participant {
                placement: Placement::Refunded,
                ..participant("u3", Gender::F)
            },
            participant("u4", Gender::F),
            Participant {
                placement: Placement::Assigned("t2".into()),
                ..participant("u5", Gender::M)
            },
        ]
    }

    fn ids(participants: &[&Participant]) -> Vec<String> {
        participants.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn queue_excludes_assigned_and_refunded() {
        let guests = guests();
        assert_eq!(ids(&unassigned(&guests)), ["u1", "u4"]);
        assert_eq!(ids(&refunded(&guests)), ["u3"]);
    }

    #[test]
    fn roster_per_table() {
        let guests = guests();
        assert_eq!(ids(&by_table(&guests, &"t1".into())), ["u2"]);
        assert_eq!(ids(&by_table(&guests, &"t2".into())), ["u5"]);
        assert!(by_table(&guests, &"t7".into()).is_empty());
    }

    #[test]
    fn targets_skip_the_current_table() {
        let registry = TableRegistry::uniform(3, NonZeroU32::new(8).unwrap(), "Mesa");
        let stats = compute_all(&guests(), registry.list());
        let current = TableId::from("t2");
        let targets: Vec<&str> = reassignment_targets(&stats, Some(&current))
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(targets, ["t1", "t3"]);
        assert_eq!(reassignment_targets(&stats, None).count(), 3);
    }
}
