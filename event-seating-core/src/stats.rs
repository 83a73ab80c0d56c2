use itertools::Itertools as _;
use serde::Serialize;

use crate::participant::{Gender, Participant};
use crate::table::{Table, TableId};

/// Occupancy and gender balance of one table. Always derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableStats {
    pub id: TableId,
    pub name: String,
    pub capacity: u32,
    pub count: usize,
    pub male_count: usize,
    pub female_count: usize,
    pub percentage_full: f64,
    /// `male_count / count`, 0 for an empty table.
    pub male_ratio: f64,
}

impl TableStats {
    fn derive(table: &Table, male_count: usize, female_count: usize) -> Self {
        let count = male_count + female_count;
        let capacity = table.capacity.get();
        Self {
            id: table.id.clone(),
            name: table.name.clone(),
            capacity,
            count,
            male_count,
            female_count,
            percentage_full: 100.0 * count as f64 / f64::from(capacity),
            male_ratio: if count == 0 {
                0.0
            } else {
                male_count as f64 / count as f64
            },
        }
    }

    /// Whether the table should be flagged as full. Nothing prevents seating
    /// more people than `capacity`.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.count >= self.capacity as usize
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        (self.capacity as usize).saturating_sub(self.count)
    }

    #[must_use]
    pub fn female_ratio(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.female_count as f64 / self.count as f64
        }
    }
}

/// Statistics for every table, in table order.
///
/// Assigned participants are counted per `(table, gender)` in a single pass,
/// followed by one lookup per table. A participant pointing at a table that
/// isn't in `tables` is simply not counted anywhere.
pub fn compute_all<'a>(
    participants: impl IntoIterator<Item = &'a Participant>,
    tables: &[Table],
) -> Vec<TableStats> {
    let counts = participants
        .into_iter()
        .filter_map(|participant| {
            participant
                .table_id()
                .map(|table_id| (table_id, participant.gender))
        })
        .counts();

    tables
        .iter()
        .map(|table| {
            let count_of = |gender| counts.get(&(&table.id, gender)).copied().unwrap_or(0);
            TableStats::derive(table, count_of(Gender::M), count_of(Gender::F))
        })
        .collect()
}
