use core::fmt::{self, Display};
use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableId(pub String);

impl TableId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TableId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for TableId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A seating group. Tables are created once at startup and never change
/// during a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub id: TableId,
    pub name: String,
    pub capacity: NonZeroU32,
}

impl Table {
    #[must_use]
    pub fn new(id: impl Into<TableId>, name: impl Into<String>, capacity: NonZeroU32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
        }
    }
}

/// The static set of tables, in display order.
///
/// Ids are expected to be unique; this is not checked; lookups return the
/// first table with a matching id.
#[derive(Debug, Clone, Default)]
pub struct TableRegistry {
    tables: Vec<Table>,
}

impl TableRegistry {
    #[must_use]
    pub const fn new(tables: Vec<Table>) -> Self {
        Self { tables }
    }

    /// `count` tables with ids `t1..=tN`, named `"{name_prefix} {i}"`.
    #[must_use]
    pub fn uniform(count: u32, capacity: NonZeroU32, name_prefix: &str) -> Self {
        Self::new(
            (1..=count)
                .map(|i| Table::new(format!("t{i}"), format!("{name_prefix} {i}"), capacity))
                .collect(),
        )
    }

    #[must_use]
    pub fn list(&self) -> &[Table] {
        &self.tables
    }

    #[must_use]
    pub fn get(&self, id: &TableId) -> Option<&Table> {
        self.tables.iter().find(|table| &table.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &TableId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
