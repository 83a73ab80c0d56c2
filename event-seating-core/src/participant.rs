use core::fmt::{self, Display};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::table::TableId;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub String);

impl ParticipantId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    M,
    F,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Website,
    App,
}

impl Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Website => "website",
            Self::App => "app",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Unassigned,
    Assigned,
    Refunded,
}

/// Where a participant currently stands. Only an assigned participant
/// carries a table, so status and table reference can't disagree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "status", content = "tableId", rename_all = "lowercase")]
pub enum Placement {
    #[default]
    Unassigned,
    Assigned(TableId),
    Refunded,
}

impl Placement {
    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            Self::Unassigned => Status::Unassigned,
            Self::Assigned(_) => Status::Assigned,
            Self::Refunded => Status::Refunded,
        }
    }

    #[must_use]
    pub const fn table_id(&self) -> Option<&TableId> {
        match self {
            Self::Assigned(table_id) => Some(table_id),
            Self::Unassigned | Self::Refunded => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub photo_url: String,
    pub description: String,
    pub interests: Vec<String>,
    pub source: Source,
    #[serde(flatten)]
    pub placement: Placement,
    pub purchase_time: DateTime<Utc>,
    /// 0 to 100 by convention, not clamped.
    pub popularity_score: u8,
}

impl Participant {
    #[must_use]
    pub const fn status(&self) -> Status {
        self.placement.status()
    }

    #[must_use]
    pub const fn table_id(&self) -> Option<&TableId> {
        self.placement.table_id()
    }

    #[must_use]
    pub fn is_seated_at(&self, table_id: &TableId) -> bool {
        self.table_id() == Some(table_id)
    }
}

/// Field level update for a single participant. Unset fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct ParticipantPatch {
    pub name: Option<String>,
    pub age: Option<u8>,
    pub description: Option<String>,
    pub interests: Option<Vec<String>>,
    pub popularity_score: Option<u8>,
    pub placement: Option<Placement>,
}

impl ParticipantPatch {
    pub fn placement(placement: Placement) -> Self {
        Self {
            placement: Some(placement),
            ..Self::default()
        }
    }

    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..self
        }
    }

    pub fn with_popularity_score(self, popularity_score: u8) -> Self {
        Self {
            popularity_score: Some(popularity_score),
            ..self
        }
    }

    /// Builds the patched record without touching `participant`.
    #[must_use]
    pub fn apply_to(self, participant: &Participant) -> Participant {
        let mut next = participant.clone();
        if let Some(name) = self.name {
            next.name = name;
        }
        if let Some(age) = self.age {
            next.age = age;
        }
        if let Some(description) = self.description {
            next.description = description;
        }
        if let Some(interests) = self.interests {
            next.interests = interests;
        }
        if let Some(popularity_score) = self.popularity_score {
            next.popularity_score = popularity_score;
        }
        if let Some(placement) = self.placement {
            next.placement = placement;
        }
        next
    }
}
