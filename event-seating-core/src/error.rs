use thiserror::Error;

use crate::participant::ParticipantId;
use crate::table::TableId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeatingError {
    #[error("participant {0} does not exist")]
    ParticipantNotFound(ParticipantId),
    #[error("table {0} does not exist")]
    TableNotFound(TableId),
    #[error("table {0} is not part of the table registry")]
    InvalidTable(TableId),
    #[error("participant {0} already exists")]
    DuplicateParticipant(ParticipantId),
}
