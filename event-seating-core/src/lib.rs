#![allow(
    clippy::cast_precision_loss,
    reason = "participant counts stay far below f64 precision"
)]

pub mod assignment;
pub mod error;
pub mod participant;
pub mod seating;
pub mod stats;
pub mod store;
pub mod table;
pub mod view;

pub use error::SeatingError;
pub use participant::{Gender, Participant, ParticipantId, ParticipantPatch, Placement, Source, Status};
pub use seating::Seating;
pub use stats::TableStats;
pub use store::ParticipantStore;
pub use table::{Table, TableId, TableRegistry};
