//! The operator-facing side of the seating core.
//!
//! [`Console`] owns the session state behind a lock and is the only place the
//! message drafter is wired in. Mutations go straight to the core; drafting
//! works on a snapshot of the participant taken before any await.

pub mod error;
pub mod seed;
pub mod telemetry;

use core::time::Duration;
use std::sync::Arc;

use event_seating_core::{
    Participant, ParticipantId, Seating, SeatingError, TableId, TableStats,
};
use event_seating_drafting::{draft_or_placeholder, MessageDrafter, MessageIntent};
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::info;

pub use crate::error::ConsoleError;

/// A drafted message waiting for the operator to confirm it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingMessage {
    pub participant_id: ParticipantId,
    pub intent: MessageIntent,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub tables: Vec<TableStats>,
    pub queue: Vec<Participant>,
    pub refunded: usize,
}

#[derive(Clone)]
pub struct Console {
    seating: Arc<RwLock<Seating>>,
    drafter: Arc<dyn MessageDrafter>,
    drafting_timeout: Duration,
}

impl Console {
    #[must_use]
    pub fn new(
        seating: Seating,
        drafter: Arc<dyn MessageDrafter>,
        drafting_timeout: Duration,
    ) -> Self {
        Self {
            seating: Arc::new(RwLock::new(seating)),
            drafter,
            drafting_timeout,
        }
    }

    pub async fn assign(
        &self,
        participant_id: &ParticipantId,
        table_id: &TableId,
    ) -> Result<Participant, ConsoleError> {
        Ok(self.seating.write().await.assign(participant_id, table_id)?)
    }

    pub async fn unassign(&self, participant_id: &ParticipantId) -> Result<Participant, ConsoleError> {
        Ok(self.seating.write().await.unassign(participant_id)?)
    }

    pub async fn refund(&self, participant_id: &ParticipantId) -> Result<Participant, ConsoleError> {
        Ok(self.seating.write().await.refund(participant_id)?)
    }

    pub async fn participant(&self, participant_id: &ParticipantId) -> Option<Participant> {
        self.seating.read().await.participant(participant_id).cloned()
    }

    pub async fn tables(&self) -> Vec<TableStats> {
        self.seating.read().await.table_stats()
    }

    pub async fn table(&self, table_id: &TableId) -> Result<TableStats, ConsoleError> {
        Ok(self.seating.read().await.stats_for(table_id)?)
    }

    pub async fn queue(&self) -> Vec<Participant> {
        self.seating
            .read()
            .await
            .queue()
            .into_iter()
            .cloned()
            .collect()
    }

    pub async fn roster(&self, table_id: &TableId) -> Vec<Participant> {
        self.seating
            .read()
            .await
            .roster(table_id)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Tables, queue and refund count from one consistent read.
    pub async fn snapshot(&self) -> Snapshot {
        let seating = self.seating.read().await;
        Snapshot {
            tables: seating.table_stats(),
            queue: seating.queue().into_iter().cloned().collect(),
            refunded: seating.refunds().len(),
        }
    }

    async fn snapshot_of(&self, participant_id: &ParticipantId) -> Result<Participant, ConsoleError> {
        self.participant(participant_id)
            .await
            .ok_or_else(|| SeatingError::ParticipantNotFound(participant_id.clone()).into())
    }

    /// Drafts a message for the participant. Never fails because of the
    /// drafter; only an unknown participant is an error.
    pub async fn compose(
        &self,
        participant_id: &ParticipantId,
        intent: MessageIntent,
    ) -> Result<PendingMessage, ConsoleError> {
        let participant = self.snapshot_of(participant_id).await?;
        let text =
            draft_or_placeholder(&*self.drafter, &participant, intent, self.drafting_timeout)
                .await;
        Ok(PendingMessage {
            participant_id: participant.id,
            intent,
            text,
        })
    }

    /// Like [`Console::compose`] but runs in the background.
    pub async fn spawn_compose(
        &self,
        participant_id: &ParticipantId,
        intent: MessageIntent,
    ) -> Result<JoinHandle<PendingMessage>, ConsoleError> {
        let participant = self.snapshot_of(participant_id).await?;
        let drafter = Arc::clone(&self.drafter);
        let timeout = self.drafting_timeout;
        Ok(tokio::spawn(async move {
            let text = draft_or_placeholder(&*drafter, &participant, intent, timeout).await;
            PendingMessage {
                participant_id: participant.id,
                intent,
                text,
            }
        }))
    }

    /// The operator accepted `message`. A refund message refunds the
    /// participant, a welcome message only gets recorded as sent.
    pub async fn confirm(&self, message: PendingMessage) -> Result<Participant, ConsoleError> {
        match message.intent {
            MessageIntent::Refund => {
                let participant = self.refund(&message.participant_id).await?;
                info!(participant = %participant.id, "refund confirmed");
                Ok(participant)
            }
            MessageIntent::Welcome => {
                let participant = self.snapshot_of(&message.participant_id).await?;
                info!(participant = %participant.id, name = %participant.name, "welcome message sent");
                Ok(participant)
            }
        }
    }
}
