//! Best-effort drafting of participant notifications.
//!
//! Drafting is a capability the console injects; the seating core never
//! sees it. Failures end up as placeholder text instead of errors so a
//! confirmed assignment or refund is never held up by the drafting service.

pub mod error;
pub mod gemini;
pub mod prompt;

use core::fmt::{self, Display};
use core::time::Duration;

use async_trait::async_trait;
use event_seating_core::Participant;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

pub use crate::error::DraftingError;
pub use crate::gemini::GeminiDrafter;

/// Shown when the service answered but produced no text.
pub const EMPTY_DRAFT_PLACEHOLDER: &str = "Could not generate message.";
/// Shown for every other failure, including timeouts.
pub const FAILED_DRAFT_PLACEHOLDER: &str = "Error generating message. Please check API key.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageIntent {
    Welcome,
    Refund,
}

impl Display for MessageIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Welcome => "welcome",
            Self::Refund => "refund",
        })
    }
}

#[async_trait]
pub trait MessageDrafter: Send + Sync {
    async fn draft(
        &self,
        participant: &Participant,
        intent: MessageIntent,
    ) -> Result<String, DraftingError>;
}

/// Runs `drafter` with a deadline and turns any failure into placeholder text.
pub async fn draft_or_placeholder<D>(
    drafter: &D,
    participant: &Participant,
    intent: MessageIntent,
    timeout: Duration,
) -> String
where
    D: MessageDrafter + ?Sized,
{
    let result = tokio::time::timeout(timeout, drafter.draft(participant, intent))
        .await
        .unwrap_or(Err(DraftingError::Timeout(timeout)));
    match result {
        Ok(text) => text,
        Err(DraftingError::EmptyResponse) => {
            warn!(participant = %participant.id, %intent, "drafting service returned no text");
            EMPTY_DRAFT_PLACEHOLDER.to_owned()
        }
        Err(err) => {
            error!(participant = %participant.id, %intent, "message drafting failed: {err}");
            FAILED_DRAFT_PLACEHOLDER.to_owned()
        }
    }
}
