use event_seating_core::Participant;

use crate::MessageIntent;

pub fn build(participant: &Participant, intent: MessageIntent) -> String {
    match intent {
        MessageIntent::Refund => format!(
            "Write a polite, short and professional refund notification for an event \
             participant named {name}.\nContext: they bought their ticket through the \
             {source}.\nTone: empathetic but firm. At most 50 words.",
            name = participant.name,
            source = participant.source,
        ),
        MessageIntent::Welcome => format!(
            "Write a short, hype-filled welcome message for an event participant named \
             {name} (age {age}).\nContext: we are matching them to a table.\nInterests: \
             {interests}.\nTone: excited, casual, Gen-Z friendly. At most 40 words.",
            name = participant.name,
            age = participant.age,
            interests = participant.interests.join(", "),
        ),
    }
}
