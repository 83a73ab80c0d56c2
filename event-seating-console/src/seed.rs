//! Fixture participants for demos and local runs.

use chrono::Utc;
use event_seating_config::SeedConfig;
use event_seating_core::{Gender, Participant, ParticipantId, Placement, Source, TableRegistry};
use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng as _};

const NAMES: [&str; 15] = [
    "Alex", "Jordan", "Taylor", "Casey", "Morgan", "Riley", "Jamie", "Quinn", "Avery", "Sam",
    "Charlie", "Dakota", "Reese", "Skyler", "Phoenix",
];

const INTERESTS: [&str; 12] = [
    "Techno",
    "Hiking",
    "Startups",
    "Wine",
    "Reading",
    "Travel",
    "Cooking",
    "Yoga",
    "Coding",
    "Surfing",
    "Photography",
    "Art",
];

const DESCRIPTION: &str = "Looking for great conversations and maybe a co-founder for my new \
                           SaaS idea. Loves coffee and code.";

/// The first few participants start out seated, alternating between the
/// first two tables.
const PRESEATED: usize = 5;

/// Builds `config.participants` fixture participants. Every third one is
/// female, sources alternate between website and app.
pub fn participants(config: &SeedConfig, registry: &TableRegistry) -> Vec<Participant> {
    let mut rng = config
        .rng_seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let purchase_time = Utc::now();

    (0..config.participants)
        .map(|i| {
            let gender = if i % 3 == 0 { Gender::F } else { Gender::M };
            let folder = match gender {
                Gender::M => "men",
                Gender::F => "women",
            };
            let placement = if i < PRESEATED {
                registry
                    .list()
                    .get(i % 2)
                    .or_else(|| registry.list().first())
                    .map_or(Placement::Unassigned, |table| {
                        Placement::Assigned(table.id.clone())
                    })
            } else {
                Placement::Unassigned
            };
            Participant {
                id: ParticipantId::new(format!("u{i}")),
                name: format!("{} {}", NAMES[i % NAMES.len()], initial(i)),
                age: 22 + u8::try_from(i % 15).unwrap_or_default(),
                gender,
                photo_url: format!(
                    "https://randomuser.me/api/portraits/{folder}/{}.jpg",
                    i % 70
                ),
                description: DESCRIPTION.to_owned(),
                interests: (0..3)
                    .map(|offset| INTERESTS[(i + offset) % INTERESTS.len()].to_owned())
                    .collect(),
                source: if i % 2 == 0 {
                    Source::Website
                } else {
                    Source::App
                },
                placement,
                purchase_time,
                popularity_score: rng.gen_range(80..100),
            }
        })
        .collect()
}

/// `A`, `B`, ... `Z`, then `A1`, `B1`, ...
fn initial(i: usize) -> String {
    let letter = char::from(b'A' + u8::try_from(i % 26).unwrap_or_default());
    match i / 26 {
        0 => letter.to_string(),
        round => format!("{letter}{round}"),
    }
}
