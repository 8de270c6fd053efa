//! Synthetic event generation

use chrono::{Duration, Utc};
use domain_events::CreateEvent;
use rand::Rng;
use rand::seq::SliceRandom;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Dennis", "Donald", "Edsger", "Grace", "John", "Katherine", "Ken",
    "Leslie", "Margaret", "Niklaus", "Radia", "Tim",
];

const LAST_NAMES: &[&str] = &[
    "Backus", "Hamilton", "Hopper", "Johnson", "Kernighan", "Knuth", "Lamport", "Liskov",
    "Lovelace", "Perlman", "Ritchie", "Thompson", "Turing", "Wirth",
];

const TAGLINE_WORDS: &[&str] = &[
    "hands-on", "deep-dive", "practical", "interactive", "beginner-friendly", "advanced",
    "weekly", "monthly", "community", "workshop", "session", "bootcamp", "meetup", "masterclass",
];

const CATEGORIES: &[(&str, &str)] = &[
    ("tech", "databases"),
    ("tech", "distributed-systems"),
    ("tech", "web"),
    ("science", "mathematics"),
    ("science", "physics"),
    ("culture", "history"),
];

fn random_uid<R: Rng>(rng: &mut R) -> String {
    (0..10).map(|_| rng.gen_range(0..10).to_string()).collect()
}

fn random_name<R: Rng>(rng: &mut R) -> String {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Ada");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Lovelace");
    format!("{} {}", first, last)
}

fn random_tagline<R: Rng>(rng: &mut R) -> String {
    let a = TAGLINE_WORDS.choose(rng).copied().unwrap_or("hands-on");
    let b = TAGLINE_WORDS.choose(rng).copied().unwrap_or("session");
    format!("A {} {}", a, b)
}

fn random_event<R: Rng>(rng: &mut R) -> CreateEvent {
    let (category, sub_category) = CATEGORIES.choose(rng).copied().unwrap_or(("tech", "web"));

    // Schedules land in the past year, like real historical data
    let minutes_ago = rng.gen_range(0..365 * 24 * 60);

    CreateEvent {
        uid: random_uid(rng),
        name: random_name(rng),
        tagline: Some(random_tagline(rng)),
        description: Some(format!(
            "{} hosted by {}.",
            random_tagline(rng),
            random_name(rng)
        )),
        moderator: Some(random_name(rng)),
        category: Some(category.to_string()),
        sub_category: Some(sub_category.to_string()),
        schedule: Utc::now() - Duration::minutes(minutes_ago),
        rigor_rank: Some(rng.gen_range(1..=10)),
    }
}

/// Generate `count` synthetic events
pub fn generate_events(count: usize) -> Vec<CreateEvent> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| random_event(&mut rng)).collect()
}
