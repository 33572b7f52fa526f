use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::attendee::{Attendee, CharacterKind};
use crate::class::{CharacterClass, MAX_LEVEL};
use crate::entrant::{classify, Entrant};
use crate::sample::{generate_roster, RosterShape};

/// A level-capped main with no AA, named after its class.
pub fn attendee(id: i64, class: i64, owner: &str) -> Attendee {
    let class_name = CharacterClass::try_from(class)
        .map(|c| c.name().to_string())
        .unwrap_or_else(|_| "Unknown".to_string());
    Attendee {
        id,
        name: format!("{class_name}{id}"),
        class,
        level: MAX_LEVEL,
        aa: 0,
        owner: owner.to_string(),
        kind: CharacterKind::Main,
    }
}

/// Classified entrants from `(id, class, owner)` triples, in order.
pub fn entrants(rows: &[(i64, i64, &str)]) -> Vec<Entrant> {
    rows.iter()
        .enumerate()
        .map(|(seq, &(id, class, owner))| {
            classify(&attendee(id, class, owner), seq).expect("test roster uses known classes")
        })
        .collect()
}

/// A reproducible roster of `size` attendees with mixed classes, levels, boxes and alts.
pub fn random_roster(seed: u64, size: usize) -> Vec<Attendee> {
    let shape = RosterShape {
        size,
        min_level: 50,
        box_rate: 0.15,
        alt_rate: 0.05,
    };
    generate_roster(shape, &mut StdRng::seed_from_u64(seed))
}
