use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::attendee::{Attendee, CharacterKind};
use crate::class::{Archetype, CharacterClass};
use crate::error::{Result, SplitError};

/// An attendee that survived filtering, tagged with the role it fills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entrant {
    pub id: i64,
    pub name: String,
    pub class: CharacterClass,
    pub archetype: Archetype,
    pub kind: CharacterKind,
    pub owner: String,
    pub level: i64,
    pub aa: i64,
    /// Position in the filtered roster, the last tiebreak of the priority key.
    #[serde(skip)]
    pub seq: usize,
}

impl Entrant {
    /// Sort key for entrants of one archetype: level, then AA, both descending.
    pub fn priority_key(&self) -> (Reverse<i64>, Reverse<i64>, usize) {
        (Reverse(self.level), Reverse(self.aa), self.seq)
    }
}

/// Tag an attendee with its archetype. `seq` is its position in the filtered roster.
pub fn classify(attendee: &Attendee, seq: usize) -> Result<Entrant> {
    let class = CharacterClass::try_from(attendee.class).map_err(|_| {
        tracing::error!(
            character_id = attendee.id,
            class_id = attendee.class,
            "attendee has a class outside the class table"
        );
        SplitError::UnknownClass {
            character_id: attendee.id,
            class_id: attendee.class,
        }
    })?;

    Ok(Entrant {
        id: attendee.id,
        name: attendee.name.clone(),
        class,
        archetype: class.archetype(),
        kind: attendee.kind,
        owner: attendee.owner.clone(),
        level: attendee.level,
        aa: attendee.aa,
        seq,
    })
}

/// Classify a filtered roster, failing on the first unknown class.
pub fn classify_all(attendees: &[&Attendee]) -> Result<Vec<Entrant>> {
    attendees
        .iter()
        .enumerate()
        .map(|(seq, attendee)| classify(attendee, seq))
        .collect()
}

/// Split entrants into per-archetype lists in `Archetype::ALL` order, each sorted by
/// priority key.
pub fn archetype_pools<'a, I>(entrants: I) -> [Vec<&'a Entrant>; 5]
where
    I: IntoIterator<Item = &'a Entrant>,
{
    let mut pools: [Vec<&Entrant>; 5] = Default::default();
    for entrant in entrants {
        pools[entrant.archetype.index()].push(entrant);
    }
    for pool in pools.iter_mut() {
        pool.sort_by_key(|entrant| entrant.priority_key());
    }
    pools
}
