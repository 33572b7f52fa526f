use std::collections::HashMap;

use raid_splitter::{Archetype, Attendee, CharacterKind, Split};

/// Ids of every attendee a split is expected to place, sorted.
pub fn eligible_ids(roster: &[Attendee]) -> Vec<i64> {
    let mut ids: Vec<i64> = roster
        .iter()
        .filter(|a| a.kind != CharacterKind::Alt)
        .map(|a| a.id)
        .collect();
    ids.sort_unstable();
    ids
}

pub fn placed_ids(split: &Split) -> Vec<i64> {
    let mut ids: Vec<i64> = split.entrants().map(|e| e.id).collect();
    ids.sort_unstable();
    ids
}

/// Raid index of every placed entrant, keyed by id.
pub fn raid_of(split: &Split) -> HashMap<i64, usize> {
    let mut index = HashMap::new();
    for (raid_index, raid) in split.raids.iter().enumerate() {
        for entrant in raid.iter().flatten() {
            index.insert(entrant.id, raid_index);
        }
    }
    index
}

/// Owners with more than one eligible character, mapped to those characters.
pub fn linked_owners(roster: &[Attendee]) -> HashMap<&str, Vec<i64>> {
    let mut owners: HashMap<&str, Vec<i64>> = HashMap::new();
    for attendee in roster.iter().filter(|a| a.kind != CharacterKind::Alt) {
        owners
            .entry(attendee.owner.as_str())
            .or_default()
            .push(attendee.id);
    }
    owners.retain(|_, ids| ids.len() > 1);
    owners
}

pub fn support_per_group(raid: &[Vec<raid_splitter::Entrant>]) -> Vec<usize> {
    raid.iter()
        .map(|group| {
            group
                .iter()
                .filter(|e| e.archetype == Archetype::Support)
                .count()
        })
        .collect()
}
