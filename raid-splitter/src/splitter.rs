use std::fmt;

use serde::{Deserialize, Serialize};

use crate::assigner::assign_raids;
use crate::attendee::{filter_roster, Attendee};
use crate::class::Archetype;
use crate::entrant::{classify_all, Entrant};
use crate::error::{Result, SplitError};
use crate::groups::{build_groups, GroupPlan};
use crate::ledger::Ledger;
use crate::linked::resolve_clusters;

/// How many entrants of each archetype a raid holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCounts {
    pub tank: usize,
    pub melee: usize,
    pub caster: usize,
    pub healer: usize,
    pub support: usize,
}

impl RoleCounts {
    pub fn from_entrants<'a, I>(entrants: I) -> Self
    where
        I: IntoIterator<Item = &'a Entrant>,
    {
        let mut counts = RoleCounts::default();
        for entrant in entrants {
            *counts.get_mut(entrant.archetype) += 1;
        }
        counts
    }

    pub fn get(&self, archetype: Archetype) -> usize {
        match archetype {
            Archetype::Tank => self.tank,
            Archetype::MeleeDps => self.melee,
            Archetype::CasterDps => self.caster,
            Archetype::Healer => self.healer,
            Archetype::Support => self.support,
        }
    }

    fn get_mut(&mut self, archetype: Archetype) -> &mut usize {
        match archetype {
            Archetype::Tank => &mut self.tank,
            Archetype::MeleeDps => &mut self.melee,
            Archetype::CasterDps => &mut self.caster,
            Archetype::Healer => &mut self.healer,
            Archetype::Support => &mut self.support,
        }
    }

    /// Counts in archetype precedence order.
    pub fn iter(&self) -> impl Iterator<Item = (Archetype, usize)> + '_ {
        Archetype::ALL.into_iter().map(move |a| (a, self.get(a)))
    }

    pub fn total(&self) -> usize {
        self.iter().map(|(_, count)| count).sum()
    }
}

impl fmt::Display for RoleCounts {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(archetype, count)| format!("{archetype}: {count}"))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

pub type Group = Vec<Entrant>;
pub type Raid = Vec<Group>;

/// The outcome of splitting one event's roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    pub raids: Vec<Raid>,
    /// One entry per raid, in the same order as `raids`.
    pub role_counts: Vec<RoleCounts>,
}

impl Split {
    pub fn raid_sizes(&self) -> Vec<usize> {
        self.raids
            .iter()
            .map(|raid| raid.iter().map(Vec::len).sum())
            .collect()
    }

    pub fn entrant_count(&self) -> usize {
        self.raid_sizes().iter().sum()
    }

    /// Every placed entrant, raid by raid and group by group.
    pub fn entrants(&self) -> impl Iterator<Item = &Entrant> {
        self.raids.iter().flatten().flatten()
    }
}

/// Split an event's attendees into `raid_count` raids of role-slotted groups, using
/// the default group plan.
pub fn partition_roster(attendees: &[Attendee], raid_count: usize) -> Result<Split> {
    partition_roster_with_plan(attendees, raid_count, &GroupPlan::default())
}

/// Split an event's attendees into `raid_count` raids.
///
/// Alts are dropped, every other attendee lands in exactly one group of exactly
/// one raid, and characters sharing an owner always share a raid. An empty
/// roster yields `raid_count` empty raids. Fails without partial output when
/// `raid_count` is below two or an attendee has an unknown class.
pub fn partition_roster_with_plan(
    attendees: &[Attendee],
    raid_count: usize,
    plan: &GroupPlan,
) -> Result<Split> {
    if raid_count < 2 {
        return Err(SplitError::InvalidRaidCount(raid_count));
    }

    let roster = filter_roster(attendees);
    let entrants = classify_all(&roster)?;
    let clusters = resolve_clusters(&entrants);

    let mut ledger = Ledger::new();
    let raids = assign_raids(&entrants, &clusters, raid_count, &mut ledger)?;

    tracing::debug!(
        attendees = attendees.len(),
        entrants = entrants.len(),
        raid_count,
        raid_size = raids.first().map_or(0, Vec::len),
        "splitting roster"
    );

    let mut split = Split {
        raids: Vec::with_capacity(raid_count),
        role_counts: Vec::with_capacity(raid_count),
    };
    for (index, raid) in raids.iter().enumerate() {
        let groups = build_groups(raid, plan, &mut ledger);
        let counts = RoleCounts::from_entrants(raid.iter().copied());
        tracing::trace!(raid = index, groups = groups.len(), %counts, "built raid");

        split.role_counts.push(counts);
        split.raids.push(
            groups
                .into_iter()
                .map(|group| group.into_iter().cloned().collect::<Group>())
                .collect(),
        );
    }

    Ok(split)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attendee::CharacterKind;
    use crate::test_utils::attendee;

    #[test]
    fn role_counts_display_in_precedence_order() {
        let counts = RoleCounts {
            tank: 2,
            melee: 3,
            caster: 1,
            healer: 2,
            support: 0,
        };
        assert_eq!(
            counts.to_string(),
            "tank: 2, melee: 3, caster: 1, healer: 2, support: 0"
        );
        assert_eq!(counts.total(), 8);
    }

    #[test]
    fn rejects_single_raid_before_looking_at_the_roster() {
        let roster = vec![attendee(1, 99, "a")];
        assert_eq!(
            partition_roster(&roster, 1),
            Err(SplitError::InvalidRaidCount(1))
        );
    }

    #[test]
    fn unknown_class_aborts_the_split() {
        let roster = vec![attendee(1, 1, "a"), attendee(2, 0, "b")];
        assert_eq!(
            partition_roster(&roster, 2),
            Err(SplitError::UnknownClass {
                character_id: 2,
                class_id: 0
            })
        );
    }

    #[test]
    fn alts_with_bad_classes_are_filtered_first() {
        let mut alt = attendee(2, 0, "b");
        alt.kind = CharacterKind::Alt;
        let roster = vec![attendee(1, 1, "a"), alt];
        let split = partition_roster(&roster, 2).unwrap();
        assert_eq!(split.entrant_count(), 1);
    }

    #[test]
    fn role_counts_match_raids() {
        let roster: Vec<Attendee> = (1..=20)
            .map(|id| attendee(id, (id % 14) + 1, &format!("p{id}")))
            .collect();
        let split = partition_roster(&roster, 3).unwrap();

        assert_eq!(split.role_counts.len(), 3);
        for (raid, counts) in split.raids.iter().zip(&split.role_counts) {
            let expected = RoleCounts::from_entrants(raid.iter().flatten());
            assert_eq!(*counts, expected);
        }
        assert_eq!(split.raid_sizes().iter().sum::<usize>(), 20);
    }

    #[test]
    fn split_serializes_to_json() {
        let roster = vec![attendee(1, 1, "a"), attendee(2, 14, "b")];
        let split = partition_roster(&roster, 2).unwrap();
        let json = serde_json::to_value(&split).unwrap();
        assert_eq!(json["raids"].as_array().unwrap().len(), 2);
        assert_eq!(json["role_counts"][0]["tank"], 1);
        assert_eq!(json["raids"][1][0][0]["archetype"], "support");
    }
}
