use std::fmt;
use std::str::FromStr;

use crate::class::{Archetype, ParseArchetypeError};
use crate::entrant::{archetype_pools, Entrant};
use crate::ledger::Ledger;

pub const GROUP_SIZE: usize = 6;

/// Pool order used when a group takes whatever is left.
pub const ANY_ORDER: [Archetype; 5] = [
    Archetype::Support,
    Archetype::MeleeDps,
    Archetype::CasterDps,
    Archetype::Healer,
    Archetype::Tank,
];

/// Which archetype each group of a raid is built around.
///
/// Group `i` is built from `targets[i]`; groups past the end of the list, and
/// every group when the list is empty, take from all pools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPlan {
    targets: Vec<Archetype>,
}

impl GroupPlan {
    pub fn new(targets: Vec<Archetype>) -> Self {
        Self { targets }
    }

    pub fn target(&self, group: usize) -> Option<Archetype> {
        self.targets.get(group).copied()
    }

    pub fn targets(&self) -> &[Archetype] {
        &self.targets
    }
}

impl Default for GroupPlan {
    /// Main tank group, then melee, healers and casters.
    fn default() -> Self {
        Self::new(vec![
            Archetype::Tank,
            Archetype::MeleeDps,
            Archetype::Healer,
            Archetype::CasterDps,
        ])
    }
}

impl fmt::Display for GroupPlan {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names: Vec<String> = self.targets.iter().map(|a| a.to_string()).collect();
        write!(f, "{}", names.join(","))
    }
}

/// Parses a comma separated archetype list, e.g. `tank,melee,healer,caster`.
impl FromStr for GroupPlan {
    type Err = ParseArchetypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let targets = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(Archetype::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(targets))
    }
}

/// Break one raid into groups of `GROUP_SIZE`.
///
/// Every group but the last is built around the archetype `plan` gives it, up to
/// five members. When the target pool runs dry, or the group has no target, the
/// rest is drawn round-robin across the pools in `ANY_ORDER`. The sixth slot goes
/// to a support entrant if the group has none yet, otherwise to the next pool in
/// that rotation. A group never takes a second support entrant while anything else is
/// still available. The last group takes everyone left over, in raid order.
pub fn build_groups<'a>(
    raid: &[&'a Entrant],
    plan: &GroupPlan,
    ledger: &mut Ledger,
) -> Vec<Vec<&'a Entrant>> {
    if raid.is_empty() {
        return Vec::new();
    }

    let count = raid.len().div_ceil(GROUP_SIZE);
    let mut groups = Vec::with_capacity(count);

    let mut filler = GroupFiller {
        pools: archetype_pools(raid.iter().copied()),
        ledger: &mut *ledger,
    };
    for index in 0..count - 1 {
        let group = filler.fill(plan.target(index));
        tracing::trace!(
            group = index,
            target = ?plan.target(index),
            members = ?group.iter().map(|e| e.class.name()).collect::<Vec<_>>(),
            "built group"
        );
        groups.push(group);
    }

    let leftover: Vec<&Entrant> = raid
        .iter()
        .copied()
        .filter(|entrant| ledger.slot(entrant.id))
        .collect();
    groups.push(leftover);

    groups
}

struct GroupFiller<'a, 'l> {
    pools: [Vec<&'a Entrant>; 5],
    ledger: &'l mut Ledger,
}

impl<'a, 'l> GroupFiller<'a, 'l> {
    fn fill(&mut self, target: Option<Archetype>) -> Vec<&'a Entrant> {
        let mut group: Vec<&'a Entrant> = Vec::with_capacity(GROUP_SIZE);
        let mut rotation = 0;

        if let Some(archetype) = target {
            while group.len() < GROUP_SIZE - 1 {
                match self.next_from(archetype, &group) {
                    Some(entrant) => self.take(entrant, &mut group),
                    None => break,
                }
            }
        }
        // No target, or the target pool ran dry: draw the rest from every pool.
        while group.len() < GROUP_SIZE - 1 {
            match self.next_in_rotation(&group, &mut rotation) {
                Some(entrant) => self.take(entrant, &mut group),
                None => break,
            }
        }

        while group.len() < GROUP_SIZE {
            let reserved = if has_support(&group) {
                None
            } else {
                self.next_from(Archetype::Support, &group)
            };
            let next = match reserved {
                Some(entrant) => Some(entrant),
                None => self.next_in_rotation(&group, &mut rotation),
            };
            match next {
                Some(entrant) => self.take(entrant, &mut group),
                None => break,
            }
        }

        group
    }

    /// Next entrant from the pools in `ANY_ORDER`, starting at `rotation` and
    /// leaving it just past the pool that gave one up.
    fn next_in_rotation(
        &self,
        group: &[&'a Entrant],
        rotation: &mut usize,
    ) -> Option<&'a Entrant> {
        for step in 0..ANY_ORDER.len() {
            let index = (*rotation + step) % ANY_ORDER.len();
            if let Some(entrant) = self.next_from(ANY_ORDER[index], group) {
                *rotation = (index + 1) % ANY_ORDER.len();
                return Some(entrant);
            }
        }
        None
    }

    fn take(&mut self, entrant: &'a Entrant, group: &mut Vec<&'a Entrant>) {
        self.ledger.slot(entrant.id);
        group.push(entrant);
    }

    /// Best unslotted entrant of `archetype` that `group` may take.
    fn next_from(&self, archetype: Archetype, group: &[&'a Entrant]) -> Option<&'a Entrant> {
        if archetype == Archetype::Support && has_support(group) && self.others_remaining() {
            return None;
        }
        self.pools[archetype.index()]
            .iter()
            .copied()
            .find(|entrant| !self.ledger.is_slotted(entrant.id))
    }

    fn others_remaining(&self) -> bool {
        self.pools
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != Archetype::Support.index())
            .flat_map(|(_, pool)| pool.iter())
            .any(|entrant| !self.ledger.is_slotted(entrant.id))
    }
}

fn has_support(group: &[&Entrant]) -> bool {
    group
        .iter()
        .any(|entrant| entrant.archetype == Archetype::Support)
}
