use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attendee::{filter_roster, Attendee};
use crate::class::CharacterClass;
use crate::entrant::classify_all;
use crate::error::Result;
use crate::splitter::RoleCounts;

/// Class and role breakdown of everyone attending an event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSummary {
    pub roles: RoleCounts,
    pub classes: BTreeMap<CharacterClass, usize>,
}

impl RosterSummary {
    /// Alts are left out, matching what a split would place.
    pub fn from_attendees(attendees: &[Attendee]) -> Result<Self> {
        let roster = filter_roster(attendees);
        let entrants = classify_all(&roster)?;

        let mut classes = BTreeMap::new();
        for entrant in &entrants {
            *classes.entry(entrant.class).or_insert(0) += 1;
        }

        Ok(Self {
            roles: RoleCounts::from_entrants(&entrants),
            classes,
        })
    }

    pub fn total(&self) -> usize {
        self.roles.total()
    }

    /// Classes grouped by archetype, strongest fit first.
    fn ordered_classes(&self) -> Vec<(CharacterClass, usize)> {
        let mut classes: Vec<(CharacterClass, usize)> =
            self.classes.iter().map(|(&c, &n)| (c, n)).collect();
        classes.sort_by_key(|(class, _)| (class.archetype(), class.sub_priority(), class.id()));
        classes
    }
}

impl fmt::Display for RosterSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (archetype, count) in self.roles.iter().filter(|(_, n)| *n > 0) {
            writeln!(f, "{archetype}: {count}")?;
        }
        for (class, count) in self.ordered_classes() {
            writeln!(f, "{class}: {count}")?;
        }
        write!(f, "total: {}", self.total())
    }
}
