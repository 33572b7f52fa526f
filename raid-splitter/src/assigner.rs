use crate::entrant::{archetype_pools, Entrant};
use crate::error::{Result, SplitError};
use crate::ledger::Ledger;
use crate::linked::LinkedCluster;

/// Distribute entrants across `raid_count` raids.
///
/// Linked clusters are placed first, whole, one per raid in turn. The raids are
/// then reordered lightest first and every remaining entrant is dealt out one at
/// a time, archetype by archetype (tank, melee, caster, healer, support), best
/// priority key first. The dealing cursor carries over between archetypes.
///
/// Every placed entrant is marked assigned in `ledger`. The result is fully
/// determined by the input order and `raid_count`.
pub fn assign_raids<'a>(
    entrants: &'a [Entrant],
    clusters: &[LinkedCluster<'a>],
    raid_count: usize,
    ledger: &mut Ledger,
) -> Result<Vec<Vec<&'a Entrant>>> {
    if raid_count < 2 {
        return Err(SplitError::InvalidRaidCount(raid_count));
    }

    let mut raids: Vec<Vec<&Entrant>> = vec![Vec::new(); raid_count];

    for (i, cluster) in clusters.iter().enumerate() {
        let raid = &mut raids[i % raid_count];
        for &member in &cluster.members {
            if ledger.assign(member.id) {
                raid.push(member);
            }
        }
    }

    // Stable, so equally sized raids keep their cluster order.
    raids.sort_by_key(|raid| raid.len());

    let mut cursor = 0;
    for pool in archetype_pools(entrants) {
        for entrant in pool {
            if !ledger.assign(entrant.id) {
                continue;
            }
            raids[cursor].push(entrant);
            cursor = (cursor + 1) % raid_count;
        }
    }

    tracing::debug!(
        raid_count,
        clusters = clusters.len(),
        assigned = ledger.assigned_count(),
        "assigned entrants to raids"
    );

    Ok(raids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linked::resolve_clusters;
    use crate::test_utils::entrants;

    fn ids(raids: &[Vec<&Entrant>]) -> Vec<Vec<i64>> {
        raids
            .iter()
            .map(|raid| raid.iter().map(|e| e.id).collect())
            .collect()
    }

    #[test]
    fn fewer_than_two_raids_is_rejected() {
        let roster = entrants(&[(1, 1, "a")]);
        for count in [0, 1] {
            let mut ledger = Ledger::new();
            assert_eq!(
                assign_raids(&roster, &[], count, &mut ledger),
                Err(SplitError::InvalidRaidCount(count))
            );
            assert_eq!(ledger.assigned_count(), 0);
        }
    }

    #[test]
    fn empty_roster_gives_empty_raids() {
        let mut ledger = Ledger::new();
        let raids = assign_raids(&[], &[], 3, &mut ledger).unwrap();
        assert_eq!(raids.len(), 3);
        assert!(raids.iter().all(|raid| raid.is_empty()));
    }

    #[test]
    fn cursor_carries_across_archetypes() {
        // Three warriors then a monk: the monk picks up where the tanks stopped.
        let roster = entrants(&[(1, 1, "a"), (2, 1, "b"), (3, 1, "c"), (4, 2, "d")]);
        let mut ledger = Ledger::new();
        let raids = assign_raids(&roster, &[], 2, &mut ledger).unwrap();
        assert_eq!(ids(&raids), vec![vec![1, 3], vec![2, 4]]);
    }

    #[test]
    fn archetypes_are_dealt_in_precedence_order() {
        // Roster order is healer, caster, melee, tank; dealing order is the reverse.
        let roster = entrants(&[(1, 13, "a"), (2, 8, "b"), (3, 3, "c"), (4, 1, "d")]);
        let mut ledger = Ledger::new();
        let raids = assign_raids(&roster, &[], 2, &mut ledger).unwrap();
        assert_eq!(ids(&raids), vec![vec![4, 2], vec![3, 1]]);
    }

    #[test]
    fn clusters_go_first_then_lightest_raid_fills() {
        let roster = entrants(&[
            (1, 1, "a"),
            (2, 1, "a"),
            (3, 1, "b"),
            (4, 1, "b"),
            (5, 1, "c"),
            (6, 1, "c"),
            (7, 1, "solo-1"),
            (8, 1, "solo-2"),
        ]);
        let clusters = resolve_clusters(&roster);
        let mut ledger = Ledger::new();
        let raids = assign_raids(&roster, &clusters, 2, &mut ledger).unwrap();

        // a and c land in the first raid, b in the second. The second raid is
        // lighter, so it moves to the front and takes the first solo character.
        assert_eq!(ids(&raids), vec![vec![3, 4, 7], vec![1, 2, 5, 6, 8]]);
        assert_eq!(ledger.assigned_count(), 8);
    }
}
