use std::collections::HashMap;

use crate::entrant::Entrant;

/// Characters of one player that must land in the same raid, so the player can
/// run all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedCluster<'a> {
    pub owner: &'a str,
    /// In roster order. Always at least two.
    pub members: Vec<&'a Entrant>,
}

/// Group entrants by owner and keep the owners that brought more than one character.
///
/// Clusters come back in order of each owner's first appearance in the roster.
/// Whether a character is tagged as a box plays no part here.
pub fn resolve_clusters(entrants: &[Entrant]) -> Vec<LinkedCluster<'_>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut by_owner: Vec<LinkedCluster> = Vec::new();

    for entrant in entrants {
        match index.get(entrant.owner.as_str()).copied() {
            Some(i) => by_owner[i].members.push(entrant),
            None => {
                index.insert(entrant.owner.as_str(), by_owner.len());
                by_owner.push(LinkedCluster {
                    owner: entrant.owner.as_str(),
                    members: vec![entrant],
                });
            }
        }
    }

    by_owner.retain(|cluster| cluster.members.len() > 1);
    by_owner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::entrants;

    #[test]
    fn single_characters_are_not_clusters() {
        let roster = entrants(&[(1, 1, "a"), (2, 2, "b"), (3, 3, "c")]);
        assert!(resolve_clusters(&roster).is_empty());
    }

    #[test]
    fn clusters_follow_first_appearance() {
        let roster = entrants(&[
            (1, 1, "b"),
            (2, 2, "a"),
            (3, 3, "solo"),
            (4, 13, "a"),
            (5, 14, "b"),
            (6, 8, "b"),
        ]);

        let clusters = resolve_clusters(&roster);
        let shape: Vec<(&str, Vec<i64>)> = clusters
            .iter()
            .map(|c| (c.owner, c.members.iter().map(|e| e.id).collect()))
            .collect();
        assert_eq!(shape, vec![("b", vec![1, 5, 6]), ("a", vec![2, 4])]);
    }
}
