use rand::Rng;

use crate::attendee::{Attendee, CharacterKind};
use crate::class::{CharacterClass, MAX_LEVEL};

/// Parameters for a made-up roster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RosterShape {
    pub size: usize,
    pub min_level: i64,
    /// Chance that a character is boxed by a player already on the roster.
    pub box_rate: f64,
    /// Chance that a character that is not a box signs up as an alt.
    pub alt_rate: f64,
}

/// Build a random roster: uniform classes, levels between `min_level` and the
/// cap, AA between 0 and 200.
///
/// A box joins the owner of a random earlier character, so the first character
/// is never one.
pub fn generate_roster<R: Rng>(shape: RosterShape, rng: &mut R) -> Vec<Attendee> {
    let min_level = shape.min_level.clamp(1, MAX_LEVEL);
    let box_rate = shape.box_rate.clamp(0.0, 1.0);
    let alt_rate = shape.alt_rate.clamp(0.0, 1.0);
    let mut roster: Vec<Attendee> = Vec::with_capacity(shape.size);

    for i in 0..shape.size {
        let class = CharacterClass::ALL[rng.gen_range(0..CharacterClass::ALL.len())];
        let id = i as i64 + 1;

        let (owner, kind) = if !roster.is_empty() && rng.gen_bool(box_rate) {
            let main = &roster[rng.gen_range(0..roster.len())];
            (main.owner.clone(), CharacterKind::Box)
        } else if rng.gen_bool(alt_rate) {
            (format!("player-{id}"), CharacterKind::Alt)
        } else {
            (format!("player-{id}"), CharacterKind::Main)
        };

        roster.push(Attendee {
            id,
            name: format!("{}{id}", class.name()),
            class: class.id(),
            level: rng.gen_range(min_level..=MAX_LEVEL),
            aa: rng.gen_range(0..=200),
            owner,
            kind,
        });
    }

    roster
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    const SHAPE: RosterShape = RosterShape {
        size: 143,
        min_level: 52,
        box_rate: 0.1,
        alt_rate: 0.0,
    };

    #[test]
    fn generated_roster_respects_shape() {
        let mut rng = StdRng::seed_from_u64(11);
        let roster = generate_roster(SHAPE, &mut rng);

        assert_eq!(roster.len(), 143);
        assert!(roster.iter().all(|a| (52..=MAX_LEVEL).contains(&a.level)));
        assert!(roster.iter().all(|a| (0..=200).contains(&a.aa)));
        assert!(roster
            .iter()
            .all(|a| CharacterClass::try_from(a.class).is_ok()));
        assert!(roster.iter().all(|a| a.kind != CharacterKind::Alt));
        assert_eq!(roster[0].kind, CharacterKind::Main);
    }

    #[test]
    fn same_seed_same_roster() {
        let a = generate_roster(SHAPE, &mut StdRng::seed_from_u64(3));
        let b = generate_roster(SHAPE, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn boxes_share_an_owner_with_someone_else() {
        let shape = RosterShape {
            box_rate: 0.5,
            ..SHAPE
        };
        let roster = generate_roster(shape, &mut StdRng::seed_from_u64(5));
        assert!(roster.iter().any(|a| a.kind == CharacterKind::Box));
        for boxed in roster.iter().filter(|a| a.kind == CharacterKind::Box) {
            assert!(roster
                .iter()
                .any(|other| other.id != boxed.id && other.owner == boxed.owner));
        }
    }

    #[test]
    fn every_non_box_is_an_alt_at_full_alt_rate() {
        let shape = RosterShape {
            box_rate: 0.0,
            alt_rate: 1.0,
            ..SHAPE
        };
        let roster = generate_roster(shape, &mut StdRng::seed_from_u64(7));
        assert!(roster.iter().all(|a| a.kind == CharacterKind::Alt));
    }
}
