use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const MAX_LEVEL: i64 = 60;

/// Playable classes, numbered the way they are stored on character records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum CharacterClass {
    Warrior = 1,
    Monk = 2,
    Rogue = 3,
    Paladin = 4,
    Shadowknight = 5,
    Ranger = 6,
    Enchanter = 7,
    Wizard = 8,
    Magician = 9,
    Necromancer = 10,
    Shaman = 11,
    Druid = 12,
    Cleric = 13,
    Bard = 14,
}

/// Role category a class fills in a raid.
///
/// Declaration order is the precedence the raid assigner walks pools in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Tank,
    #[serde(rename = "melee")]
    MeleeDps,
    #[serde(rename = "caster")]
    CasterDps,
    Healer,
    /// Buff/utility classes. These are spread one per group instead of stacked.
    Support,
}

impl Archetype {
    pub const ALL: [Archetype; 5] = [
        Archetype::Tank,
        Archetype::MeleeDps,
        Archetype::CasterDps,
        Archetype::Healer,
        Archetype::Support,
    ];

    /// Position in `ALL`, used to index per-archetype tables.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Archetype::Tank => write!(f, "tank"),
            Archetype::MeleeDps => write!(f, "melee"),
            Archetype::CasterDps => write!(f, "caster"),
            Archetype::Healer => write!(f, "healer"),
            Archetype::Support => write!(f, "support"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseArchetypeError(pub String);

impl fmt::Display for ParseArchetypeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} is not a valid archetype", self.0)
    }
}

impl std::error::Error for ParseArchetypeError {}

impl FromStr for Archetype {
    type Err = ParseArchetypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_ref() {
            "tank" => Ok(Archetype::Tank),
            "melee" | "melee-dps" => Ok(Archetype::MeleeDps),
            "caster" | "caster-dps" => Ok(Archetype::CasterDps),
            "healer" => Ok(Archetype::Healer),
            "support" => Ok(Archetype::Support),
            invalid => Err(ParseArchetypeError(invalid.to_owned())),
        }
    }
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 14] = [
        CharacterClass::Warrior,
        CharacterClass::Monk,
        CharacterClass::Rogue,
        CharacterClass::Paladin,
        CharacterClass::Shadowknight,
        CharacterClass::Ranger,
        CharacterClass::Enchanter,
        CharacterClass::Wizard,
        CharacterClass::Magician,
        CharacterClass::Necromancer,
        CharacterClass::Shaman,
        CharacterClass::Druid,
        CharacterClass::Cleric,
        CharacterClass::Bard,
    ];

    pub fn id(self) -> i64 {
        self as i64
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Warrior => "Warrior",
            CharacterClass::Monk => "Monk",
            CharacterClass::Rogue => "Rogue",
            CharacterClass::Paladin => "Paladin",
            CharacterClass::Shadowknight => "Shadowknight",
            CharacterClass::Ranger => "Ranger",
            CharacterClass::Enchanter => "Enchanter",
            CharacterClass::Wizard => "Wizard",
            CharacterClass::Magician => "Magician",
            CharacterClass::Necromancer => "Necromancer",
            CharacterClass::Shaman => "Shaman",
            CharacterClass::Druid => "Druid",
            CharacterClass::Cleric => "Cleric",
            CharacterClass::Bard => "Bard",
        }
    }

    /// The role this class fills.
    pub fn archetype(self) -> Archetype {
        self.role().0
    }

    /// Rank of this class inside its archetype, 1 being the strongest fit.
    /// Only used to order listings, never to decide placement.
    pub fn sub_priority(self) -> u8 {
        self.role().1
    }

    fn role(self) -> (Archetype, u8) {
        match self {
            CharacterClass::Warrior => (Archetype::Tank, 1),
            CharacterClass::Paladin => (Archetype::Tank, 2),
            CharacterClass::Shadowknight => (Archetype::Tank, 2),
            CharacterClass::Monk => (Archetype::MeleeDps, 1),
            CharacterClass::Rogue => (Archetype::MeleeDps, 2),
            CharacterClass::Ranger => (Archetype::MeleeDps, 3),
            CharacterClass::Cleric => (Archetype::Healer, 1),
            CharacterClass::Druid => (Archetype::Healer, 2),
            CharacterClass::Shaman => (Archetype::Healer, 3),
            CharacterClass::Necromancer => (Archetype::CasterDps, 1),
            CharacterClass::Magician => (Archetype::CasterDps, 2),
            CharacterClass::Wizard => (Archetype::CasterDps, 2),
            CharacterClass::Enchanter => (Archetype::CasterDps, 3),
            CharacterClass::Bard => (Archetype::Support, 1),
        }
    }

    /// Numbered list of every class, as shown when a member registers a character.
    pub fn choice_list() -> String {
        CharacterClass::ALL
            .iter()
            .map(|class| format!("{}. {}\n", class.id(), class.name()))
            .collect()
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownClassId(pub i64);

impl fmt::Display for UnknownClassId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} is not a known class id", self.0)
    }
}

impl std::error::Error for UnknownClassId {}

impl TryFrom<i64> for CharacterClass {
    type Error = UnknownClassId;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        CharacterClass::ALL
            .iter()
            .copied()
            .find(|class| class.id() == id)
            .ok_or(UnknownClassId(id))
    }
}

impl From<CharacterClass> for i64 {
    fn from(class: CharacterClass) -> Self {
        class.id()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct ParseClassError(pub String);

impl fmt::Display for ParseClassError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} is not a valid class", self.0)
    }
}

impl std::error::Error for ParseClassError {}

/// Accepts either the numeric id or the class name, case-insensitively.
impl FromStr for CharacterClass {
    type Err = ParseClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(id) = s.parse::<i64>() {
            return CharacterClass::try_from(id).map_err(|_| ParseClassError(s.to_owned()));
        }

        CharacterClass::ALL
            .iter()
            .copied()
            .find(|class| class.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseClassError(s.to_owned()))
    }
}
