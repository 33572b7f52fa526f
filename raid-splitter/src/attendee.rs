use serde::{Deserialize, Serialize};

/// How a character relates to the player that registered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterKind {
    /// The player's primary character.
    Main,
    /// A secondary character the player runs alongside their main.
    Box,
    /// An alternate character. Never raids, so it is dropped before splitting.
    Alt,
}

/// A character signed up for an event, as returned by the attendance query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    pub id: i64,
    pub name: String,
    /// Raw class id from the character record. Validated when classified.
    pub class: i64,
    #[serde(default)]
    pub level: i64,
    /// Alternate advancement points.
    #[serde(default)]
    pub aa: i64,
    /// Id of the player controlling this character.
    pub owner: String,
    pub kind: CharacterKind,
}

/// Drop alternate characters, keeping everything else in input order.
pub fn filter_roster(attendees: &[Attendee]) -> Vec<&Attendee> {
    attendees
        .iter()
        .filter(|attendee| attendee.kind != CharacterKind::Alt)
        .collect()
}
