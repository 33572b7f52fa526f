//! Split an event's signed-up roster into balanced raids of role-slotted groups.
pub mod assigner;
pub mod attendee;
pub mod class;
pub mod entrant;
pub mod error;
pub mod groups;
pub mod ledger;
pub mod linked;
pub mod sample;
pub mod splitter;
pub mod summary;

// Shared with the integration tests and the simulator, so not gated on cfg(test).
pub mod test_utils;

pub use attendee::{Attendee, CharacterKind};
pub use class::{Archetype, CharacterClass, MAX_LEVEL};
pub use entrant::Entrant;
pub use error::{Result, SplitError};
pub use groups::{GroupPlan, GROUP_SIZE};
pub use sample::{generate_roster, RosterShape};
pub use splitter::{partition_roster, partition_roster_with_plan, RoleCounts, Split};
pub use summary::RosterSummary;
