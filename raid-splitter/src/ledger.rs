use std::collections::HashSet;

/// Placement markers for a single split.
///
/// One ledger is created per `partition_roster` call and threaded through the
/// raid assigner and the group builder. It must never outlive or be shared
/// between calls.
#[derive(Debug, Default)]
pub struct Ledger {
    assigned: HashSet<i64>,
    slotted: HashSet<i64>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an entrant has a raid. Returns false if it already had one.
    pub fn assign(&mut self, id: i64) -> bool {
        self.assigned.insert(id)
    }

    pub fn is_assigned(&self, id: i64) -> bool {
        self.assigned.contains(&id)
    }

    /// Record that an entrant has a group inside its raid. Returns false if it
    /// already had one.
    pub fn slot(&mut self, id: i64) -> bool {
        self.slotted.insert(id)
    }

    pub fn is_slotted(&self, id: i64) -> bool {
        self.slotted.contains(&id)
    }

    pub fn assigned_count(&self) -> usize {
        self.assigned.len()
    }

    pub fn slotted_count(&self) -> usize {
        self.slotted.len()
    }
}
