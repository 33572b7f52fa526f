use std::fmt::Write;

use raid_splitter::{RosterSummary, Split};

/// Human readable split, one block per raid. The first member of each group is
/// starred as its leader.
pub fn text(summary: &RosterSummary, split: &Split) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Summary:\n{summary}\n");

    for (raid_index, (raid, counts)) in split.raids.iter().zip(&split.role_counts).enumerate() {
        let _ = writeln!(out, "=== Raid {} === ({counts})", raid_index + 1);
        for (group_index, group) in raid.iter().enumerate() {
            let members: Vec<String> = group
                .iter()
                .enumerate()
                .map(|(i, entrant)| {
                    if i == 0 {
                        format!("*{} - {}*", entrant.class, entrant.name)
                    } else {
                        format!("{} - {}", entrant.class, entrant.name)
                    }
                })
                .collect();
            let _ = writeln!(out, "-- Group {} -- {}", group_index + 1, members.join(", "));
        }
    }

    out
}
