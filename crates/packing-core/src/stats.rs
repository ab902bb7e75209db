//! Derived Stats
//!
//! Counts over a list plus the footer wording built from them.

use std::fmt;

use serde::Serialize;

use crate::item::Item;

/// Aggregate counts for a list. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DerivedStats {
    pub total: usize,
    pub packed_count: usize,
    /// `round(packed_count / total * 100)`, 0 for an empty list
    pub percent_packed: u32,
}

impl DerivedStats {
    pub fn from_items(items: &[Item]) -> Self {
        let total = items.len();
        let packed_count = items.iter().filter(|item| item.packed).count();
        let stats = Self {
            total,
            packed_count,
            percent_packed: percent(packed_count, total),
        };
        log::trace!("stats recomputed: {:?}", stats);
        stats
    }

    pub fn summary(&self) -> StatsSummary {
        if self.total == 0 {
            StatsSummary::Empty
        } else if self.percent_packed == 100 {
            StatsSummary::AllPacked
        } else {
            StatsSummary::Progress(*self)
        }
    }
}

/// Rounds half up, in integers.
fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part * 200 + whole) / (whole * 2)) as u32
}

/// What the stats footer says
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsSummary {
    Empty,
    AllPacked,
    Progress(DerivedStats),
}

impl fmt::Display for StatsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsSummary::Empty => f.write_str("Start adding some items to your packing list 🚀"),
            StatsSummary::AllPacked => f.write_str("You got everything! Ready to go ✈"),
            StatsSummary::Progress(stats) => write!(
                f,
                "You have {} items on your list, and you already packed {} {} ({}%)",
                stats.total,
                stats.packed_count,
                if stats.packed_count == 1 { "item" } else { "items" },
                stats.percent_packed,
            ),
        }
    }
}
