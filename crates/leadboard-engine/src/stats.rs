//! Aggregate statistics over the lead snapshot

use leadboard_core::Lead;
use serde::Serialize;

/// Summary statistics for the stat cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LeadStats {
    /// Number of leads in the snapshot
    pub total_count: usize,

    /// Integer-rounded mean company size; 0 for an empty snapshot. Callers
    /// must use `total_count` to tell "no leads" apart from "mean is zero".
    pub average_size: u32,
}

/// Compute summary statistics in a single pass
#[must_use]
pub fn compute(leads: &[Lead]) -> LeadStats {
    let total_count = leads.len();
    if total_count == 0 {
        return LeadStats::default();
    }

    let sum: u64 = leads.iter().map(|lead| u64::from(lead.size)).sum();
    let count = total_count as u64;
    // Round half up; the mean of u32 values always fits back into u32.
    let average = (sum + count / 2) / count;

    LeadStats {
        total_count,
        average_size: u32::try_from(average).unwrap_or(u32::MAX),
    }
}
