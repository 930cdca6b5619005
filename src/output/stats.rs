//! Statistics over a set of island records
//!
//! This module summarizes extracted or previously written islands for the
//! run log and the `--stats` mode.

use crate::record::IslandRecord;
use std::collections::HashMap;

/// Island statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IslandStatistics {
    /// Total number of islands
    pub total_islands: u64,

    /// Islands whose population could be read
    pub populated_islands: u64,

    /// Sum of all known populations
    pub total_population: u64,

    /// Islands with a governor
    pub governed_islands: u64,

    /// Islands with a flag
    pub flagged_islands: u64,

    /// Number of islands held per flag
    pub islands_by_flag: HashMap<String, u64>,
}

impl IslandStatistics {
    /// Computes statistics from a record set
    pub fn from_records(records: &[IslandRecord]) -> Self {
        let mut stats = Self::default();

        for record in records {
            stats.total_islands += 1;

            if let Some(population) = record.population {
                stats.populated_islands += 1;
                stats.total_population = stats.total_population.saturating_add(population);
            }

            if record.governor().is_some() {
                stats.governed_islands += 1;
            }

            if let Some(flag) = record.flag() {
                stats.flagged_islands += 1;
                *stats.islands_by_flag.entry(flag.text).or_insert(0) += 1;
            }
        }

        stats
    }

    /// Average population over islands with a known population
    pub fn average_population(&self) -> Option<f64> {
        (self.populated_islands > 0)
            .then(|| self.total_population as f64 / self.populated_islands as f64)
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &IslandStatistics) {
    println!("=== Island Statistics ===\n");

    println!("Overview:");
    println!("  Islands: {}", stats.total_islands);
    println!(
        "  With known population: {} (total {})",
        stats.populated_islands, stats.total_population
    );
    if let Some(average) = stats.average_population() {
        println!("  Average population: {:.1}", average);
    }
    println!("  Governed: {}", stats.governed_islands);
    println!("  Flagged: {}", stats.flagged_islands);
    println!();

    if !stats.islands_by_flag.is_empty() {
        println!("Islands by Flag ({}):", stats.islands_by_flag.len());
        // Most islands first, then by name
        let mut flag_counts: Vec<_> = stats.islands_by_flag.iter().collect();
        flag_counts.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        for (flag, count) in flag_counts {
            println!("  - {}: {}", flag, count);
        }
    }
}
