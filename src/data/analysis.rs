use std::fmt;

use super::model::{EnergyRow, EnergyTable};

/// Slack allowed when comparing accumulated percentages.
const ENERGY_TOLERANCE: f64 = 1e-6;

/// Per-mode energies summing further than this from 100 % are reported.
const TOTAL_ENERGY_SLACK: f64 = 0.5;

// ---------------------------------------------------------------------------
// Eigenvalues → energy table
// ---------------------------------------------------------------------------

/// Build an energy table from POD eigenvalues, largest first.
///
/// Each mode's energy is its share of the eigenvalue sum in percent, the
/// cumulative column is the running sum of those shares, and basis numbers
/// run from 1.
pub fn energy_from_eigenvalues(eigenvalues: &[f64]) -> EnergyTable {
    let total: f64 = eigenvalues.iter().sum();
    let mut cumulative = 0.0;

    EnergyTable::from_rows(eigenvalues.iter().enumerate().map(|(i, &eig)| {
        let per_mode = if total == 0.0 { 0.0 } else { eig / total * 100.0 };
        cumulative += per_mode;
        EnergyRow {
            basis_number: (i + 1) as f64,
            per_mode_energy: per_mode,
            cumulative_energy: cumulative,
            eigenvalue: eig,
        }
    }))
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// First basis number whose cumulative energy reaches `threshold` percent.
pub fn modes_for_energy(table: &EnergyTable, threshold: f64) -> Option<f64> {
    table
        .cumulative_energy()
        .iter()
        .position(|&cum| cum + ENERGY_TOLERANCE >= threshold)
        .map(|i| table.basis_number()[i])
}

/// Describe every input invariant the table violates.
///
/// Purely diagnostic: the table itself is never corrected.
pub fn invariant_warnings(table: &EnergyTable) -> Vec<String> {
    let mut warnings = Vec::new();

    for (i, pair) in table.basis_number().windows(2).enumerate() {
        if pair[1] <= pair[0] {
            warnings.push(format!(
                "basis number does not increase at row {} ({} → {})",
                i + 2,
                pair[0],
                pair[1]
            ));
        }
    }

    for (i, pair) in table.cumulative_energy().windows(2).enumerate() {
        if pair[1] + ENERGY_TOLERANCE < pair[0] {
            warnings.push(format!(
                "cumulative energy decreases at row {} ({} → {})",
                i + 2,
                pair[0],
                pair[1]
            ));
        }
    }

    for row in table.rows() {
        let cum = row.cumulative_energy;
        if !(-ENERGY_TOLERANCE..=100.0 + ENERGY_TOLERANCE).contains(&cum) {
            warnings.push(format!(
                "cumulative energy {cum} of basis {} is outside [0, 100]",
                row.basis_number
            ));
        }
        if row.per_mode_energy < 0.0 {
            warnings.push(format!(
                "per-mode energy {} of basis {} is negative",
                row.per_mode_energy, row.basis_number
            ));
        }
    }

    if let Some(&last) = table.cumulative_energy().last() {
        let total: f64 = table.per_mode_energy().iter().sum();
        if (total - last).abs() > TOTAL_ENERGY_SLACK {
            warnings.push(format!(
                "per-mode energies sum to {total:.3} but final cumulative energy is {last:.3}"
            ));
        }
    }

    warnings
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Headline figures for a loaded table.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergySummary {
    pub modes: usize,
    pub total_energy: f64,
    pub modes_for_90: Option<f64>,
    pub modes_for_99: Option<f64>,
}

impl EnergySummary {
    pub fn of(table: &EnergyTable) -> Self {
        EnergySummary {
            modes: table.len(),
            total_energy: table.per_mode_energy().iter().sum(),
            modes_for_90: modes_for_energy(table, 90.0),
            modes_for_99: modes_for_energy(table, 99.0),
        }
    }
}

impl fmt::Display for EnergySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn reached(mode: Option<f64>) -> String {
            mode.map_or_else(|| "never".to_string(), |m| format!("mode {m}"))
        }
        write!(
            f,
            "{} modes, {:.2}% total energy, 90% at {}, 99% at {}",
            self.modes,
            self.total_energy,
            reached(self.modes_for_90),
            reached(self.modes_for_99)
        )
    }
}
