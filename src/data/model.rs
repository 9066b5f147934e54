// ---------------------------------------------------------------------------
// EnergyRow – one line of podEnergy.csv
// ---------------------------------------------------------------------------

/// A single POD basis mode as written by the basis calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyRow {
    pub basis_number: f64,
    /// Energy captured by this mode alone, in percent.
    pub per_mode_energy: f64,
    /// Energy captured by modes 1..=this one, in percent.
    pub cumulative_energy: f64,
    pub eigenvalue: f64,
}

// ---------------------------------------------------------------------------
// EnergyTable – the complete loaded file, column-wise
// ---------------------------------------------------------------------------

/// The energy table, one entry per basis mode in file order.
///
/// Stored column-wise so each series can be handed to a plot directly.
/// Immutable once built: rows are never reordered, filtered or rescaled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnergyTable {
    basis_number: Vec<f64>,
    per_mode_energy: Vec<f64>,
    cumulative_energy: Vec<f64>,
    eigenvalue: Vec<f64>,
}

impl EnergyTable {
    /// Build the table from rows, preserving their order.
    pub fn from_rows(rows: impl IntoIterator<Item = EnergyRow>) -> Self {
        let mut table = EnergyTable::default();
        for row in rows {
            table.basis_number.push(row.basis_number);
            table.per_mode_energy.push(row.per_mode_energy);
            table.cumulative_energy.push(row.cumulative_energy);
            table.eigenvalue.push(row.eigenvalue);
        }
        table
    }

    pub fn basis_number(&self) -> &[f64] {
        &self.basis_number
    }

    pub fn per_mode_energy(&self) -> &[f64] {
        &self.per_mode_energy
    }

    pub fn cumulative_energy(&self) -> &[f64] {
        &self.cumulative_energy
    }

    pub fn eigenvalue(&self) -> &[f64] {
        &self.eigenvalue
    }

    /// Row `i` reassembled from the columns.
    pub fn row(&self, i: usize) -> Option<EnergyRow> {
        Some(EnergyRow {
            basis_number: *self.basis_number.get(i)?,
            per_mode_energy: self.per_mode_energy[i],
            cumulative_energy: self.cumulative_energy[i],
            eigenvalue: self.eigenvalue[i],
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = EnergyRow> + '_ {
        (0..self.len()).filter_map(|i| self.row(i))
    }

    /// Number of basis modes.
    pub fn len(&self) -> usize {
        self.basis_number.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.basis_number.is_empty()
    }
}
