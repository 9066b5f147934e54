use std::fs::File;
use std::path::Path;

use csv::StringRecord;

use super::model::{EnergyRow, EnergyTable};
use crate::error::{PlotError, Result};

/// File name written by the POD basis calculation.
pub const DEFAULT_ENERGY_FILE: &str = "podEnergy.csv";

/// Columns every data row must carry, in file order.
const REQUIRED_COLUMNS: [&str; 4] = [
    "basis_number",
    "per_mode_energy",
    "cumulative_energy",
    "eigenvalue",
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load an energy table from a comma-delimited file.
///
/// Layout: one header line (ignored), then one row per basis mode:
///
/// ```text
/// Basis#,Individual_Energy_in_Basis(%),Cummulative_Energy_in_Basis_upto_Current_Basis(%), Eigen_Values
/// 1,40,40, 0.9
/// 2,25,65, 0.5
/// ```
///
/// Fields are trimmed, blank lines skipped, columns past the fourth ignored.
/// Rows are kept exactly as read.
pub fn load_energy_table(path: &Path) -> Result<EnergyTable> {
    let file = File::open(path).map_err(|e| PlotError::missing_file(path, e))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| {
            let line = e.position().map_or(0, |p| p.line());
            PlotError::malformed(path, line, e.to_string())
        })?;
        rows.push(parse_row(&record, path)?);
    }

    if rows.is_empty() {
        return Err(PlotError::EmptyTable {
            path: path.to_path_buf(),
        });
    }

    log::debug!("Read {} energy rows from {}", rows.len(), path.display());
    Ok(EnergyTable::from_rows(rows))
}

fn parse_row(record: &StringRecord, path: &Path) -> Result<EnergyRow> {
    let line = record.position().map_or(0, |p| p.line());

    if record.len() < REQUIRED_COLUMNS.len() {
        return Err(PlotError::malformed(
            path,
            line,
            format!(
                "expected at least {} fields, found {}",
                REQUIRED_COLUMNS.len(),
                record.len()
            ),
        ));
    }

    let mut values = [0.0; 4];
    for (slot, (idx, name)) in values.iter_mut().zip(REQUIRED_COLUMNS.iter().enumerate()) {
        let field = record.get(idx).unwrap_or("");
        if field.is_empty() {
            return Err(PlotError::malformed(path, line, format!("{name} is empty")));
        }
        *slot = field.parse::<f64>().map_err(|_| {
            PlotError::malformed(path, line, format!("{name} '{field}' is not a number"))
        })?;
    }

    let [basis_number, per_mode_energy, cumulative_energy, eigenvalue] = values;
    Ok(EnergyRow {
        basis_number,
        per_mode_energy,
        cumulative_energy,
        eigenvalue,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const HEADER: &str = "Basis#,Individual_Energy_in_Basis(%),Cummulative_Energy_in_Basis_upto_Current_Basis(%), Eigen_Values\n";

    fn write_table(body: &str) -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join(DEFAULT_ENERGY_FILE);
        fs::write(&path, format!("{HEADER}{body}")).expect("Failed to write energy table");
        (dir, path)
    }

    #[test]
    fn loads_three_mode_table() {
        let (_dir, path) = write_table("1,40,40, 0.9\n2,25,65, 0.5\n3,35,100, 0.2\n");
        let table = load_energy_table(&path).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.basis_number(), &[1.0, 2.0, 3.0]);
        assert_eq!(table.per_mode_energy(), &[40.0, 25.0, 35.0]);
        assert_eq!(table.cumulative_energy(), &[40.0, 65.0, 100.0]);
        assert_eq!(table.eigenvalue(), &[0.9, 0.5, 0.2]);
    }

    #[test]
    fn keeps_rows_in_file_order() {
        // Out-of-order and non-monotonic input is passed through untouched.
        let (_dir, path) = write_table("2,25,65,0.5\n1,40,40,0.9\n3,35,60,0.2\n");
        let table = load_energy_table(&path).unwrap();

        assert_eq!(table.basis_number(), &[2.0, 1.0, 3.0]);
        assert_eq!(table.cumulative_energy(), &[65.0, 40.0, 60.0]);
    }

    #[test]
    fn ignores_extra_columns_and_blank_lines() {
        let (_dir, path) = write_table("1,70,70,4.0,extra\n\n2,30,100,1.5\n");
        let table = load_energy_table(&path).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.eigenvalue(), &[4.0, 1.5]);
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_energy_table(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, PlotError::MissingFile { .. }));
    }

    #[test]
    fn non_numeric_cumulative_energy_is_malformed() {
        let (_dir, path) = write_table("1,40,40,0.9\n2,25,abc,0.5\n");
        let err = load_energy_table(&path).unwrap_err();

        match err {
            PlotError::MalformedData { line, reason, .. } => {
                assert_eq!(line, 3);
                assert!(reason.contains("cumulative_energy"), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn short_row_is_malformed() {
        let (_dir, path) = write_table("1,40,40\n");
        let err = load_energy_table(&path).unwrap_err();
        assert!(matches!(err, PlotError::MalformedData { line: 2, .. }));
    }

    #[test]
    fn empty_required_field_is_malformed() {
        let (_dir, path) = write_table("1,,40,0.9\n");
        let err = load_energy_table(&path).unwrap_err();
        assert!(matches!(err, PlotError::MalformedData { .. }));
    }

    #[test]
    fn header_only_is_empty() {
        let (_dir, path) = write_table("");
        let err = load_energy_table(&path).unwrap_err();
        assert!(matches!(err, PlotError::EmptyTable { .. }));
    }
}
