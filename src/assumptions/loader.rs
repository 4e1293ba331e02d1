//! CSV-based assumption loader
//!
//! Loads plan assumptions from CSV files in data/assumptions/

use std::fs::File;
use std::path::Path;

use crate::error::{Error, Result};

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

fn open_csv(path: &Path) -> Result<csv::Reader<File>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    Ok(csv::Reader::from_reader(file))
}

fn cell<'r>(record: &'r csv::StringRecord, index: usize, file: &str) -> Result<&'r str> {
    record
        .get(index)
        .ok_or_else(|| Error::Assumption(format!("{file}: missing column {}", index + 1)))
}

fn parse_cell<T: std::str::FromStr>(value: &str, file: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::Assumption(format!("{file}: cannot parse {value:?}")))
}

/// Load expense brackets from CSV
/// Returns Vec<(max_age, monthly_expense)> in file order
pub fn load_expense_brackets(path: &Path) -> Result<Vec<(u32, i64)>> {
    let mut reader = open_csv(&path.join("expense_brackets.csv"))?;
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;
        let file = "expense_brackets.csv";
        let max_age: u32 = parse_cell(cell(&record, 0, file)?, file)?;
        let monthly: i64 = parse_cell(cell(&record, 1, file)?, file)?;
        rows.push((max_age, monthly));
    }

    Ok(rows)
}

/// Load life event amounts from CSV
/// Returns Vec<(event_name, amount)>
pub fn load_life_event_costs(path: &Path) -> Result<Vec<(String, f64)>> {
    let mut reader = open_csv(&path.join("life_event_costs.csv"))?;
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;
        let file = "life_event_costs.csv";
        let event = cell(&record, 0, file)?.trim().to_string();
        let amount: f64 = parse_cell(cell(&record, 1, file)?, file)?;
        rows.push((event, amount));
    }

    Ok(rows)
}

/// Raw assumption tables read from a directory
#[derive(Debug, Clone)]
pub struct LoadedAssumptions {
    pub expense_brackets: Vec<(u32, i64)>,
    pub life_event_costs: Vec<(String, f64)>,
}

impl LoadedAssumptions {
    /// Load all assumptions from the default path
    pub fn load_default() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load all assumptions from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(Self {
            expense_brackets: load_expense_brackets(path)?,
            life_event_costs: load_life_event_costs(path)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_tables(dir: &Path, events: &str) {
        fs::write(
            dir.join("expense_brackets.csv"),
            "max_age,monthly_expense\n34,158000\n59,186000\n120,150000\n",
        )
        .unwrap();
        fs::write(dir.join("life_event_costs.csv"), events).unwrap();
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        write_tables(dir.path(), "event,amount\nmortgage_annual,900000\nretirement_work_ratio,0.5\n");

        let loaded = LoadedAssumptions::load_from(dir.path()).unwrap();
        assert_eq!(loaded.expense_brackets, vec![(34, 158_000), (59, 186_000), (120, 150_000)]);
        assert_eq!(loaded.life_event_costs.len(), 2);
        assert_eq!(loaded.life_event_costs[0], ("mortgage_annual".to_string(), 900_000.0));
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LoadedAssumptions::load_from(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_bad_cell_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        write_tables(dir.path(), "event,amount\nmortgage_annual,lots\n");

        let err = LoadedAssumptions::load_from(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Assumption(_)));
    }

    #[test]
    fn test_single_column_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("expense_brackets.csv"), "max_age\n34\n").unwrap();

        let err = load_expense_brackets(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Assumption(ref msg) if msg.contains("missing column")));

        fs::write(dir.path().join("life_event_costs.csv"), "event\nmortgage_annual\n").unwrap();
        let err = load_life_event_costs(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Assumption(_)));
    }

    #[test]
    fn test_shipped_tables_load() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_ASSUMPTIONS_PATH);
        let loaded = LoadedAssumptions::load_from(&path).unwrap();
        assert_eq!(loaded.expense_brackets.len(), 3);
        assert!(!loaded.life_event_costs.is_empty());
    }
}
