use crate::config::Config;
use crate::core::data::Table;
use crate::core::traits::TableStorage;
use crate::utils::error::{AppError, AppResult};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Comma-separated (or custom-delimited) files with a header row
pub struct CsvStorage {
    delimiter: u8,
}

impl CsvStorage {
    pub fn new(config: &Config) -> Self {
        Self {
            delimiter: config.input.delimiter as u8,
        }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }
}

impl Default for CsvStorage {
    fn default() -> Self {
        Self::with_delimiter(b',')
    }
}

impl TableStorage for CsvStorage {
    fn read_table(&self, path: &Path) -> AppResult<Table> {
        let file = File::open(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "failed to open input file");
            match e.kind() {
                ErrorKind::NotFound => AppError::InputNotFound,
                _ => AppError::InputRead,
            }
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| {
                warn!(path = %path.display(), error = %e, "failed to read header row");
                AppError::InputRead
            })?
            .iter()
            .map(str::to_string)
            .collect();

        if headers.is_empty() {
            warn!(path = %path.display(), "input file is empty");
            return Err(AppError::InputRead);
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| {
                warn!(path = %path.display(), error = %e, "failed to parse input record");
                AppError::InputRead
            })?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!(
            path = %path.display(),
            columns = headers.len(),
            rows = rows.len(),
            "read input table"
        );

        Ok(Table::new(headers, rows))
    }

    fn write_table(&self, path: &Path, table: &Table) -> AppResult<()> {
        let write_failed = |e: csv::Error| {
            warn!(path = %path.display(), error = %e, "failed to write output file");
            AppError::OutputWrite
        };

        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_path(path)
            .map_err(write_failed)?;

        writer.write_record(&table.headers).map_err(write_failed)?;
        for row in &table.rows {
            writer.write_record(row).map_err(write_failed)?;
        }
        writer.flush().map_err(|e| {
            warn!(path = %path.display(), error = %e, "failed to flush output file");
            AppError::OutputWrite
        })?;

        debug!(path = %path.display(), rows = table.row_count(), "wrote output table");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "Fund,P1,P2\nM1,0.84,0.71\nM2,\"0.91\",0.83\n").unwrap();

        let table = CsvStorage::default().read_table(&path).unwrap();
        assert_eq!(table.headers, vec!["Fund", "P1", "P2"]);
        assert_eq!(table.rows[1], vec!["M2", "0.91", "0.83"]);
    }

    #[test]
    fn test_missing_input_file() {
        let dir = TempDir::new().unwrap();
        let err = CsvStorage::default()
            .read_table(&dir.path().join("absent.csv"))
            .unwrap_err();
        assert_eq!(err, AppError::InputNotFound);
    }

    #[test]
    fn test_unreadable_input_file() {
        let dir = TempDir::new().unwrap();

        // A directory cannot be read as a table
        let err = CsvStorage::default().read_table(dir.path()).unwrap_err();
        assert_eq!(err, AppError::InputRead);

        let ragged = dir.path().join("ragged.csv");
        fs::write(&ragged, "A,B,C\n1,2,3\n4,5\n").unwrap();
        let err = CsvStorage::default().read_table(&ragged).unwrap_err();
        assert_eq!(err, AppError::InputRead);

        let empty = dir.path().join("empty.csv");
        fs::write(&empty, "").unwrap();
        let err = CsvStorage::default().read_table(&empty).unwrap_err();
        assert_eq!(err, AppError::InputRead);
    }

    #[test]
    fn test_write_then_read_custom_delimiter() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.tsv");
        let storage = CsvStorage::with_delimiter(b'\t');
        let table = Table::new(
            vec!["Name".into(), "Cost, USD".into(), "Rank".into()],
            vec![vec!["a".into(), "1,5".into(), "1".into()]],
        );

        storage.write_table(&path, &table).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Name\tCost, USD\tRank\na\t1,5\t1\n"
        );
        assert_eq!(storage.read_table(&path).unwrap(), table);
    }

    #[test]
    fn test_write_to_missing_directory() {
        let dir = TempDir::new().unwrap();
        let table = Table::new(vec!["A".into()], vec![]);
        let err = CsvStorage::default()
            .write_table(&dir.path().join("no/such/dir/out.csv"), &table)
            .unwrap_err();
        assert_eq!(err, AppError::OutputWrite);
    }
}
