use crate::cli::RunArgs;
use crate::config::Config;
use crate::core::data::{DecisionMatrix, ImpactVector, Table, TopsisResult, WeightVector};
use crate::core::engine::TopsisEngine;
use crate::core::traits::TableStorage;
use crate::storage::CsvStorage;
use crate::utils::error::AppResult;
use crate::utils::output::{OutputStyle, format_score, print_success};
use tracing::{debug, info};

pub const SCORE_COLUMN: &str = "Topsis Score";
pub const RANK_COLUMN: &str = "Rank";
pub const SUCCESS_MESSAGE: &str = "TOPSIS analysis completed successfully.";

/// Read, validate, score and write. Nothing is written unless every step
/// before it succeeded.
pub fn handle_run_command(config: &Config, args: &RunArgs, summary: bool) -> AppResult<()> {
    let storage = CsvStorage::new(config);
    let (matrix, result) = rank_file(&storage, config, args)?;

    print_success(SUCCESS_MESSAGE);

    if summary {
        println!();
        OutputStyle::print_ranking(&matrix, &result, config.output.precision);
    }

    Ok(())
}

/// The pipeline behind `handle_run_command`, generic over storage.
///
/// Validation order is fixed: read, schema, impacts, weights, shape.
pub fn rank_file<S: TableStorage>(
    storage: &S,
    config: &Config,
    args: &RunArgs,
) -> AppResult<(DecisionMatrix, TopsisResult)> {
    let mut table = storage.read_table(&args.input)?;
    let matrix = DecisionMatrix::from_table(&table)?;
    debug!(
        alternatives = matrix.alternative_count(),
        criteria = matrix.criterion_count(),
        "parsed decision matrix"
    );

    let impacts = ImpactVector::parse(&args.impacts)?;
    let weights = WeightVector::parse(&args.weights)?;

    let result = TopsisEngine::new().score(&matrix, &weights, &impacts)?;

    append_result(&mut table, &result, config.output.precision);
    storage.write_table(&args.output, &table)?;
    info!(output = %args.output.display(), "ranking written");

    Ok((matrix, result))
}

/// Add the score and rank columns, keeping the original row order
pub fn append_result(table: &mut Table, result: &TopsisResult, precision: Option<usize>) {
    let scores = result
        .scores
        .iter()
        .map(|s| format_score(*s, precision))
        .collect();
    let ranks = result.ranks.iter().map(|r| r.to_string()).collect();

    table.append_column(SCORE_COLUMN, scores);
    table.append_column(RANK_COLUMN, ranks);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{AppError, IMPACTS_INVALID, TOO_FEW_COLUMNS, WEIGHTS_NOT_NUMERIC};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    /// In-memory storage keyed by path
    #[derive(Default)]
    struct MemoryStorage {
        tables: RefCell<HashMap<PathBuf, Table>>,
    }

    impl MemoryStorage {
        fn with(path: &str, headers: &[&str], rows: &[&[&str]]) -> Self {
            let storage = Self::default();
            let table = Table::new(
                headers.iter().map(|s| s.to_string()).collect(),
                rows.iter()
                    .map(|r| r.iter().map(|s| s.to_string()).collect())
                    .collect(),
            );
            storage.tables.borrow_mut().insert(PathBuf::from(path), table);
            storage
        }

        fn get(&self, path: &str) -> Option<Table> {
            self.tables.borrow().get(Path::new(path)).cloned()
        }
    }

    impl TableStorage for MemoryStorage {
        fn read_table(&self, path: &Path) -> AppResult<Table> {
            self.tables
                .borrow()
                .get(path)
                .cloned()
                .ok_or(AppError::InputNotFound)
        }

        fn write_table(&self, path: &Path, table: &Table) -> AppResult<()> {
            self.tables
                .borrow_mut()
                .insert(path.to_path_buf(), table.clone());
            Ok(())
        }
    }

    fn args(weights: &str, impacts: &str) -> RunArgs {
        RunArgs {
            input: PathBuf::from("in.csv"),
            weights: weights.to_string(),
            impacts: impacts.to_string(),
            output: PathBuf::from("out.csv"),
        }
    }

    fn funds() -> MemoryStorage {
        MemoryStorage::with(
            "in.csv",
            &["Fund", "P1", "P2", "P3", "P4"],
            &[
                &["M1", "1", "7", "9", "9"],
                &["M2", "2", "8", "8", "7"],
                &["M3", "3", "9", "6", "3"],
                &["M4", "4", "6", "7", "6"],
                &["M5", "5", "6", "3", "8"],
            ],
        )
    }

    #[test]
    fn test_output_keeps_columns_and_row_order() {
        let storage = funds();
        let config = Config {
            output: crate::config::OutputConfig {
                precision: Some(4),
                color: false,
            },
            ..Config::default()
        };

        rank_file(&storage, &config, &args("1,1,1,1", "+,+,-,+")).unwrap();

        let out = storage.get("out.csv").unwrap();
        assert_eq!(out.headers, vec!["Fund", "P1", "P2", "P3", "P4", SCORE_COLUMN, RANK_COLUMN]);
        assert_eq!(out.rows[0], vec!["M1", "1", "7", "9", "9", "0.3677", "5"]);
        assert_eq!(out.rows[4], vec!["M5", "5", "6", "3", "8", "0.7912", "1"]);
    }

    #[test]
    fn test_rerun_on_original_columns_is_stable() {
        let storage = funds();
        let config = Config::default();
        let (_, first) = rank_file(&storage, &config, &args("2,1,1,1", "+,-,-,+")).unwrap();

        let mut out = storage.get("out.csv").unwrap();
        out.headers.truncate(5);
        for row in &mut out.rows {
            row.truncate(5);
        }
        storage.tables.borrow_mut().insert(PathBuf::from("in.csv"), out);

        let (_, second) = rank_file(&storage, &config, &args("2,1,1,1", "+,-,-,+")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_validation_order() {
        let narrow = MemoryStorage::with("in.csv", &["Fund", "P1"], &[&["M1", "x"]]);
        let err = rank_file(&narrow, &Config::default(), &args("two", "x")).unwrap_err();
        assert_eq!(err.to_string(), TOO_FEW_COLUMNS);

        // Impacts are checked before weights
        let err = rank_file(&funds(), &Config::default(), &args("two", "+,+,x,+")).unwrap_err();
        assert_eq!(err.to_string(), IMPACTS_INVALID);

        // Weights are checked before the counts
        let err = rank_file(&funds(), &Config::default(), &args("1,two", "+,+")).unwrap_err();
        assert_eq!(err.to_string(), WEIGHTS_NOT_NUMERIC);

        let err = rank_file(&funds(), &Config::default(), &args("1,1", "+,+")).unwrap_err();
        assert_eq!(err, AppError::ShapeMismatch);
    }

    #[test]
    fn test_nothing_written_on_failure() {
        let storage = funds();
        assert!(rank_file(&storage, &Config::default(), &args("1,1,1", "+,+,+")).is_err());
        assert!(storage.get("out.csv").is_none());
    }

    #[test]
    fn test_missing_input() {
        let storage = MemoryStorage::default();
        let err = rank_file(&storage, &Config::default(), &args("1", "+")).unwrap_err();
        assert_eq!(err, AppError::InputNotFound);
    }
}
