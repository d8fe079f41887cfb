use crate::utils::output::OutputStyle;
use thiserror::Error;

/// Every failure the ranking pipeline can report. The display text is the
/// exact message shown to the user after `Error: `.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("{0}")]
    Usage(String),

    #[error("Input file not found.")]
    InputNotFound,

    #[error("Unable to read input file.")]
    InputRead,

    #[error("{0}")]
    Schema(String),

    #[error("{0}")]
    ImpactFormat(String),

    #[error("{0}")]
    WeightFormat(String),

    #[error("Number of weights, impacts, and criteria columns must be same.")]
    ShapeMismatch,

    #[error("{0}")]
    DegenerateInput(String),

    #[error("Unable to write output file.")]
    OutputWrite,

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

pub const USAGE: &str =
    "Usage: topsis <InputDataFile> <Weights> <Impacts> <OutputResultFileName>";

pub const TOO_FEW_COLUMNS: &str = "Input file must contain three or more columns.";
pub const NO_DATA_ROWS: &str = "Input file must contain at least one row of data.";
pub const NON_NUMERIC_CRITERIA: &str = "From 2nd to last columns must contain numeric values only.";
pub const IMPACTS_NOT_SEPARATED: &str = "Impacts must be separated by commas.";
pub const IMPACTS_INVALID: &str = "Impacts must be either '+' or '-'.";
pub const WEIGHTS_NOT_NUMERIC: &str = "Weights must be numeric and separated by commas.";
pub const WEIGHTS_NOT_POSITIVE: &str = "Weights must be positive numbers.";

/// Print an error the way the command line contract expects: on stdout,
/// prefixed with `Error: `.
pub fn report_error(err: &AppError) {
    println!("{}", OutputStyle::error(&format!("Error: {}", err)));
}
