//! Core data structures for TOPSIS ranking
//!
//! This module contains the tabular input, the parsed decision matrix and the
//! weight and impact vectors that drive the scoring pass.

use crate::utils::error::{
    AppError, AppResult, IMPACTS_INVALID, IMPACTS_NOT_SEPARATED, NO_DATA_ROWS,
    NON_NUMERIC_CRITERIA, TOO_FEW_COLUMNS, WEIGHTS_NOT_NUMERIC, WEIGHTS_NOT_POSITIVE,
};
use std::str::FromStr;

/// A table read from disk: a header row and string cells, kept verbatim so the
/// output reproduces the original columns exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Append a derived column. `values` holds one cell per row, in row order.
    pub fn append_column(&mut self, name: &str, values: Vec<String>) {
        debug_assert_eq!(values.len(), self.rows.len());
        self.headers.push(name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
    }
}

/// Direction of preference for a criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    /// Higher is better (`+`)
    Benefit,
    /// Lower is better (`-`)
    Cost,
}

impl FromStr for Impact {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Impact::Benefit),
            "-" => Ok(Impact::Cost),
            _ => Err(AppError::ImpactFormat(IMPACTS_INVALID.to_string())),
        }
    }
}

/// One impact per criterion, in column order
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactVector(pub Vec<Impact>);

impl ImpactVector {
    /// Parse a comma-separated list of `+`/`-` tokens.
    ///
    /// Blank tokens are reported before unknown symbols, so `"+,,x"` complains
    /// about separators rather than about `x`.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let tokens: Vec<&str> = raw.split(',').collect();

        if tokens.iter().any(|token| token.trim().is_empty()) {
            return Err(AppError::ImpactFormat(IMPACTS_NOT_SEPARATED.to_string()));
        }

        let impacts = tokens
            .into_iter()
            .map(Impact::from_str)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self(impacts))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One positive weight per criterion, in column order
#[derive(Debug, Clone, PartialEq)]
pub struct WeightVector(pub Vec<f64>);

impl WeightVector {
    /// Parse a comma-separated list of positive numbers
    pub fn parse(raw: &str) -> AppResult<Self> {
        let weights = raw
            .split(',')
            .map(|token| {
                token
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| AppError::WeightFormat(WEIGHTS_NOT_NUMERIC.to_string()))
            })
            .collect::<AppResult<Vec<_>>>()?;

        if weights.iter().any(|w| !w.is_finite() || *w <= 0.0) {
            return Err(AppError::WeightFormat(WEIGHTS_NOT_POSITIVE.to_string()));
        }

        Ok(Self(weights))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Alternatives × criteria, parsed from columns 2..N of a [`Table`].
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionMatrix {
    pub alternatives: Vec<String>,
    pub criteria: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    /// Build a matrix directly from rows of criterion values.
    /// Alternatives are labelled by their 1-based row number.
    pub fn from_rows(criteria: Vec<String>, values: Vec<Vec<f64>>) -> Self {
        let alternatives = (1..=values.len()).map(|i| i.to_string()).collect();
        Self {
            alternatives,
            criteria,
            values,
        }
    }

    /// Validate the table schema and parse every criterion cell.
    ///
    /// The first column is an identifier and is never parsed.
    pub fn from_table(table: &Table) -> AppResult<Self> {
        if table.column_count() < 3 {
            return Err(AppError::Schema(TOO_FEW_COLUMNS.to_string()));
        }
        if table.row_count() == 0 {
            return Err(AppError::Schema(NO_DATA_ROWS.to_string()));
        }

        let mut alternatives = Vec::with_capacity(table.row_count());
        let mut values = Vec::with_capacity(table.row_count());

        for row in &table.rows {
            if row.len() != table.column_count() {
                return Err(AppError::InputRead);
            }
            alternatives.push(row.first().cloned().unwrap_or_default());

            let parsed = row
                .iter()
                .skip(1)
                .map(|cell| parse_criterion_cell(cell))
                .collect::<AppResult<Vec<_>>>()?;
            values.push(parsed);
        }

        Ok(Self {
            alternatives,
            criteria: table.headers[1..].to_vec(),
            values,
        })
    }

    pub fn alternative_count(&self) -> usize {
        self.values.len()
    }

    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    /// Values of criterion `j` across all alternatives
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().map(move |row| row[j])
    }
}

fn parse_criterion_cell(cell: &str) -> AppResult<f64> {
    match cell.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(AppError::Schema(NON_NUMERIC_CRITERIA.to_string())),
    }
}

/// Closeness scores and dense ranks, one per alternative in input order
#[derive(Debug, Clone, PartialEq)]
pub struct TopsisResult {
    pub scores: Vec<f64>,
    pub ranks: Vec<usize>,
}

impl TopsisResult {
    /// Row indices ordered best first; ties keep input order
    pub fn order_by_rank(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.ranks.len()).collect();
        order.sort_by_key(|&i| self.ranks[i]);
        order
    }
}
