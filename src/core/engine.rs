//! TOPSIS scoring
//!
//! raw matrix → normalized → weighted → ideal points → distances → closeness
//! → dense rank. Every step is a pure function over in-memory vectors.

use crate::core::data::{DecisionMatrix, Impact, ImpactVector, TopsisResult, WeightVector};
use crate::utils::error::{AppError, AppResult};
use tracing::debug;

/// Best and worst attainable weighted value per criterion
#[derive(Debug, Clone, PartialEq)]
pub struct IdealPoints {
    pub best: Vec<f64>,
    pub worst: Vec<f64>,
}

/// Euclidean distance of each alternative to both ideal points
#[derive(Debug, Clone, PartialEq)]
pub struct Distances {
    pub to_best: Vec<f64>,
    pub to_worst: Vec<f64>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TopsisEngine;

impl TopsisEngine {
    pub fn new() -> Self {
        Self
    }

    /// Score and rank every alternative of `matrix`.
    ///
    /// Fails with `ShapeMismatch` when the weight, impact and criterion counts
    /// differ, and with `DegenerateInput` when a criterion column has zero norm
    /// or an alternative sits on both ideal points at once.
    pub fn score(
        &self,
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
    ) -> AppResult<TopsisResult> {
        let criteria = matrix.criterion_count();
        if weights.len() != criteria || impacts.len() != criteria {
            return Err(AppError::ShapeMismatch);
        }

        let norms = column_norms(matrix);
        if let Some(j) = norms.iter().position(|n| *n == 0.0) {
            return Err(AppError::DegenerateInput(format!(
                "Criterion column '{}' has all zero values and cannot be normalized.",
                matrix.criteria[j]
            )));
        }

        let normalized = normalize(&matrix.values, &norms);
        let weighted = apply_weights(&normalized, &weights.0);
        let ideal = ideal_points(&weighted, &impacts.0);
        debug!(best = ?ideal.best, worst = ?ideal.worst, "ideal points");

        let distances = distances(&weighted, &ideal);
        let scores = closeness(&distances).map_err(|i| {
            AppError::DegenerateInput(format!(
                "Alternative '{}' coincides with both ideal points; its score is undefined.",
                matrix.alternatives[i]
            ))
        })?;
        let ranks = dense_rank(&scores);

        debug!(
            alternatives = matrix.alternative_count(),
            criteria, "scored decision matrix"
        );

        Ok(TopsisResult { scores, ranks })
    }
}

/// Euclidean norm of each criterion column.
///
/// Folding with `hypot` keeps the norm finite and non-zero for any finite,
/// non-zero column, however large or small its magnitude.
pub fn column_norms(matrix: &DecisionMatrix) -> Vec<f64> {
    (0..matrix.criterion_count())
        .map(|j| matrix.column(j).fold(0.0, f64::hypot))
        .collect()
}

/// Divide every value by its column norm
pub fn normalize(values: &[Vec<f64>], norms: &[f64]) -> Vec<Vec<f64>> {
    values
        .iter()
        .map(|row| row.iter().zip(norms).map(|(x, n)| x / n).collect())
        .collect()
}

pub fn apply_weights(values: &[Vec<f64>], weights: &[f64]) -> Vec<Vec<f64>> {
    values
        .iter()
        .map(|row| row.iter().zip(weights).map(|(x, w)| x * w).collect())
        .collect()
}

/// Ideal-best takes the column max for benefit criteria and the min for cost
/// criteria; ideal-worst takes the opposite.
pub fn ideal_points(weighted: &[Vec<f64>], impacts: &[Impact]) -> IdealPoints {
    let mut best = Vec::with_capacity(impacts.len());
    let mut worst = Vec::with_capacity(impacts.len());

    for (j, impact) in impacts.iter().enumerate() {
        let (min, max) = weighted
            .iter()
            .map(|row| row[j])
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
                (lo.min(x), hi.max(x))
            });

        match impact {
            Impact::Benefit => {
                best.push(max);
                worst.push(min);
            }
            Impact::Cost => {
                best.push(min);
                worst.push(max);
            }
        }
    }

    IdealPoints { best, worst }
}

fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x - y).fold(0.0, f64::hypot)
}

pub fn distances(weighted: &[Vec<f64>], ideal: &IdealPoints) -> Distances {
    Distances {
        to_best: weighted.iter().map(|row| euclidean(row, &ideal.best)).collect(),
        to_worst: weighted.iter().map(|row| euclidean(row, &ideal.worst)).collect(),
    }
}

/// `d_worst / (d_best + d_worst)` per alternative.
///
/// Returns the index of the first alternative whose distances are both zero.
pub fn closeness(distances: &Distances) -> Result<Vec<f64>, usize> {
    distances
        .to_best
        .iter()
        .zip(&distances.to_worst)
        .enumerate()
        .map(|(i, (best, worst))| {
            let total = best + worst;
            if total == 0.0 {
                Err(i)
            } else {
                Ok(worst / total)
            }
        })
        .collect()
}

/// Dense ranking by descending score: equal scores share a rank and the next
/// distinct score gets the next integer.
pub fn dense_rank(scores: &[f64]) -> Vec<usize> {
    let mut distinct: Vec<f64> = scores.to_vec();
    distinct.sort_by(|a, b| b.total_cmp(a));
    distinct.dedup();

    scores
        .iter()
        .map(|s| {
            distinct
                .binary_search_by(|probe| s.total_cmp(probe))
                .map(|pos| pos + 1)
                .unwrap_or(distinct.len())
        })
        .collect()
}
