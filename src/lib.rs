//! Topsis - a Rust-based TOPSIS ranking tool
//!
//! This library scores alternatives against weighted benefit and cost
//! criteria, ranks them by closeness to the ideal solution, and reads and
//! writes the decision tables as CSV.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod storage;
pub mod utils;

// Re-export core types for easier use
pub use crate::core::{
    data::{DecisionMatrix, Impact, ImpactVector, Table, TopsisResult, WeightVector},
    engine::TopsisEngine,
    traits::TableStorage,
};
pub use storage::CsvStorage;
pub use utils::error::{AppError, AppResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
