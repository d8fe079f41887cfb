//! Core ranking layer
//!
//! This module contains the decision data structures, the storage trait and
//! the TOPSIS engine that form the heart of the application.

pub mod data;
pub mod engine;
pub mod traits;
