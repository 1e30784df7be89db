//! Configuration module for the coinstats application.

mod dataset;

// Can't be private because we don't re-export it
pub mod plot;

// Re-export commonly used items
pub use dataset::{DATASET, DatasetConfig};
