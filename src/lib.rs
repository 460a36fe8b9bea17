//! An unbalanced integer binary search tree and a churn experiment built on it: values are
//! repeatedly deleted and replaced by fresh random ones while the tree's internal path length
//! is tracked.

pub mod binary_tree;
pub mod churn;
pub mod error;
pub mod graphviz;
pub mod live_set;

pub use binary_tree::Tree;
pub use churn::{Churn, ChurnConfig, CycleReport, Mode};
pub use error::{ChurnError, ExportError, TreeError};
pub use live_set::LiveSet;
