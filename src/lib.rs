//! defconfig-report: annotate Kconfig menu trees with loaded defconfig state
//!
//! Loads one or more defconfig snapshot files, folds their assignments into a
//! single name-keyed table, mirrors an externally parsed Kconfig menu tree into
//! an annotated tree where each node knows whether it (or any descendant) was
//! defined by the loaded snapshots, and prints that tree as a hierarchically
//! indented report.
//!
//! The Kconfig language parser itself is an external collaborator: this crate
//! consumes its output as a serialized menu tree (see [`kconfig`]).

pub mod cli;
pub mod config;
pub mod kconfig;
pub mod render;
pub mod snapshot;
pub mod tree;
