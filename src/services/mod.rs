//! Core services for traversal, aggregation, and size formatting

pub mod aggregate;
pub mod size;
pub mod traverse;
pub mod tree;
