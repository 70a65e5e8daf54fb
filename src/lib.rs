pub mod common;
pub mod config;
pub mod graph;
pub mod grid;
pub mod scenario;
pub mod solver;
pub mod stat;
