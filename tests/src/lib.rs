//! Shared fixtures for the mcrypt integration tests and benchmarks
pub mod fixtures;
pub mod vectors;
