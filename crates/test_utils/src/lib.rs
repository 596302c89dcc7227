//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! temporal codec test suite.
//!
//! # Modules
//!
//! - `fixtures`: Fixed reference values for every temporal type
//! - `records`: Composite records carrying all eleven types
//! - `assertions`: Assertions that compare offsets and zones, not just instants
//! - `generators`: Property-based test data generators
//! - `logging`: Tracing setup for tests

pub mod fixtures;
pub mod records;
pub mod assertions;
pub mod generators;
pub mod logging;

pub use fixtures::*;
pub use records::*;
pub use assertions::*;
pub use generators::*;
pub use logging::init_tracing;
