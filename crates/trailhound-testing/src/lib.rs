//! Fixture builders shared by engine and CLI integration tests.
//!
//! Sessions are built with deterministic ids and timestamps so test output
//! is reproducible without touching a backend.

mod fixtures;

pub use fixtures::{SessionBuilder, dog_id, session};
