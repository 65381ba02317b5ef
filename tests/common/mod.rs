//! Common test utilities and helpers
//!
//! - Server and store fixtures backed by an in-memory SQLite database
//! - Seeding helpers that go through the public HTTP API
//! - Assertion macros for error bodies

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

pub use fixtures::*;
