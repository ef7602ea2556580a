//! Shared utilities for git-stager integration tests
//!
//! Tests run against real temporary git repositories.

pub mod assertions;
pub mod fixtures;
pub mod repository;
