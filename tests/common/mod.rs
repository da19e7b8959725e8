//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - A mock backend built on wiremock
//! - Session and payload fixtures
//! - Custom assertion macros

#![allow(dead_code, unused_imports)]

pub mod assertions;
pub mod auth_helpers;
pub mod mock_server;

// Re-export commonly used utilities
pub use auth_helpers::*;
pub use mock_server::*;
