//! Test helpers module
//!
//! This module provides utilities and helpers for testing IncubatorHub.
//! It includes a mock backend server, fixture builders and test setup.

#![allow(dead_code, unused_imports)]

pub mod backend_mock;
pub mod simple_test;
pub mod test_data;

pub use backend_mock::*;
pub use simple_test::*;
pub use test_data::*;
