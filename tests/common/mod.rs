//! Common test utilities for castgraph integration tests
//!
//! Writes snapshot files into a temporary data directory so tests exercise
//! the same loading path as the CLI.

#![allow(dead_code)]

pub mod fixture;

pub use fixture::{middlemarch, TestDataset};
