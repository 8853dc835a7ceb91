//! Shared test fixtures for BigOh crates.
//!
//! This crate provides runners with controlled behavior for testing timing
//! and estimation code. It depends only on `bigoh-core` and
//! `bigoh-algorithms`, so any crate above them can use it as a dev-dependency.
//!
//! - [`RecordingRunner`] - does no work, records every call
//! - [`FailingRunner`] - fails on a chosen algorithm or call number
//! - [`SpinRunner`] - busy-waits `unit * f(n)`, following the growth model exactly
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! bigoh-test = { workspace = true }
//! ```

mod runners;

pub use runners::{FailingRunner, RecordingRunner, SpinRunner};
