//! userdeck: a single-screen terminal sample app demonstrating
//! unidirectional data flow.
//!
//! One screen lists users fetched from an in-memory repository behind a
//! simulated delay. The screen state is a closed enum (loading, empty,
//! loaded, failed) produced by a pure reducer; refresh and retry re-run the
//! same fetch path.

pub mod config;
pub mod data;
pub mod logging;
pub mod ui;
