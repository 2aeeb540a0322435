//! Library entry for varlist exposing the list controller for the binary and integration tests.

pub mod app;
pub mod args;
pub mod config;
pub mod logic;
pub mod sources;
pub mod state;
