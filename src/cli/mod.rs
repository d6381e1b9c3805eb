//! Command line interface for the `translate-api` binary

pub mod commands;
