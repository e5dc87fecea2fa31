//! matrix-cli
//!
//! Command-line front end for the gonum matrix codec.

pub mod config;
pub mod commands;
