//! Command-line interface for stillgrove.

pub mod args;
pub mod commands;
