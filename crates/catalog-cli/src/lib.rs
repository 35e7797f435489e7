//! CLI library components for the catalog tool.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod summary;
