//! Configuration module
//!
//! Persisted viewer settings: default delimiter and page size plus
//! display toggles for the CLI shell.

pub mod config;
