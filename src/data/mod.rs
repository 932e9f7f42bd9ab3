//! Data layer for the paging core
//!
//! This module separates file scanning (paginator) from presentation
//! reshaping (display) so callers can re-project a fetched page without
//! touching the file again.

pub mod delimiter;
pub mod display;
pub mod error;
pub mod paginator;
