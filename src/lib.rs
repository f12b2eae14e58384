//! Wanderlust Database Initialization
//!
//! This module exports the configuration, error, and setup pieces for
//! testing and reuse.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;

pub use config::Config;
pub use error::{InitError, Result};
