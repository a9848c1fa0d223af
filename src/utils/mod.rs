//! Utility modules for the Takelys library.
//!
//! This module contains helpers shared by the formatters and the sorter.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Date-like input resolution and calendar arithmetic

pub mod datetime;
