//! Takelys - date labels and record sorting for a task list
//!
//! This library provides the small pieces of presentation logic a task list
//! needs: Afrikaans date labels for single dates and start/due ranges, a
//! calendar-normalized date form, humanized relative labels ("Vandag",
//! "Môre", ...), a collation-aware sort over uniform records, and the blank
//! task used by the creation page.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`format`] - Date and date-range labels
//! * [`relative`] - Humanized relative date labels
//! * [`sort`] - Sorting records by a named field
//! * [`pages`] - Page data loaders
//! * [`utils`] - Utility functions and helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and display strings
pub mod constants;

/// Date and date-range label formatting
pub mod format;

/// Logging setup
pub mod logger;

/// Page data loaders
pub mod pages;

/// Humanized relative date labels
pub mod relative;

/// Field-based sorting of uniform records
pub mod sort;

/// Task records
pub mod task;

/// Utility functions for date/time handling
pub mod utils;

pub use format::{display_date, display_date_short, format_date, CalendarDate, DateSpan};
pub use relative::{display_pretty_date, display_pretty_date_at, RelativeLabel};
pub use sort::{sort_by_field, SortOrder, SortRecord};
pub use task::NewTask;
pub use utils::datetime::{DateLike, Moment};
