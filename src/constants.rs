//! Constants used throughout the application
//!
//! This module centralizes the fixed Afrikaans display strings so the
//! formatters and the command-line front end agree on them.

// Relative date labels
pub const LABEL_NO_DATE: &str = "Geen datum";
pub const LABEL_PAST: &str = "Verby";
pub const LABEL_TODAY: &str = "Vandag";
pub const LABEL_TOMORROW: &str = "Môre";
pub const LABEL_DAY_AFTER_TOMORROW: &str = "Oormôre";
pub const LABEL_THIS_WEEK: &str = "Hierdie week";
pub const LABEL_THIS_MONTH: &str = "Hierdie maand";
pub const LABEL_NEXT_MONTH: &str = "Volgende maand";
pub const LABEL_LATER: &str = "Later";

/// Abbreviated month names, January first
pub const MONTH_ABBREVIATIONS: [&str; 12] =
    ["Jan", "Feb", "Mrt", "Apr", "Mei", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Des"];

// Separators used by the range formatter
pub const RANGE_SEPARATOR: &str = " - ";
pub const DAY_RANGE_SEPARATOR: &str = "-";

// Repeat interval defaults for new tasks
pub const DEFAULT_REPEAT_INTERVAL_NUMBER: u32 = 1;

// Config and logging
pub const APP_NAME: &str = "takelys";
pub const CONFIG_FILE_NAME: &str = "takelys.toml";
pub const LOG_FILE_NAME: &str = "takelys.log";
pub const CONFIG_GENERATED: &str = "✅ Configuration file generated";
