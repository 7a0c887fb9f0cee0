//! Application constants and configuration

pub const APP_NAME: &str = "Grade Calculator";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Folder name under the platform data directory (settings + logs).
pub const DATA_DIR_NAME: &str = "Grade Calculator";

/// Environment variable that forces console mode even when a display
/// environment is available.
pub const FORCE_CONSOLE_ENV: &str = "GRADE_CALCULATOR_CONSOLE";

pub const GRADE_MIN: f64 = 0.0;
pub const GRADE_MAX: f64 = 100.0;

pub const MENU_CHOICE_MIN: u8 = 1;
pub const MENU_CHOICE_MAX: u8 = 4;
