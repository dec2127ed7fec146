//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "Symforge";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "symforge";

/// File-name stem of the generated symbols data files.
pub const SYMBOLS_FILE_STEM: &str = "merge_modes";

/// File-name stem of the generated C test headers.
pub const C_TESTS_FILE_STEM: &str = "merge_modes_symbols";
