/// Application identity
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Remote service constants
pub const DEFAULT_ENDPOINT: &str = "http://isitup.org";
pub const RESPONSE_SUFFIX: &str = ".txt";
pub const RESPONSE_FIELD_COUNT: usize = 6;
pub const FIELD_DELIMITER: char = ',';

/// Sentinel used by the remote service for absent values
pub const NULL_TOKEN: &str = "NULL";

/// Scheme prefixes stripped from user input, checked in order
pub const SCHEME_PREFIXES: [&str; 4] = ["http://", "https://", "http:", "https:"];

/// Time formatting
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Field-selection modifier that suppresses labels
pub const NO_LABEL_CODE: &str = "l";

/// Exit codes
pub const EXIT_USAGE: u8 = 1;
pub const EXIT_FAILURE: u8 = 2;

/// Clears the terminal and homes the cursor
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";
