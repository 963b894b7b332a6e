// URL handling utilities
pub mod url_builder;
pub mod url_parser;

// Parsing utilities
pub mod parse_int;

// Display utilities
pub mod status_formatter;

// Re-export all utilities for convenient access
pub use url_builder::absolute_url;
pub use url_parser::hostname_from_url;
pub use parse_int::parse_optional_int;
pub use status_formatter::{format_status, status_chip_class};
