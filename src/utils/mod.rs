pub mod scrub;
pub mod text;

pub use scrub::{sanitize_api_error, scrub_secret_patterns};
pub use text::{flatten_line_breaks, truncate_chars};
