//! Domain error types.

mod rule_error;
mod url_error;

pub use rule_error::RuleError;
pub use url_error::UrlError;
