//! Domain layer with core entities, errors, and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{Chunk, Conversion, ConvertConfig, MessageChain, Segment, WhitelistRule};
pub use errors::{RuleError, UrlError};
pub use ports::SeedSource;
