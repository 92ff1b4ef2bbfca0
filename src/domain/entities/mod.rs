//! Domain entity definitions.

mod chunk;
mod convert_config;
mod message_chain;
mod parsed_url;
mod segment;

pub use chunk::Chunk;
pub use convert_config::{ConvertConfig, FALLBACK_RULE_HOST, FALLBACK_RULE_PATH, WhitelistRule};
pub use message_chain::{MessageChain, MessageComponent};
pub use parsed_url::ParsedUrl;
pub use segment::{Conversion, Segment};
