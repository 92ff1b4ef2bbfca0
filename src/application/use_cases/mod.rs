//! Use case implementations.

mod rewrite_chain_use_case;

pub use rewrite_chain_use_case::{LAYOUT_PADDING, RewriteChainUseCase};
