//! Application layer with the conversion pipeline and use cases.

/// Conversion services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use services::ImageSegmentService;
pub use use_cases::RewriteChainUseCase;
