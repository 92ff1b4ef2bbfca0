pub mod bare_url_scanner;
pub mod image_segment_service;
pub mod pattern_extractor;
pub mod seed_normalizer;
pub mod segment_assembler;
pub mod url_classifier;

#[cfg(test)]
mod image_segment_service_test;

pub use image_segment_service::ImageSegmentService;
