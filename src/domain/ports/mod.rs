mod seed_source_port;

pub use seed_source_port::SeedSource;
