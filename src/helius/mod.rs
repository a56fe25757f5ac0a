pub mod client;
pub mod models;

pub use client::{HeliusMetadataFetcher, MetadataFetcher};
pub use models::{HeliusTokenMetadata, TokenMetadataRequest};
