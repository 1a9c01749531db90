//! Session storage backed by a cache instance

pub mod handler;

pub use handler::CacheSessionHandler;
