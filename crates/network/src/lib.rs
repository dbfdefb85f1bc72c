// crates/network/src/lib.rs
//! Feed downloads over HTTP(S)

mod error;
mod fetcher;

pub use error::{NetworkError, NetworkResult};
pub use fetcher::{ClientConfig, FeedFetcher};
