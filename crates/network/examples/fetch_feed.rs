//! Downloads a feed and reports its size
//!
//! ```sh
//! cargo run -p feedpage-network --example fetch_feed -- http://rss.cnn.com/rss/cnn_topstories.rss
//! ```

use feedpage_network::{ClientConfig, FeedFetcher};
use std::time::Duration;

fn main() {
    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://rss.cnn.com/rss/cnn_topstories.rss".to_string());

    let fetcher = FeedFetcher::with_config(ClientConfig {
        timeout: Duration::from_secs(10),
        ..ClientConfig::default()
    })
    .expect("Failed to build client");

    match fetcher.fetch(&url) {
        Ok(body) => println!("{}: {} bytes", url, body.len()),
        Err(e) => {
            eprintln!("{}: {}", url, e);
            if e.is_client_error() {
                eprintln!("The server rejected the request; check the URL.");
            }
            std::process::exit(1);
        }
    }
}
