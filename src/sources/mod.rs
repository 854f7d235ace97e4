//! HTTP access to the upstream data sources.

pub mod dynastyprocess;
pub mod sleeper;

use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::Client;

/// Shared HTTP client; both sources use the same fixed request timeout.
static HTTP: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent("ff-data/0.1")
        .timeout(Duration::from_secs(60))
        .build()
        .expect("Client build")
});
