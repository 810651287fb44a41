//! # Case Feed
//!
//! `case_feed` holds the two HTTP collaborators of the viral-insights
//! workspace:
//!
//! - [`CaseApiClient`]: day-one cumulative case statistics per country,
//!   covid19api `total/dayone/country` format
//! - [`NewsApiClient`]: covid top headlines per country code, newsapi.org
//!   `v2/top-headlines` format
//!
//! Both clients are blocking; response decoding lives in standalone parse
//! functions so it can be tested against canned payloads without a
//! network.
//!
//! The news client needs an API key, read from the `NEWS_API_KEY`
//! environment variable via [`NewsApiClient::from_env`].

pub mod covid;
pub mod error;
pub mod news;

// Re-export commonly used types
pub use crate::covid::{parse_total_response, CaseApiClient};
pub use crate::error::FeedError;
pub use crate::news::{parse_headlines_response, Article, NewsApiClient, NEWS_API_KEY_VAR};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
