//! wordseek - word-lookup client for the Datamuse / OneLook lexical
//! search API.
//!
//! Build a [`WordQuery`] with chained constraint setters, hand it to a
//! [`Client`], and await the decoded result list:
//!
//! ```no_run
//! use wordseek::{Client, RelationKind, WordQuery};
//!
//! # async fn demo() -> wordseek::Result<()> {
//! let client = Client::default();
//! let query = WordQuery::new()
//!     .related(RelationKind::RhymesWith, "forgetful")
//!     .max_results(5);
//! for entry in client.search(query).await? {
//!     println!("{}", entry.word);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod logging;
pub mod query;
pub mod types;

#[cfg(test)]
mod tests;

pub use client::Client;
pub use config::ClientConfig;
pub use query::{MetadataFlag, RelationKind, Side, Vocabulary, WordQuery};
pub use types::{LookupError, Result, WordEntry};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
