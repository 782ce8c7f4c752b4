//! # replica-api
//!
//! Rust client for the Replica Studios text-to-speech web API.
//!
//! The crate is a thin client: it authenticates with client credentials,
//! lists the synthetic voices available to the account, and requests speech
//! synthesis for given text, returning download URLs for the rendered audio.
//! Every operation is a single request/response exchange translated to and
//! from JSON; there is no caching, retrying, or connection management beyond
//! what the underlying transport provides.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use replica_api::{AudioExtension, Client, SpeechRequest};
//!
//! #[tokio::main]
//! async fn main() -> replica_api::Result<()> {
//!     let mut client = Client::builder()
//!         .client_id("your-client-id")
//!         .client_secret("your-client-secret")
//!         .build()?;
//!
//!     client.authenticate().await?;
//!
//!     let voices = client.list_voices().await?;
//!     let (speaker_id, _name) = voices.iter().next().expect("no voices");
//!
//!     let request = SpeechRequest::new("Hello there.", speaker_id, AudioExtension::Mp3)
//!         .bit_rate(128)
//!         .sample_rate(44_100);
//!     let urls = client.synthesize(&request).await?;
//!     println!("{urls:?}");
//!
//!     Ok(())
//! }
//! ```
//!
//! Credentials may also come from the `REPLICA_CLIENT_ID` and
//! `REPLICA_CLIENT_SECRET` environment variables.
//!
//! ## Module organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | The API client, its builder, and the three operations |
//! | [`types`] | Wire types for requests and responses |
//! | [`error`] | Unified error type |
//!
//! ## Concurrency
//!
//! A [`Client`] issues one request per call and holds no locks. The access
//! token is the only mutable state; [`Client::authenticate`] takes
//! `&mut self`, so sharing a client across tasks requires an external
//! synchronization boundary such as a mutex.

pub mod client;
pub mod error;
pub mod types;

pub use client::{Client, ClientBuilder};
pub use error::Error;
pub use types::{AudioExtension, SpeechRequest, SpeechResponse, Voice};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
