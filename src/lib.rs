//! # uta-rest
//!
//! A REST bridge to the UTA (Universal Transcript Archive) data provider.
//!
//! UTA transcript, sequence, gene and alignment data is normally read over a
//! direct PostgreSQL connection. `uta-rest` puts an HTTP/JSON API in front of
//! that access and ships a matching client, so callers without database access
//! get exactly the data a direct provider call returns.
//!
//! ## Features
//!
//! - **One route per operation**: every provider operation is a GET route with
//!   the same parameters, derived from a single operation table
//! - **Equivalent results**: the client returns the same values, not-found
//!   outcomes and parameter errors as a direct call
//! - **Pluggable backends**: a live UTA database or an in-memory JSON fixture
//! - **Assembly maps**: GRCh37 and GRCh38 contig maps embedded in the binary
//!
//! ## Example
//!
//! ```rust
//! use uta_rest::provider::memory::MemoryProvider;
//! use uta_rest::provider::UtaProvider;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let provider = MemoryProvider::with_test_data();
//! let exons = provider
//!     .get_tx_exons("NM_199425.2", "NC_000020.10", "splign")
//!     .await
//!     .unwrap();
//! assert!(!exons.is_empty());
//! # });
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Row types, the operation table and provider errors
//! - [`provider`]: The provider trait and its PostgreSQL and in-memory backends
//! - [`web`]: Axum router and response serialization
//! - [`client`]: HTTP client mirroring the provider interface
//! - [`cli`]: Command-line interface implementation
//! - [`utils`]: Sequence normalization and slicing helpers

pub mod cli;
pub mod client;
pub mod core;
pub mod provider;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use client::{ClientError, RawResponse, UtaRestClient};
pub use core::error::ProviderError;
pub use core::operation::{Invocation, Operation};
pub use core::types::*;
pub use provider::{dispatch, Connect, UtaProvider};
pub use web::server::create_router;
