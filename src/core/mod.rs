//! Core types shared by the provider, the web server and the client.
//!
//! - [`types`]: row shapes returned by provider queries ([`types::GeneInfo`],
//!   [`types::TxExon`], [`types::TxInfo`], ...)
//! - [`error`]: [`error::ProviderError`], the failure taxonomy of every operation
//! - [`operation`]: the [`operation::Operation`] table and argument validation
//!
//! ## Coordinates
//!
//! All offsets are interbase (0-based, end-exclusive), as stored in UTA:
//! `start_i` is the first base included and `end_i` the first base excluded.

pub mod error;
pub mod operation;
pub mod types;
