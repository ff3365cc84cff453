//! REST server exposing the provider operations.
//!
//! ## Starting the Server
//!
//! ```text
//! # Serve a UTA database on the default port 8000
//! uta-rest serve --db-url postgresql://anonymous@localhost/uta/uta_20210129b
//!
//! # Serve a JSON fixture on all interfaces
//! uta-rest serve --fixture uta.json --address 0.0.0.0
//! ```
//!
//! ## API Endpoints
//!
//! One `GET` route per operation, named after the operation without its
//! `get_` prefix. Leading identifiers are path segments; offsets and the
//! alignment method of the three-parameter operations are query parameters:
//!
//! - `GET /seq/{ac}?start_i=&end_i=`
//! - `GET /tx_exons/{tx_ac}/{alt_ac}?alt_aln_method=`
//! - `GET /tx_for_region/{alt_ac}/{alt_aln_method}?start_i=&end_i=`
//! - `GET /data_version`
//!
//! Every operation with path parameters also answers on its bare route with
//! all parameters in the query string (`GET /gene_info?gene=`), which carries
//! identifiers that cannot be path segments: the empty string, `.` and `..`.
//! Single-identifier routes read a trailing slash (`GET /tx_for_gene/`) as the
//! empty identifier.
//!
//! See [`crate::core::operation`] for the full table.

pub mod serializer;
pub mod server;
