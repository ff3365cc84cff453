//! HTTP client for a uta-rest server.
//!
//! [`UtaRestClient`] mirrors the provider interface: one method per operation
//! with the same name and positional parameters. Calls return the server's
//! [`RawResponse`] (status and body) so callers can compare it against a
//! direct provider result. Only the three version methods decode their body.
//!
//! Argument validation happens before any request is sent, using the same
//! operation table as the server, so a missing parameter fails locally with
//! the same [`ProviderError`] a direct call produces.
//!
//! ```rust,no_run
//! use uta_rest::client::UtaRestClient;
//!
//! # async fn example() -> Result<(), uta_rest::client::ClientError> {
//! let client = UtaRestClient::new("http://127.0.0.1:8000")?;
//! let response = client.get_tx_exons("NM_199425.2", "NC_000020.10", "splign").await?;
//! assert!(response.is_success());
//! # Ok(())
//! # }
//! ```

use reqwest::Url;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::core::error::ProviderError;
use crate::core::operation::{Arg, Invocation, Operation};

pub mod compare;

/// Server used when `UTAREST_URL` is unset
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Error, Debug)]
pub enum ClientError {
    /// The arguments do not fit the operation; nothing was sent
    #[error(transparent)]
    Arguments(#[from] ProviderError),

    #[error("Invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Status and body of a server response, undecoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    status: u16,
    body: Vec<u8>,
}

impl RawResponse {
    #[must_use]
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body as text, with invalid UTF-8 replaced
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as JSON
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Decode` if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Client for a uta-rest server
#[derive(Debug, Clone)]
pub struct UtaRestClient {
    base_url: Url,
    http: reqwest::Client,
}

impl UtaRestClient {
    /// Create a client for the server at `base_url`
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidBaseUrl` if `base_url` is not an absolute
    /// http(s) URL, or `ClientError::Transport` if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let parsed = Url::parse(base_url)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https") && !url.cannot_be_a_base())
            .ok_or_else(|| ClientError::InvalidBaseUrl(base_url.to_string()))?;

        let http = reqwest::Client::builder()
            .user_agent(concat!("uta-rest/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: parsed,
            http,
        })
    }

    /// Create a client for `UTAREST_URL`, or [`DEFAULT_BASE_URL`] when unset
    ///
    /// # Errors
    ///
    /// See [`UtaRestClient::new`].
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url =
            std::env::var("UTAREST_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Call an operation with positional string arguments, as typed on a command line.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Arguments` without contacting the server when the
    /// arguments do not fit the operation, otherwise a transport failure.
    pub async fn call(
        &self,
        operation: Operation,
        args: &[&str],
    ) -> Result<RawResponse, ClientError> {
        let invocation = Invocation::from_positional(operation, args)?;
        self.send(&invocation).await
    }

    /// Send a validated invocation
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Transport` if the server cannot be reached.
    pub async fn send(&self, invocation: &Invocation) -> Result<RawResponse, ClientError> {
        let url = self.url_for(invocation)?;
        tracing::debug!(operation = %invocation.operation(), %url, "GET");

        let response = self.http.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        tracing::debug!(status, bytes = body.len(), "response received");

        Ok(RawResponse::new(status, body))
    }

    fn url_for(&self, invocation: &Invocation) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(invocation.path_segments());

        let pairs = invocation.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    async fn invoke(
        &self,
        operation: Operation,
        args: Vec<Arg>,
    ) -> Result<RawResponse, ClientError> {
        let invocation = Invocation::new(operation, args)?;
        self.send(&invocation).await
    }

    async fn version(&self, operation: Operation) -> Result<String, ClientError> {
        let response = self.invoke(operation, Vec::new()).await?;
        if !response.is_success() {
            return Err(ClientError::Status {
                status: response.status(),
                body: response.text(),
            });
        }
        response.json()
    }

    pub async fn get_seq(
        &self,
        ac: &str,
        start_i: Option<i64>,
        end_i: Option<i64>,
    ) -> Result<RawResponse, ClientError> {
        self.invoke(
            Operation::GetSeq,
            vec![ac.into(), start_i.into(), end_i.into()],
        )
        .await
    }

    pub async fn get_acs_for_protein_seq(&self, seq: &str) -> Result<RawResponse, ClientError> {
        self.invoke(Operation::GetAcsForProteinSeq, vec![seq.into()])
            .await
    }

    pub async fn get_gene_info(&self, gene: &str) -> Result<RawResponse, ClientError> {
        self.invoke(Operation::GetGeneInfo, vec![gene.into()]).await
    }

    pub async fn get_tx_exons(
        &self,
        tx_ac: &str,
        alt_ac: &str,
        alt_aln_method: &str,
    ) -> Result<RawResponse, ClientError> {
        self.invoke(
            Operation::GetTxExons,
            vec![tx_ac.into(), alt_ac.into(), alt_aln_method.into()],
        )
        .await
    }

    pub async fn get_tx_for_gene(&self, gene: &str) -> Result<RawResponse, ClientError> {
        self.invoke(Operation::GetTxForGene, vec![gene.into()]).await
    }

    pub async fn get_tx_for_region(
        &self,
        alt_ac: &str,
        alt_aln_method: &str,
        start_i: i64,
        end_i: i64,
    ) -> Result<RawResponse, ClientError> {
        self.invoke(
            Operation::GetTxForRegion,
            vec![
                alt_ac.into(),
                alt_aln_method.into(),
                start_i.into(),
                end_i.into(),
            ],
        )
        .await
    }

    pub async fn get_alignments_for_region(
        &self,
        alt_ac: &str,
        start_i: i64,
        end_i: i64,
    ) -> Result<RawResponse, ClientError> {
        self.invoke(
            Operation::GetAlignmentsForRegion,
            vec![alt_ac.into(), start_i.into(), end_i.into()],
        )
        .await
    }

    pub async fn get_tx_identity_info(&self, tx_ac: &str) -> Result<RawResponse, ClientError> {
        self.invoke(Operation::GetTxIdentityInfo, vec![tx_ac.into()])
            .await
    }

    pub async fn get_tx_info(
        &self,
        tx_ac: &str,
        alt_ac: &str,
        alt_aln_method: &str,
    ) -> Result<RawResponse, ClientError> {
        self.invoke(
            Operation::GetTxInfo,
            vec![tx_ac.into(), alt_ac.into(), alt_aln_method.into()],
        )
        .await
    }

    pub async fn get_tx_mapping_options(&self, tx_ac: &str) -> Result<RawResponse, ClientError> {
        self.invoke(Operation::GetTxMappingOptions, vec![tx_ac.into()])
            .await
    }

    pub async fn get_similar_transcripts(&self, tx_ac: &str) -> Result<RawResponse, ClientError> {
        self.invoke(Operation::GetSimilarTranscripts, vec![tx_ac.into()])
            .await
    }

    pub async fn get_pro_ac_for_tx_ac(&self, tx_ac: &str) -> Result<RawResponse, ClientError> {
        self.invoke(Operation::GetProAcForTxAc, vec![tx_ac.into()])
            .await
    }

    pub async fn get_assembly_map(&self, assembly_name: &str) -> Result<RawResponse, ClientError> {
        self.invoke(Operation::GetAssemblyMap, vec![assembly_name.into()])
            .await
    }

    /// # Errors
    ///
    /// Returns `ClientError::Status` for a non-success response.
    pub async fn data_version(&self) -> Result<String, ClientError> {
        self.version(Operation::DataVersion).await
    }

    /// # Errors
    ///
    /// Returns `ClientError::Status` for a non-success response.
    pub async fn schema_version(&self) -> Result<String, ClientError> {
        self.version(Operation::SchemaVersion).await
    }

    /// # Errors
    ///
    /// Returns `ClientError::Status` for a non-success response.
    pub async fn sequence_source(&self) -> Result<String, ClientError> {
        self.version(Operation::SequenceSource).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(base: &str, operation: Operation, args: &[&str]) -> String {
        let client = UtaRestClient::new(base).unwrap();
        let invocation = Invocation::from_positional(operation, args).unwrap();
        client.url_for(&invocation).unwrap().to_string()
    }

    #[test]
    fn test_url_path_and_query() {
        assert_eq!(
            url(
                "http://localhost:8000",
                Operation::GetTxExons,
                &["NM_199425.2", "NC_000020.10", "splign"]
            ),
            "http://localhost:8000/tx_exons/NM_199425.2/NC_000020.10?alt_aln_method=splign"
        );
        assert_eq!(
            url("http://localhost:8000", Operation::DataVersion, &[]),
            "http://localhost:8000/data_version"
        );
    }

    #[test]
    fn test_url_omits_absent_offsets() {
        assert_eq!(
            url("http://h", Operation::GetSeq, &["NC_000007.13", "10"]),
            "http://h/seq/NC_000007.13?start_i=10"
        );
        assert_eq!(
            url("http://h", Operation::GetSeq, &["NC_000007.13"]),
            "http://h/seq/NC_000007.13"
        );
    }

    #[test]
    fn test_url_keeps_base_path() {
        assert_eq!(
            url("http://h/uta/", Operation::GetGeneInfo, &["VHL"]),
            "http://h/uta/gene_info/VHL"
        );
    }

    #[test]
    fn test_url_escapes_segments() {
        assert_eq!(
            url("http://h", Operation::GetAcsForProteinSeq, &["MR AK/W"]),
            "http://h/acs_for_protein_seq/MR%20AK%2FW"
        );
    }

    #[test]
    fn test_url_moves_unusable_segments_to_query() {
        assert_eq!(
            url("http://h", Operation::GetGeneInfo, &[""]),
            "http://h/gene_info?gene="
        );
        assert_eq!(
            url("http://h", Operation::GetTxMappingOptions, &[".."]),
            "http://h/tx_mapping_options?tx_ac=.."
        );
        assert_eq!(
            url("http://h", Operation::GetTxForRegion, &["NC_000020.10", ".", "1", "2"]),
            "http://h/tx_for_region?alt_ac=NC_000020.10&alt_aln_method=.&start_i=1&end_i=2"
        );
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(matches!(
            UtaRestClient::new("not a url"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            UtaRestClient::new("mailto:someone@example.org"),
            Err(ClientError::InvalidBaseUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_parameter_fails_before_request() {
        // nothing listens here; a sent request would be a transport error
        let client = UtaRestClient::new("http://127.0.0.1:9").unwrap();
        let err = client
            .call(Operation::GetTxExons, &["NM_199425.2", "NC_000020.10"])
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::Arguments(ProviderError::MissingParameter {
                parameter: "alt_aln_method",
                ..
            })
        ));
    }

    #[test]
    fn test_raw_response_accessors() {
        let response = RawResponse::new(404, br#"{"error":"x"}"#.to_vec());
        assert!(!response.is_success());
        assert_eq!(response.status(), 404);
        let value: serde_json::Value = response.json().unwrap();
        assert_eq!(value["error"], "x");
    }
}
