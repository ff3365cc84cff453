//! In-memory provider backed by a JSON fixture.
//!
//! The fixture holds UTA rows in the same shapes the PostgreSQL backend
//! returns, and every operation reproduces the database query semantics over
//! those rows (filters, grouping, ordering and not-found behavior).

use async_trait::async_trait;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::core::error::ProviderError;
use crate::core::types::{
    AssociatedAccession, GeneInfo, SimilarTranscript, TxExon, TxIdentityInfo, TxInfo,
    TxMappingOption, TxRegion,
};
use crate::provider::{single_row, Connect, UtaProvider};
use crate::utils::validation::{seq_md5, slice_sequence};

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Failed to read fixture: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse fixture: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Serializable fixture format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UtaFixture {
    pub data_version: String,
    pub schema_version: String,
    pub sequence_source: String,
    /// Accession -> sequence
    #[serde(default)]
    pub sequences: IndexMap<String, String>,
    #[serde(default)]
    pub genes: Vec<GeneInfo>,
    /// One row per transcript alignment (`transcript` joined with `exon_set`)
    #[serde(default)]
    pub transcripts: Vec<TxInfo>,
    #[serde(default)]
    pub exons: Vec<TxExon>,
    #[serde(default)]
    pub identities: Vec<TxIdentityInfo>,
    #[serde(default)]
    pub similar_transcripts: Vec<SimilarTranscript>,
    #[serde(default)]
    pub associated_accessions: Vec<AssociatedAccession>,
}

/// Provider over an in-memory [`UtaFixture`].
///
/// Cloning is cheap; each request gets its own clone as its connection handle.
#[derive(Debug, Clone)]
pub struct MemoryProvider {
    fixture: Arc<UtaFixture>,
}

type SpanKey = (String, String, i16, String);

impl MemoryProvider {
    #[must_use]
    pub fn new(fixture: UtaFixture) -> Self {
        Self {
            fixture: Arc::new(fixture),
        }
    }

    /// Parse a fixture from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the fixture format.
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Load a fixture from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(path: &Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    #[must_use]
    pub fn fixture(&self) -> &UtaFixture {
        &self.fixture
    }

    /// Export the fixture as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, FixtureError> {
        Ok(serde_json::to_string_pretty(self.fixture.as_ref())?)
    }

    /// Spans of every alignment on `alt_ac`, optionally restricted to one method,
    /// grouped per `(tx_ac, alt_ac, alt_strand, alt_aln_method)` in first-seen order
    fn alignment_spans(&self, alt_ac: &str, alt_aln_method: Option<&str>) -> Vec<TxRegion> {
        let mut spans: IndexMap<SpanKey, (i32, i32)> = IndexMap::new();
        let exons = self.fixture.exons.iter().filter(|e| {
            e.alt_ac == alt_ac && alt_aln_method.map_or(true, |m| e.alt_aln_method == m)
        });
        for exon in exons {
            let key = (
                exon.tx_ac.clone(),
                exon.alt_ac.clone(),
                exon.alt_strand,
                exon.alt_aln_method.clone(),
            );
            spans
                .entry(key)
                .and_modify(|(start, end)| {
                    *start = (*start).min(exon.alt_start_i);
                    *end = (*end).max(exon.alt_end_i);
                })
                .or_insert((exon.alt_start_i, exon.alt_end_i));
        }

        spans
            .into_iter()
            .map(
                |((tx_ac, alt_ac, alt_strand, alt_aln_method), (start_i, end_i))| TxRegion {
                    tx_ac,
                    alt_ac,
                    alt_strand,
                    alt_aln_method,
                    start_i,
                    end_i,
                },
            )
            .collect()
    }

    /// Provider with a small, self-consistent set of rows for tests and demos
    #[must_use]
    #[allow(clippy::too_many_lines)] // Fixture data
    pub fn with_test_data() -> Self {
        let added = |s: &str| {
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").unwrap_or_default()
        };

        let mut sequences = IndexMap::new();
        sequences.insert("NC_000007.13".to_string(), "ACGTTGCA".repeat(1_500));
        sequences.insert(
            "NM_199425.2".to_string(),
            "ATGGCGAGCTTCCAGCTGCCCAACCACCAGGCCTCGCTGCTG".repeat(6),
        );
        sequences.insert(
            "NP_000001.1".to_string(),
            "MRAKWRKKRMRRLKRKRRKMRQRSK".to_string(),
        );
        sequences.insert(
            "XP_000001.1".to_string(),
            "MRAKWRKKRMRRLKRKRRKMRQRSK".to_string(),
        );
        sequences.insert(
            "NP_000042.3".to_string(),
            "MSLVLNDLLICCRQLEHDRATERKKEVEKFK".to_string(),
        );

        let genes = vec![
            GeneInfo {
                hgnc: "VHL".into(),
                maploc: Some("3p25.3".into()),
                descr: Some("von Hippel-Lindau tumor suppressor".into()),
                summary: Some("Component of an E3 ubiquitin ligase complex.".into()),
                aliases: Some("{HRCA1,RCA1,VHL1,pVHL}".into()),
                added: added("2014-02-04T22:39:32.57125"),
            },
            GeneInfo {
                hgnc: "ATM".into(),
                maploc: Some("11q22.3".into()),
                descr: Some("ATM serine/threonine kinase".into()),
                summary: None,
                aliases: Some("{AT1,ATA,ATC,ATD,ATDC,ATE,TEL1,TELO1}".into()),
                added: added("2014-02-04T22:39:32.57125"),
            },
        ];

        let tx = |hgnc: &str, cds: (i32, i32), tx_ac: &str, alt_ac: &str, method: &str| TxInfo {
            hgnc: Some(hgnc.to_string()),
            cds_start_i: Some(cds.0),
            cds_end_i: Some(cds.1),
            tx_ac: tx_ac.to_string(),
            alt_ac: alt_ac.to_string(),
            alt_aln_method: method.to_string(),
        };
        let transcripts = vec![
            tx("VHL", (213, 855), "NM_000551.3", "NM_000551.3", "transcript"),
            tx("VHL", (213, 855), "NM_000551.3", "NC_000003.11", "splign"),
            tx("VHL", (213, 690), "NM_198156.2", "NC_000003.11", "splign"),
            tx("ZBTB46", (30, 210), "NM_199425.2", "NM_199425.2", "transcript"),
            tx("ZBTB46", (30, 210), "NM_199425.2", "NC_000020.10", "splign"),
            tx("ZBTB46", (30, 210), "NM_199425.2", "NC_000020.10", "blat"),
            tx("ATM", (385, 9556), "NM_000051.3", "NC_000011.9", "splign"),
            tx("ATM", (385, 9556), "NM_000051.3", "NC_000011.10", "splign"),
        ];

        let exon = |hgnc: &str,
                    key: (&str, &str, &str),
                    alt_strand: i16,
                    ord: i32,
                    tx_span: (i32, i32),
                    alt_span: (i32, i32),
                    id: i32| {
            let (tx_ac, alt_ac, method) = key;
            TxExon {
                hgnc: hgnc.to_string(),
                tx_ac: tx_ac.to_string(),
                alt_ac: alt_ac.to_string(),
                alt_aln_method: method.to_string(),
                alt_strand,
                ord,
                tx_start_i: tx_span.0,
                tx_end_i: tx_span.1,
                alt_start_i: alt_span.0,
                alt_end_i: alt_span.1,
                cigar: format!("{}=", tx_span.1 - tx_span.0),
                tx_aseq: None,
                alt_aseq: None,
                tx_exon_set_id: id,
                alt_exon_set_id: id + 1,
                tx_exon_id: id * 10,
                alt_exon_id: id * 10 + 1,
                exon_aln_id: id * 100 + ord,
            }
        };
        let zbtb46_splign = ("NM_199425.2", "NC_000020.10", "splign");
        let zbtb46_blat = ("NM_199425.2", "NC_000020.10", "blat");
        let vhl_splign = ("NM_000551.3", "NC_000003.11", "splign");
        let atm_37 = ("NM_000051.3", "NC_000011.9", "splign");
        let atm_38 = ("NM_000051.3", "NC_000011.10", "splign");
        let exons = vec![
            exon("ZBTB46", zbtb46_splign, -1, 0, (0, 100), (62_343_000, 62_343_100), 1),
            exon("ZBTB46", zbtb46_splign, -1, 1, (100, 252), (62_340_000, 62_340_152), 1),
            exon("ZBTB46", zbtb46_blat, -1, 0, (0, 100), (62_343_000, 62_343_100), 3),
            exon("ZBTB46", zbtb46_blat, -1, 1, (100, 252), (62_340_001, 62_340_152), 3),
            exon("VHL", vhl_splign, 1, 0, (0, 553), (10_183_318, 10_183_871), 5),
            exon("VHL", vhl_splign, 1, 1, (553, 676), (10_188_197, 10_188_320), 5),
            exon("ATM", atm_37, 1, 0, (0, 385), (108_093_558, 108_093_943), 7),
            exon("ATM", atm_38, 1, 0, (0, 385), (108_222_831, 108_223_216), 9),
        ];

        let identities = vec![
            TxIdentityInfo {
                tx_ac: "NM_199425.2".into(),
                alt_ac: "NM_199425.2".into(),
                alt_aln_method: "transcript".into(),
                cds_start_i: Some(30),
                cds_end_i: Some(210),
                lengths: vec![100, 152],
                hgnc: Some("ZBTB46".into()),
            },
            TxIdentityInfo {
                tx_ac: "NM_000051.3".into(),
                alt_ac: "NM_000051.3".into(),
                alt_aln_method: "transcript".into(),
                cds_start_i: Some(385),
                cds_end_i: Some(9556),
                lengths: vec![385],
                hgnc: Some("ATM".into()),
            },
        ];

        let similar_transcripts = vec![
            SimilarTranscript {
                tx_ac1: "NM_000051.3".into(),
                tx_ac2: "NM_001351834.1".into(),
                hgnc_eq: Some(true),
                cds_eq: Some(false),
                es_fp_eq: Some(false),
                cds_es_fp_eq: Some(false),
                cds_exon_lengths_fp_eq: Some(false),
            },
            SimilarTranscript {
                tx_ac1: "NM_000051.3".into(),
                tx_ac2: "ENST00000278616".into(),
                hgnc_eq: Some(true),
                cds_eq: Some(true),
                es_fp_eq: Some(true),
                cds_es_fp_eq: Some(true),
                cds_exon_lengths_fp_eq: Some(true),
            },
        ];

        let associated_accessions = vec![
            AssociatedAccession {
                tx_ac: "NM_000051.3".into(),
                pro_ac: "NP_000042.2".into(),
            },
            AssociatedAccession {
                tx_ac: "NM_000051.3".into(),
                pro_ac: "NP_000042.3".into(),
            },
        ];

        Self::new(UtaFixture {
            data_version: "uta_20210129b".into(),
            schema_version: "1.1".into(),
            sequence_source: "memory fixture".into(),
            sequences,
            genes,
            transcripts,
            exons,
            identities,
            similar_transcripts,
            associated_accessions,
        })
    }
}

#[async_trait]
impl UtaProvider for MemoryProvider {
    async fn get_seq(
        &self,
        ac: &str,
        start_i: Option<i64>,
        end_i: Option<i64>,
    ) -> Result<String, ProviderError> {
        self.fixture
            .sequences
            .get(ac)
            .map(|seq| slice_sequence(seq, start_i, end_i))
            .ok_or_else(|| ProviderError::NotFound(format!("sequence {ac}")))
    }

    async fn get_acs_for_protein_seq(&self, seq: &str) -> Result<Vec<String>, ProviderError> {
        let md5 = seq_md5(seq)?;
        Ok(self
            .fixture
            .sequences
            .iter()
            .filter(|(_, stored)| seq_md5(stored).is_ok_and(|digest| digest == md5))
            .map(|(ac, _)| ac.clone())
            .collect())
    }

    async fn get_gene_info(&self, gene: &str) -> Result<Option<GeneInfo>, ProviderError> {
        Ok(self.fixture.genes.iter().find(|g| g.hgnc == gene).cloned())
    }

    async fn get_tx_exons(
        &self,
        tx_ac: &str,
        alt_ac: &str,
        alt_aln_method: &str,
    ) -> Result<Vec<TxExon>, ProviderError> {
        let mut exons: Vec<TxExon> = self
            .fixture
            .exons
            .iter()
            .filter(|e| e.tx_ac == tx_ac && e.alt_ac == alt_ac && e.alt_aln_method == alt_aln_method)
            .cloned()
            .collect();
        if exons.is_empty() {
            return Err(ProviderError::NotFound(format!(
                "exons for ({tx_ac}, {alt_ac}, {alt_aln_method})"
            )));
        }
        exons.sort_by_key(|e| e.alt_start_i);
        Ok(exons)
    }

    async fn get_tx_for_gene(&self, gene: &str) -> Result<Vec<TxInfo>, ProviderError> {
        Ok(self
            .fixture
            .transcripts
            .iter()
            .filter(|t| t.hgnc.as_deref() == Some(gene) && t.alt_aln_method != "transcript")
            .cloned()
            .collect())
    }

    async fn get_tx_for_region(
        &self,
        alt_ac: &str,
        alt_aln_method: &str,
        start_i: i64,
        end_i: i64,
    ) -> Result<Vec<TxRegion>, ProviderError> {
        Ok(self
            .alignment_spans(alt_ac, Some(alt_aln_method))
            .into_iter()
            .filter(|r| i64::from(r.end_i) > start_i && i64::from(r.start_i) < end_i)
            .collect())
    }

    async fn get_alignments_for_region(
        &self,
        alt_ac: &str,
        start_i: i64,
        end_i: i64,
    ) -> Result<Vec<TxRegion>, ProviderError> {
        Ok(self
            .alignment_spans(alt_ac, None)
            .into_iter()
            .filter(|r| i64::from(r.start_i) < end_i && start_i <= i64::from(r.end_i))
            .collect())
    }

    async fn get_tx_identity_info(&self, tx_ac: &str) -> Result<TxIdentityInfo, ProviderError> {
        self.fixture
            .identities
            .iter()
            .find(|i| i.tx_ac == tx_ac)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(format!("identity info for {tx_ac}")))
    }

    async fn get_tx_info(
        &self,
        tx_ac: &str,
        alt_ac: &str,
        alt_aln_method: &str,
    ) -> Result<TxInfo, ProviderError> {
        let rows: Vec<&TxInfo> = self
            .fixture
            .transcripts
            .iter()
            .filter(|t| t.tx_ac == tx_ac && t.alt_ac == alt_ac && t.alt_aln_method == alt_aln_method)
            .collect();
        let row = single_row(&rows, || {
            format!("tx_info for ({tx_ac}, {alt_ac}, {alt_aln_method})")
        })?;
        Ok((*row).clone())
    }

    async fn get_tx_mapping_options(
        &self,
        tx_ac: &str,
    ) -> Result<Vec<TxMappingOption>, ProviderError> {
        let mut options: Vec<TxMappingOption> = Vec::new();
        for exon in self.fixture.exons.iter().filter(|e| e.tx_ac == tx_ac) {
            let option = TxMappingOption {
                tx_ac: exon.tx_ac.clone(),
                alt_ac: exon.alt_ac.clone(),
                alt_aln_method: exon.alt_aln_method.clone(),
            };
            if !options.contains(&option) {
                options.push(option);
            }
        }
        Ok(options)
    }

    async fn get_similar_transcripts(
        &self,
        tx_ac: &str,
    ) -> Result<Vec<SimilarTranscript>, ProviderError> {
        Ok(self
            .fixture
            .similar_transcripts
            .iter()
            .filter(|s| s.tx_ac1 == tx_ac)
            .cloned()
            .collect())
    }

    async fn get_pro_ac_for_tx_ac(&self, tx_ac: &str) -> Result<Option<String>, ProviderError> {
        Ok(self
            .fixture
            .associated_accessions
            .iter()
            .filter(|a| a.tx_ac == tx_ac)
            .map(|a| a.pro_ac.clone())
            .max())
    }

    async fn data_version(&self) -> Result<String, ProviderError> {
        Ok(self.fixture.data_version.clone())
    }

    async fn schema_version(&self) -> Result<String, ProviderError> {
        Ok(self.fixture.schema_version.clone())
    }

    async fn sequence_source(&self) -> Result<String, ProviderError> {
        Ok(self.fixture.sequence_source.clone())
    }
}

#[async_trait]
impl Connect for MemoryProvider {
    async fn connect(&self) -> Result<Box<dyn UtaProvider>, ProviderError> {
        Ok(Box::new(self.clone()))
    }

    fn describe(&self) -> String {
        format!(
            "in-memory fixture ({}, {} sequences, {} exons)",
            self.fixture.data_version,
            self.fixture.sequences.len(),
            self.fixture.exons.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_seq_slices_end_exclusive() {
        let provider = MemoryProvider::with_test_data();
        let full = provider.get_seq("NC_000007.13", None, None).await.unwrap();
        let slice = provider
            .get_seq("NC_000007.13", Some(10_000), Some(10_050))
            .await
            .unwrap();
        assert_eq!(slice.len(), 50);
        assert_eq!(slice, full[10_000..10_050]);
    }

    #[tokio::test]
    async fn test_get_seq_unknown_is_not_found() {
        let provider = MemoryProvider::with_test_data();
        assert!(matches!(
            provider.get_seq("fake", None, None).await,
            Err(ProviderError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_acs_for_protein_seq() {
        let provider = MemoryProvider::with_test_data();
        let acs = provider
            .get_acs_for_protein_seq("MRAKWRKKRMRRLKRKRRKMRQRSK")
            .await
            .unwrap();
        assert_eq!(acs, vec!["NP_000001.1", "XP_000001.1"]);

        assert!(provider
            .get_acs_for_protein_seq("fake")
            .await
            .unwrap()
            .is_empty());
        assert!(matches!(
            provider.get_acs_for_protein_seq("123").await,
            Err(ProviderError::Invalid(_))
        ));
    }

    #[tokio::test]
    async fn test_tx_exons_ordered_by_alt_start() {
        let provider = MemoryProvider::with_test_data();
        let exons = provider
            .get_tx_exons("NM_199425.2", "NC_000020.10", "splign")
            .await
            .unwrap();
        assert_eq!(exons.len(), 2);
        assert!(exons[0].alt_start_i < exons[1].alt_start_i);
        assert_eq!(exons[0].ord, 1);
    }

    #[tokio::test]
    async fn test_tx_exons_unknown_alt_ac_is_not_found() {
        let provider = MemoryProvider::with_test_data();
        assert!(matches!(
            provider.get_tx_exons("NM_199425.2", "fake", "splign").await,
            Err(ProviderError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_tx_for_gene_skips_transcript_self_alignments() {
        let provider = MemoryProvider::with_test_data();
        let txs = provider.get_tx_for_gene("VHL").await.unwrap();
        assert_eq!(txs.len(), 2);
        assert!(txs.iter().all(|t| t.alt_aln_method == "splign"));
        assert!(provider.get_tx_for_gene("VH").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_tx_for_region_groups_exons_into_spans() {
        let provider = MemoryProvider::with_test_data();
        let regions = provider
            .get_tx_for_region("NC_000020.10", "splign", 62_340_100, 62_340_200)
            .await
            .unwrap();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].start_i, 62_340_000);
        assert_eq!(regions[0].end_i, 62_343_100);
        assert_eq!(regions[0].alt_strand, -1);

        assert!(provider
            .get_tx_for_region("NC_000020.10", "splign", 0, 50)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_alignments_for_region_spans_all_methods() {
        let provider = MemoryProvider::with_test_data();
        let regions = provider
            .get_alignments_for_region("NC_000020.10", 62_340_100, 62_340_200)
            .await
            .unwrap();
        let methods: Vec<&str> = regions.iter().map(|r| r.alt_aln_method.as_str()).collect();
        assert_eq!(methods, vec!["splign", "blat"]);
        assert!(provider
            .get_alignments_for_region("fake", 0, 50)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_region_bounds_at_span_edges() {
        let provider = MemoryProvider::with_test_data();
        // splign span is [62_340_000, 62_343_100), blat span [62_340_001, 62_343_100)
        assert!(provider
            .get_tx_for_region("NC_000020.10", "splign", 62_343_100, 62_344_000)
            .await
            .unwrap()
            .is_empty());
        let touching = provider
            .get_alignments_for_region("NC_000020.10", 62_343_100, 62_344_000)
            .await
            .unwrap();
        let methods: Vec<&str> = touching.iter().map(|r| r.alt_aln_method.as_str()).collect();
        assert_eq!(methods, vec!["splign", "blat"]);
        assert_eq!(touching[0].end_i, 62_343_100);

        assert!(provider
            .get_tx_for_region("NC_000020.10", "splign", 62_339_000, 62_340_000)
            .await
            .unwrap()
            .is_empty());
        assert!(provider
            .get_alignments_for_region("NC_000020.10", 62_339_000, 62_340_000)
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_tx_info_rejects_duplicate_rows() {
        let mut fixture = MemoryProvider::with_test_data().fixture().clone();
        let duplicate = fixture.transcripts[0].clone();
        let (tx_ac, alt_ac, method) = (
            duplicate.tx_ac.clone(),
            duplicate.alt_ac.clone(),
            duplicate.alt_aln_method.clone(),
        );
        fixture.transcripts.push(duplicate);
        let provider = MemoryProvider::new(fixture);
        assert!(matches!(
            provider.get_tx_info(&tx_ac, &alt_ac, &method).await,
            Err(ProviderError::Unexpected(_))
        ));
    }

    #[tokio::test]
    async fn test_mapping_options_are_distinct() {
        let provider = MemoryProvider::with_test_data();
        let options = provider.get_tx_mapping_options("NM_199425.2").await.unwrap();
        assert_eq!(options.len(), 2);
        assert!(provider
            .get_tx_mapping_options("fake")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_pro_ac_is_greatest_accession() {
        let provider = MemoryProvider::with_test_data();
        assert_eq!(
            provider.get_pro_ac_for_tx_ac("NM_000051.3").await.unwrap(),
            Some("NP_000042.3".to_string())
        );
        assert_eq!(provider.get_pro_ac_for_tx_ac("fake").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_connect_hands_out_independent_handles() {
        let provider = MemoryProvider::with_test_data();
        let a = provider.connect().await.unwrap();
        let b = provider.connect().await.unwrap();
        assert_eq!(
            a.data_version().await.unwrap(),
            b.data_version().await.unwrap()
        );
        assert!(provider.describe().contains("uta_20210129b"));
    }

    #[test]
    fn test_fixture_json_round_trip() {
        let provider = MemoryProvider::with_test_data();
        let json = provider.to_json().unwrap();
        let reloaded = MemoryProvider::from_json(&json).unwrap();
        assert_eq!(reloaded.fixture().genes, provider.fixture().genes);
        assert_eq!(reloaded.fixture().exons, provider.fixture().exons);
    }

    #[test]
    fn test_load_fixture_from_file() {
        let provider = MemoryProvider::with_test_data();
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), provider.to_json().unwrap()).unwrap();
        let loaded = MemoryProvider::load_from_file(file.path()).unwrap();
        assert_eq!(loaded.fixture().sequences.len(), 5);
    }
}
