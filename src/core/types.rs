//! Row shapes returned by the UTA provider.
//!
//! Field names and declaration order follow the UTA column names, so each
//! struct serializes to a JSON object that is key-for-key the provider's row.

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Gene metadata (`gene` table)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneInfo {
    /// HGNC gene symbol (e.g. "VHL")
    pub hgnc: String,
    /// Chromosomal band (e.g. "3p25.3")
    pub maploc: Option<String>,
    /// Full gene name
    pub descr: Option<String>,
    pub summary: Option<String>,
    pub aliases: Option<String>,
    /// When the row was loaded; ISO-8601 on the wire
    pub added: NaiveDateTime,
}

/// One aligned exon (`tx_exon_aln_v`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxExon {
    pub hgnc: String,
    pub tx_ac: String,
    pub alt_ac: String,
    pub alt_aln_method: String,
    pub alt_strand: i16,
    pub ord: i32,
    pub tx_start_i: i32,
    pub tx_end_i: i32,
    pub alt_start_i: i32,
    pub alt_end_i: i32,
    pub cigar: String,
    pub tx_aseq: Option<String>,
    pub alt_aseq: Option<String>,
    pub tx_exon_set_id: i32,
    pub alt_exon_set_id: i32,
    pub tx_exon_id: i32,
    pub alt_exon_id: i32,
    pub exon_aln_id: i32,
}

/// Transcript-to-reference alignment summary (`transcript` joined with `exon_set`).
///
/// This is also the row shape of `get_tx_for_gene`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInfo {
    pub hgnc: Option<String>,
    pub cds_start_i: Option<i32>,
    pub cds_end_i: Option<i32>,
    pub tx_ac: String,
    pub alt_ac: String,
    pub alt_aln_method: String,
}

/// Identity information for one transcript (`tx_def_summary_v`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxIdentityInfo {
    pub tx_ac: String,
    pub alt_ac: String,
    pub alt_aln_method: String,
    pub cds_start_i: Option<i32>,
    pub cds_end_i: Option<i32>,
    /// Exon lengths in transcript order
    pub lengths: Vec<i32>,
    pub hgnc: Option<String>,
}

/// Span of one alignment on a reference sequence.
///
/// Returned by both `get_tx_for_region` and `get_alignments_for_region`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxRegion {
    pub tx_ac: String,
    pub alt_ac: String,
    pub alt_strand: i16,
    pub alt_aln_method: String,
    pub start_i: i32,
    pub end_i: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxMappingOption {
    pub tx_ac: String,
    pub alt_ac: String,
    pub alt_aln_method: String,
}

/// Pairwise transcript similarity flags (`tx_similarity_v`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimilarTranscript {
    pub tx_ac1: String,
    pub tx_ac2: String,
    pub hgnc_eq: Option<bool>,
    pub cds_eq: Option<bool>,
    pub es_fp_eq: Option<bool>,
    pub cds_es_fp_eq: Option<bool>,
    pub cds_exon_lengths_fp_eq: Option<bool>,
}

/// Transcript to protein accession link (`associated_accessions`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssociatedAccession {
    pub tx_ac: String,
    pub pro_ac: String,
}

/// Contig accession -> contig name, in assembly order
pub type AssemblyMap = IndexMap<String, String>;
