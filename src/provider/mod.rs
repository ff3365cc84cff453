//! The UTA data-provider interface and its backends.
//!
//! [`UtaProvider`] is the capability set every backend implements, one method
//! per query operation with fixed positional signatures. [`Connect`] hands out
//! a provider handle scoped to a single request; the handle is dropped once
//! the response has been built.
//!
//! Backends:
//!
//! - [`postgres::PgConnector`]: a live UTA PostgreSQL database
//! - [`memory::MemoryProvider`]: an in-memory fixture with the same row shapes
//!
//! Not-found semantics differ per operation and are preserved as the provider
//! defines them: some operations fail with [`ProviderError::NotFound`], others
//! return an empty sequence or `None` for an unknown identifier.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::core::error::ProviderError;
use crate::core::operation::{Arg, Invocation, Operation};
use crate::core::types::{
    AssemblyMap, GeneInfo, SimilarTranscript, TxExon, TxIdentityInfo, TxInfo, TxMappingOption,
    TxRegion,
};

pub mod assembly;
pub mod memory;
pub mod postgres;

/// Query operations of a UTA data provider
#[async_trait]
pub trait UtaProvider: Send + Sync {
    /// Sequence for `ac`, sliced to `[start_i, end_i)`. Fails with `NotFound`.
    async fn get_seq(
        &self,
        ac: &str,
        start_i: Option<i64>,
        end_i: Option<i64>,
    ) -> Result<String, ProviderError>;

    /// Accessions whose sequence matches `seq`. Fails with `Invalid` for a
    /// non-alphabetic sequence; an unmatched sequence yields an empty list.
    async fn get_acs_for_protein_seq(&self, seq: &str) -> Result<Vec<String>, ProviderError>;

    /// Gene metadata, `None` for an unknown symbol
    async fn get_gene_info(&self, gene: &str) -> Result<Option<GeneInfo>, ProviderError>;

    /// Exon alignments ordered by reference start. Fails with `NotFound` when
    /// there is no such alignment.
    async fn get_tx_exons(
        &self,
        tx_ac: &str,
        alt_ac: &str,
        alt_aln_method: &str,
    ) -> Result<Vec<TxExon>, ProviderError>;

    /// Alignments of every transcript of `gene`. Order is not guaranteed.
    async fn get_tx_for_gene(&self, gene: &str) -> Result<Vec<TxInfo>, ProviderError>;

    async fn get_tx_for_region(
        &self,
        alt_ac: &str,
        alt_aln_method: &str,
        start_i: i64,
        end_i: i64,
    ) -> Result<Vec<TxRegion>, ProviderError>;

    async fn get_alignments_for_region(
        &self,
        alt_ac: &str,
        start_i: i64,
        end_i: i64,
    ) -> Result<Vec<TxRegion>, ProviderError>;

    /// Fails with `NotFound`
    async fn get_tx_identity_info(&self, tx_ac: &str) -> Result<TxIdentityInfo, ProviderError>;

    /// Fails with `NotFound`
    async fn get_tx_info(
        &self,
        tx_ac: &str,
        alt_ac: &str,
        alt_aln_method: &str,
    ) -> Result<TxInfo, ProviderError>;

    async fn get_tx_mapping_options(
        &self,
        tx_ac: &str,
    ) -> Result<Vec<TxMappingOption>, ProviderError>;

    async fn get_similar_transcripts(
        &self,
        tx_ac: &str,
    ) -> Result<Vec<SimilarTranscript>, ProviderError>;

    async fn get_pro_ac_for_tx_ac(&self, tx_ac: &str) -> Result<Option<String>, ProviderError>;

    /// Contig map of a named assembly. Fails with `NotFound` for an unknown name.
    async fn get_assembly_map(&self, assembly_name: &str) -> Result<AssemblyMap, ProviderError> {
        assembly::get_assembly_map(assembly_name)
    }

    async fn data_version(&self) -> Result<String, ProviderError>;

    async fn schema_version(&self) -> Result<String, ProviderError>;

    async fn sequence_source(&self) -> Result<String, ProviderError>;
}

/// Source of request-scoped provider handles
#[async_trait]
pub trait Connect: Send + Sync {
    /// Acquire a provider handle for one request
    async fn connect(&self) -> Result<Box<dyn UtaProvider>, ProviderError>;

    /// Short description for logs (never includes credentials)
    fn describe(&self) -> String;
}

/// Run a validated invocation against a provider and serialize its result.
///
/// This is the single place where an [`Operation`] is bound to its provider
/// method, shared by the web server and by direct (in-process) callers.
///
/// # Errors
///
/// Returns whatever the provider operation fails with.
pub async fn dispatch(
    provider: &dyn UtaProvider,
    invocation: &Invocation,
) -> Result<Value, ProviderError> {
    use Arg::{Offset, Text};

    let operation = invocation.operation();
    tracing::debug!(%operation, "dispatching provider operation");

    match (operation, invocation.args()) {
        (Operation::GetSeq, [Text(ac), start, end]) => {
            let start = offset_or_none(start);
            let end = offset_or_none(end);
            to_json(provider.get_seq(ac, start, end).await?)
        }
        (Operation::GetAcsForProteinSeq, [Text(seq)]) => {
            to_json(provider.get_acs_for_protein_seq(seq).await?)
        }
        (Operation::GetGeneInfo, [Text(gene)]) => to_json(provider.get_gene_info(gene).await?),
        (Operation::GetTxExons, [Text(tx_ac), Text(alt_ac), Text(method)]) => {
            to_json(provider.get_tx_exons(tx_ac, alt_ac, method).await?)
        }
        (Operation::GetTxForGene, [Text(gene)]) => to_json(provider.get_tx_for_gene(gene).await?),
        (
            Operation::GetTxForRegion,
            [Text(alt_ac), Text(method), Offset(start), Offset(end)],
        ) => to_json(
            provider
                .get_tx_for_region(alt_ac, method, *start, *end)
                .await?,
        ),
        (Operation::GetAlignmentsForRegion, [Text(alt_ac), Offset(start), Offset(end)]) => {
            to_json(
                provider
                    .get_alignments_for_region(alt_ac, *start, *end)
                    .await?,
            )
        }
        (Operation::GetTxIdentityInfo, [Text(tx_ac)]) => {
            to_json(provider.get_tx_identity_info(tx_ac).await?)
        }
        (Operation::GetTxInfo, [Text(tx_ac), Text(alt_ac), Text(method)]) => {
            to_json(provider.get_tx_info(tx_ac, alt_ac, method).await?)
        }
        (Operation::GetTxMappingOptions, [Text(tx_ac)]) => {
            to_json(provider.get_tx_mapping_options(tx_ac).await?)
        }
        (Operation::GetSimilarTranscripts, [Text(tx_ac)]) => {
            to_json(provider.get_similar_transcripts(tx_ac).await?)
        }
        (Operation::GetProAcForTxAc, [Text(tx_ac)]) => {
            to_json(provider.get_pro_ac_for_tx_ac(tx_ac).await?)
        }
        (Operation::GetAssemblyMap, [Text(name)]) => {
            to_json(provider.get_assembly_map(name).await?)
        }
        (Operation::DataVersion, []) => to_json(provider.data_version().await?),
        (Operation::SchemaVersion, []) => to_json(provider.schema_version().await?),
        (Operation::SequenceSource, []) => to_json(provider.sequence_source().await?),
        // Invocation::new guarantees the shapes above
        (operation, args) => Err(ProviderError::Unexpected(format!(
            "argument shape mismatch for {operation} ({} args)",
            args.len()
        ))),
    }
}

fn offset_or_none(arg: &Arg) -> Option<i64> {
    match arg {
        Arg::Offset(n) => Some(*n),
        _ => None,
    }
}

fn to_json<T: Serialize>(value: T) -> Result<Value, ProviderError> {
    Ok(serde_json::to_value(value)?)
}

/// The one row of a lookup that must match exactly once: `NotFound` for no
/// rows, `Unexpected` for more than one.
pub(crate) fn single_row<T>(
    rows: &[T],
    what: impl FnOnce() -> String,
) -> Result<&T, ProviderError> {
    match rows {
        [row] => Ok(row),
        [] => Err(ProviderError::NotFound(format!("no {}", what()))),
        _ => Err(ProviderError::Unexpected(format!(
            "{} rows returned for {}",
            rows.len(),
            what()
        ))),
    }
}
