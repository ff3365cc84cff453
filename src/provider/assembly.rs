//! Embedded genome assembly maps.
//!
//! Each assembly lists its primary assembled molecules (chromosomes 1-22, X, Y
//! and MT) as contig accession -> contig name, in assembly order. Patch
//! releases (e.g. `GRCh38.p5`) are aliases of their base assembly since they
//! share the primary molecules.
//!
//! Only the `NC_` primary molecules are included. Unlocalized and unplaced
//! scaffolds, alternate loci and patch scaffolds (`NT_`/`NW_` accessions) are
//! not, so a map is a subset of the full assembly report for that release.
//!
//! The data is compiled into the binary and validated by `build.rs`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::core::error::ProviderError;
use crate::core::types::AssemblyMap;

/// Assembly data format version
pub const ASSEMBLY_DATA_VERSION: &str = "1.0.0";

const EMBEDDED_ASSEMBLIES: &str = include_str!("../../assemblies/human_assemblies.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AssemblyData {
    version: String,
    assemblies: Vec<AssemblyEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AssemblyEntry {
    name: String,
    #[serde(default)]
    aliases: Vec<String>,
    contigs: Vec<ContigEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ContigEntry {
    ac: String,
    name: String,
}

/// Assembly maps indexed by name and alias
#[derive(Debug, Default)]
pub struct AssemblyCatalog {
    maps: Vec<AssemblyMap>,
    name_to_index: HashMap<String, usize>,
}

impl AssemblyCatalog {
    /// Parse assembly data from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the assembly data format.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let data: AssemblyData = serde_json::from_str(json)?;

        if data.version != ASSEMBLY_DATA_VERSION {
            tracing::warn!(
                "Assembly data version mismatch (expected {}, found {})",
                ASSEMBLY_DATA_VERSION,
                data.version
            );
        }

        let mut catalog = Self::default();
        for entry in data.assemblies {
            let index = catalog.maps.len();
            catalog
                .maps
                .push(entry.contigs.into_iter().map(|c| (c.ac, c.name)).collect());
            catalog.name_to_index.insert(entry.name, index);
            for alias in entry.aliases {
                catalog.name_to_index.insert(alias, index);
            }
        }
        Ok(catalog)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AssemblyMap> {
        self.name_to_index.get(name).map(|&i| &self.maps[i])
    }

    /// All known assembly names and aliases, sorted
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.name_to_index.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// The embedded catalog, parsed on first use
///
/// # Errors
///
/// Fails only if the embedded data is corrupt, which `build.rs` rules out.
pub fn embedded() -> Result<&'static AssemblyCatalog, ProviderError> {
    static CATALOG: OnceLock<Result<AssemblyCatalog, String>> = OnceLock::new();
    CATALOG
        .get_or_init(|| AssemblyCatalog::from_json(EMBEDDED_ASSEMBLIES).map_err(|e| e.to_string()))
        .as_ref()
        .map_err(|e| ProviderError::Unexpected(format!("embedded assembly data: {e}")))
}

/// Contig map for `assembly_name`, a fresh copy per call
///
/// # Errors
///
/// Returns `ProviderError::NotFound` for an unknown assembly name.
pub fn get_assembly_map(assembly_name: &str) -> Result<AssemblyMap, ProviderError> {
    embedded()?
        .get(assembly_name)
        .cloned()
        .ok_or_else(|| ProviderError::NotFound(format!("assembly {assembly_name}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_assemblies_parse() {
        let catalog = embedded().unwrap();
        assert!(catalog.get("GRCh37").is_some());
        assert!(catalog.get("GRCh38").is_some());
        assert!(catalog.names().contains(&"GRCh38.p5"));
    }

    #[test]
    fn test_grch38_map_order_and_content() {
        let map = get_assembly_map("GRCh38.p5").unwrap();
        assert_eq!(map.len(), 25);
        assert_eq!(map.get_index(0), Some((&"NC_000001.11".to_string(), &"1".to_string())));
        assert_eq!(map.get("NC_000023.11").map(String::as_str), Some("X"));
        assert_eq!(map.get("NC_012920.1").map(String::as_str), Some("MT"));
    }

    #[test]
    fn test_alias_shares_base_map() {
        assert_eq!(
            get_assembly_map("GRCh37").unwrap(),
            get_assembly_map("GRCh37.p13").unwrap()
        );
    }

    #[test]
    fn test_maps_hold_primary_molecules_only() {
        let catalog = embedded().unwrap();
        for name in catalog.names() {
            let map = get_assembly_map(name).unwrap();
            assert_eq!(map.len(), 25, "{name}");
            assert!(map.keys().all(|ac| ac.starts_with("NC_")), "{name}");
        }
    }

    #[test]
    fn test_unknown_assembly_is_not_found() {
        assert!(matches!(
            get_assembly_map("GROUCH"),
            Err(ProviderError::NotFound(_))
        ));
    }

    #[test]
    fn test_from_json_preserves_contig_order() {
        let json = r#"{"version": "1.0.0", "assemblies": [
            {"name": "toy", "contigs": [{"ac": "B", "name": "2"}, {"ac": "A", "name": "1"}]}
        ]}"#;
        let catalog = AssemblyCatalog::from_json(json).unwrap();
        let keys: Vec<&String> = catalog.get("toy").unwrap().keys().collect();
        assert_eq!(keys, ["B", "A"]);
    }
}
