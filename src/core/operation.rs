//! The operation table shared by the router, the client and direct dispatch.
//!
//! Every provider operation is described once here: its name, its positional
//! parameters (kind, whether optional, and whether it travels as a path segment
//! or a query parameter). The HTTP route and the argument validation on both
//! sides of the wire are derived from this table.

use std::fmt;
use std::str::FromStr;

use crate::core::error::ProviderError;

/// A provider query operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetSeq,
    GetAcsForProteinSeq,
    GetGeneInfo,
    GetTxExons,
    GetTxForGene,
    GetTxForRegion,
    GetAlignmentsForRegion,
    GetTxIdentityInfo,
    GetTxInfo,
    GetTxMappingOptions,
    GetSimilarTranscripts,
    GetProAcForTxAc,
    GetAssemblyMap,
    DataVersion,
    SchemaVersion,
    SequenceSource,
}

/// Value type of a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Text,
    /// Integer sequence offset
    Offset,
}

/// Where a parameter is carried in the HTTP request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Path,
    Query,
}

/// One positional parameter of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub kind: ParamKind,
    pub location: Location,
    pub required: bool,
}

const fn segment(name: &'static str) -> Param {
    Param {
        name,
        kind: ParamKind::Text,
        location: Location::Path,
        required: true,
    }
}

const fn query(name: &'static str) -> Param {
    Param {
        name,
        kind: ParamKind::Text,
        location: Location::Query,
        required: true,
    }
}

const fn offset(name: &'static str) -> Param {
    Param {
        name,
        kind: ParamKind::Offset,
        location: Location::Query,
        required: true,
    }
}

const fn optional_offset(name: &'static str) -> Param {
    Param {
        required: false,
        ..offset(name)
    }
}

const SEQ_PARAMS: &[Param] = &[
    segment("ac"),
    optional_offset("start_i"),
    optional_offset("end_i"),
];
const PROTEIN_SEQ_PARAMS: &[Param] = &[segment("seq")];
const GENE_PARAMS: &[Param] = &[segment("gene")];
const TX_PARAMS: &[Param] = &[segment("tx_ac")];
const TX_ALT_METHOD_PARAMS: &[Param] = &[
    segment("tx_ac"),
    segment("alt_ac"),
    query("alt_aln_method"),
];
const TX_FOR_REGION_PARAMS: &[Param] = &[
    segment("alt_ac"),
    segment("alt_aln_method"),
    offset("start_i"),
    offset("end_i"),
];
const ALIGNMENTS_FOR_REGION_PARAMS: &[Param] =
    &[segment("alt_ac"), offset("start_i"), offset("end_i")];
const ASSEMBLY_PARAMS: &[Param] = &[segment("assembly_name")];

impl Operation {
    pub const ALL: [Operation; 16] = [
        Self::GetSeq,
        Self::GetAcsForProteinSeq,
        Self::GetGeneInfo,
        Self::GetTxExons,
        Self::GetTxForGene,
        Self::GetTxForRegion,
        Self::GetAlignmentsForRegion,
        Self::GetTxIdentityInfo,
        Self::GetTxInfo,
        Self::GetTxMappingOptions,
        Self::GetSimilarTranscripts,
        Self::GetProAcForTxAc,
        Self::GetAssemblyMap,
        Self::DataVersion,
        Self::SchemaVersion,
        Self::SequenceSource,
    ];

    /// Provider method name (e.g. `get_tx_exons`)
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::GetSeq => "get_seq",
            Self::GetAcsForProteinSeq => "get_acs_for_protein_seq",
            Self::GetGeneInfo => "get_gene_info",
            Self::GetTxExons => "get_tx_exons",
            Self::GetTxForGene => "get_tx_for_gene",
            Self::GetTxForRegion => "get_tx_for_region",
            Self::GetAlignmentsForRegion => "get_alignments_for_region",
            Self::GetTxIdentityInfo => "get_tx_identity_info",
            Self::GetTxInfo => "get_tx_info",
            Self::GetTxMappingOptions => "get_tx_mapping_options",
            Self::GetSimilarTranscripts => "get_similar_transcripts",
            Self::GetProAcForTxAc => "get_pro_ac_for_tx_ac",
            Self::GetAssemblyMap => "get_assembly_map",
            Self::DataVersion => "data_version",
            Self::SchemaVersion => "schema_version",
            Self::SequenceSource => "sequence_source",
        }
    }

    /// Positional parameters, in call order
    #[must_use]
    pub fn params(self) -> &'static [Param] {
        match self {
            Self::GetSeq => SEQ_PARAMS,
            Self::GetAcsForProteinSeq => PROTEIN_SEQ_PARAMS,
            Self::GetGeneInfo | Self::GetTxForGene => GENE_PARAMS,
            Self::GetTxExons | Self::GetTxInfo => TX_ALT_METHOD_PARAMS,
            Self::GetTxForRegion => TX_FOR_REGION_PARAMS,
            Self::GetAlignmentsForRegion => ALIGNMENTS_FOR_REGION_PARAMS,
            Self::GetTxIdentityInfo
            | Self::GetTxMappingOptions
            | Self::GetSimilarTranscripts
            | Self::GetProAcForTxAc => TX_PARAMS,
            Self::GetAssemblyMap => ASSEMBLY_PARAMS,
            Self::DataVersion | Self::SchemaVersion | Self::SequenceSource => &[],
        }
    }

    /// First path segment of the route: the method name without its `get_` prefix
    #[must_use]
    pub fn route_prefix(self) -> &'static str {
        let name = self.name();
        name.strip_prefix("get_").unwrap_or(name)
    }

    /// Axum route template, e.g. `/tx_exons/{tx_ac}/{alt_ac}`
    #[must_use]
    pub fn route(self) -> String {
        let mut route = format!("/{}", self.route_prefix());
        for param in self.params() {
            if param.location == Location::Path {
                route.push_str(&format!("/{{{}}}", param.name));
            }
        }
        route
    }

    /// Route carrying every parameter in the query string, e.g. `/tx_exons`.
    ///
    /// Used for identifiers that cannot travel as a path segment: the empty
    /// string, `.` and `..`.
    #[must_use]
    pub fn query_route(self) -> String {
        format!("/{}", self.route_prefix())
    }

    #[must_use]
    pub fn has_path_params(self) -> bool {
        self.params().iter().any(|p| p.location == Location::Path)
    }

    /// The only path parameter, for operations with exactly one
    #[must_use]
    pub fn sole_path_param(self) -> Option<&'static Param> {
        let mut path = self.params().iter().filter(|p| p.location == Location::Path);
        match (path.next(), path.next()) {
            (Some(param), None) => Some(param),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s || op.route_prefix() == s)
            .ok_or_else(|| format!("unknown operation '{s}'"))
    }
}

/// A single argument value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    Text(String),
    Offset(i64),
    /// Optional parameter not supplied
    Absent,
}

impl Arg {
    /// Wire representation, `None` when absent
    #[must_use]
    pub fn to_wire(&self) -> Option<String> {
        match self {
            Self::Text(s) => Some(s.clone()),
            Self::Offset(n) => Some(n.to_string()),
            Self::Absent => None,
        }
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<i64> for Arg {
    fn from(n: i64) -> Self {
        Self::Offset(n)
    }
}

impl From<Option<i64>> for Arg {
    fn from(n: Option<i64>) -> Self {
        n.map_or(Self::Absent, Self::Offset)
    }
}

/// An operation together with arguments that have been checked against its
/// parameter list: right count, every required parameter present, offsets parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    operation: Operation,
    args: Vec<Arg>,
}

impl Invocation {
    /// Validate typed positional arguments.
    ///
    /// Missing trailing arguments are treated as absent, so a required one
    /// yields `MissingParameter`.
    ///
    /// # Errors
    ///
    /// Returns `TooManyArguments`, `MissingParameter` or `MalformedParameter`.
    pub fn new(operation: Operation, args: Vec<Arg>) -> Result<Self, ProviderError> {
        let params = operation.params();
        if args.len() > params.len() {
            return Err(ProviderError::TooManyArguments {
                operation: operation.name(),
                max: params.len(),
                given: args.len(),
            });
        }

        let mut supplied = args.into_iter();
        let args = params
            .iter()
            .map(|param| coerce(operation, param, supplied.next().unwrap_or(Arg::Absent)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { operation, args })
    }

    /// Validate positional string arguments, as given on a command line
    ///
    /// # Errors
    ///
    /// See [`Invocation::new`].
    pub fn from_positional(operation: Operation, args: &[&str]) -> Result<Self, ProviderError> {
        Self::new(operation, args.iter().map(|s| Arg::from(*s)).collect())
    }

    /// Validate arguments looked up by parameter, as extracted from an HTTP request
    ///
    /// # Errors
    ///
    /// See [`Invocation::new`].
    pub fn from_lookup<'a, F>(operation: Operation, lookup: F) -> Result<Self, ProviderError>
    where
        F: Fn(&Param) -> Option<&'a str>,
    {
        let args = operation
            .params()
            .iter()
            .map(|param| lookup(param).map_or(Arg::Absent, Arg::from))
            .collect();
        Self::new(operation, args)
    }

    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    #[must_use]
    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    /// Path segments of the request URL, starting with the route prefix
    #[must_use]
    pub fn path_segments(&self) -> Vec<String> {
        let mut segments = vec![self.operation.route_prefix().to_string()];
        if self.path_is_usable() {
            segments.extend(self.located(|loc| loc == Location::Path).map(|(_, value)| value));
        }
        segments
    }

    /// Query parameters of the request URL, absent optionals omitted.
    ///
    /// Path parameters move here when any of them cannot be a path segment.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        if self.path_is_usable() {
            self.located(|loc| loc == Location::Query).collect()
        } else {
            self.located(|_| true).collect()
        }
    }

    /// False when a path parameter is empty, `.` or `..`: URL normalization
    /// would drop or collapse such a segment.
    fn path_is_usable(&self) -> bool {
        self.located(|loc| loc == Location::Path)
            .all(|(_, value)| !matches!(value.as_str(), "" | "." | ".."))
    }

    fn located<F>(&self, keep: F) -> impl Iterator<Item = (&'static str, String)> + '_
    where
        F: Fn(Location) -> bool + 'static,
    {
        self.operation
            .params()
            .iter()
            .zip(&self.args)
            .filter(move |(param, _)| keep(param.location))
            .filter_map(|(param, arg)| arg.to_wire().map(|value| (param.name, value)))
    }
}

fn coerce(operation: Operation, param: &Param, arg: Arg) -> Result<Arg, ProviderError> {
    match (param.kind, arg) {
        (_, Arg::Absent) if param.required => Err(ProviderError::MissingParameter {
            operation: operation.name(),
            parameter: param.name,
        }),
        (_, Arg::Absent) => Ok(Arg::Absent),
        (ParamKind::Text, Arg::Offset(n)) => Ok(Arg::Text(n.to_string())),
        (ParamKind::Offset, Arg::Text(s)) => {
            s.trim()
                .parse::<i64>()
                .map(Arg::Offset)
                .map_err(|_| ProviderError::MalformedParameter {
                    parameter: param.name,
                    value: s,
                })
        }
        (_, arg) => Ok(arg),
    }
}
