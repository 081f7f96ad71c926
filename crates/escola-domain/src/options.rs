//! The filtered-query options protocol.
//!
//! Every listing operation across every repository accepts one of these
//! values and applies offset / limit / sort / filters with identical
//! semantics. Serde field names match the external request parameters the
//! HTTP layer decodes (`comeco`, `limite`, `ordenacao`, ...).

use serde::{Deserialize, Serialize};

use crate::employee::EmploymentStatus;

/// Hard ceiling on page size. A caller requesting more silently receives at
/// most this many records; this is an abuse-prevention cap, not a default.
pub const MAX_PAGE_SIZE: u64 = 10;

/// Bounded, sorted listing request shared by all repositories.
///
/// - `offset`: matching records to skip, default 0
/// - `limit`: requested page size, default 10; effectively capped at
///   [`MAX_PAGE_SIZE`]
/// - `sort_key`: field to sort by; absent or unknown means the
///   implementation-default order (primary key ascending)
/// - `ascending`: sort direction, default true
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetOptions {
    #[serde(default, rename = "comeco")]
    pub offset: u64,
    #[serde(default = "default_limit", rename = "limite")]
    pub limit: u64,
    #[serde(default, rename = "ordenacao")]
    pub sort_key: Option<String>,
    #[serde(default = "default_true", rename = "crescente")]
    pub ascending: bool,
}

fn default_limit() -> u64 {
    MAX_PAGE_SIZE
}

fn default_true() -> bool {
    true
}

impl Default for GetOptions {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: default_limit(),
            sort_key: None,
            ascending: true,
        }
    }
}

impl GetOptions {
    /// The page size actually applied: `min(limit, MAX_PAGE_SIZE)`.
    pub fn effective_limit(&self) -> u64 {
        self.limit.min(MAX_PAGE_SIZE)
    }
}

/// Listing request for member types; adds a name filter and the address
/// expansion directive.
///
/// `name_prefix` matches case-insensitively from the start of the full
/// name. `include_address` asks the query executor to eagerly attach the
/// related address to each result.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GetMemberOptions {
    #[serde(flatten)]
    pub base: GetOptions,
    #[serde(default, rename = "prefixo_name")]
    pub name_prefix: Option<String>,
    #[serde(default, rename = "incluir_endereco")]
    pub include_address: bool,
}

impl GetMemberOptions {
    /// Options that only request the address expansion.
    pub fn with_address() -> Self {
        Self {
            include_address: true,
            ..Self::default()
        }
    }
}

/// Listing request for employed member types. All provided filters are
/// ANDed; the salary bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetEmployeeOptions {
    #[serde(flatten)]
    pub member: GetMemberOptions,
    #[serde(default, rename = "prefixo_cargo")]
    pub job_title_prefix: Option<String>,
    #[serde(default)]
    pub status: Option<EmploymentStatus>,
    #[serde(default, rename = "salario_minimo")]
    pub min_salary: f64,
    #[serde(default = "default_max_salary", rename = "salario_maximo")]
    pub max_salary: f64,
}

fn default_max_salary() -> f64 {
    f64::MAX
}

impl Default for GetEmployeeOptions {
    fn default() -> Self {
        Self {
            member: GetMemberOptions::default(),
            job_title_prefix: None,
            status: None,
            min_salary: 0.0,
            max_salary: default_max_salary(),
        }
    }
}
