use crate::utils::normalize_term;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a tender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TenderStatus {
    #[serde(rename = "Abierto")]
    Abierto,
    #[serde(rename = "Próximo")]
    Proximo,
    #[serde(rename = "Cerrado")]
    Cerrado,
    #[serde(rename = "Adjudicado")]
    Adjudicado,
}

impl TenderStatus {
    pub const ALL: &'static [TenderStatus] = &[
        Self::Abierto,
        Self::Proximo,
        Self::Cerrado,
        Self::Adjudicado,
    ];

    /// Returns the Spanish display label used across the platform.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Abierto => "Abierto",
            Self::Proximo => "Próximo",
            Self::Cerrado => "Cerrado",
            Self::Adjudicado => "Adjudicado",
        }
    }
}

impl fmt::Display for TenderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Industry sector of a tender or company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sector {
    #[serde(rename = "Construcción")]
    Construccion,
    #[serde(rename = "Tecnología")]
    Tecnologia,
    #[serde(rename = "Salud")]
    Salud,
    #[serde(rename = "Educación")]
    Educacion,
    #[serde(rename = "Transporte")]
    Transporte,
    #[serde(rename = "Otros")]
    Otros,
}

impl Sector {
    pub const ALL: &'static [Sector] = &[
        Self::Construccion,
        Self::Tecnologia,
        Self::Salud,
        Self::Educacion,
        Self::Transporte,
        Self::Otros,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Construccion => "Construcción",
            Self::Tecnologia => "Tecnología",
            Self::Salud => "Salud",
            Self::Educacion => "Educación",
            Self::Transporte => "Transporte",
            Self::Otros => "Otros",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Peruvian region a tender or company belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    Lima,
    Arequipa,
    Cusco,
    Piura,
    #[serde(rename = "La Libertad")]
    LaLibertad,
    Lambayeque,
}

impl Region {
    pub const ALL: &'static [Region] = &[
        Self::Lima,
        Self::Arequipa,
        Self::Cusco,
        Self::Piura,
        Self::LaLibertad,
        Self::Lambayeque,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Lima => "Lima",
            Self::Arequipa => "Arequipa",
            Self::Cusco => "Cusco",
            Self::Piura => "Piura",
            Self::LaLibertad => "La Libertad",
            Self::Lambayeque => "Lambayeque",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A dated milestone in a tender's schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub date: NaiveDate,
    pub event: String,
}

/// A company registered for a tender, with its registration status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub status: String,
}

/// A public procurement opportunity announcement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tender {
    pub id: u64,
    pub title: String,
    pub institution: String,
    /// Contract value in Peruvian soles (PEN). Never negative.
    pub amount: f64,
    pub deadline: NaiveDate,
    pub status: TenderStatus,
    pub sector: Sector,
    pub region: Region,
    pub description: String,
    pub requirements: Vec<String>,
    pub documents: Vec<String>,
    pub timeline: Vec<TimelineEntry>,
    pub participants: Vec<Participant>,
}

impl Tender {
    /// Case-insensitive substring match over title, institution and
    /// description. `term` must already be normalized.
    pub fn matches_term(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(term)
            || self.institution.to_lowercase().contains(term)
            || self.description.to_lowercase().contains(term)
    }
}

/// One past or ongoing contract on a company profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractSummary {
    pub id: u64,
    pub title: String,
    pub institution: String,
    pub amount: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: String,
    pub sector: Sector,
}

/// Yearly contracting activity for a company (amount in millions of PEN).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceEntry {
    pub year: String,
    pub contracts: u32,
    pub amount: f64,
}

/// A supplier company profile keyed by its RUC tax id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: u64,
    pub name: String,
    pub ruc: String,
    pub sector: Sector,
    pub region: Region,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub description: String,
    pub rating: f32,
    pub total_contracts: u32,
    pub total_amount: f64,
    pub founded_year: i32,
    pub employees: u32,
    pub certifications: Vec<String>,
    pub contracts: Vec<ContractSummary>,
    pub performance_data: Vec<PerformanceEntry>,
}

impl Company {
    /// Case-insensitive substring match over name and description.
    /// `term` must already be normalized.
    pub fn matches_term(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(term) || self.description.to_lowercase().contains(term)
    }
}

/// How often an alert notifies its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertFrequency {
    Immediate,
    Daily,
    Weekly,
    Monthly,
}

/// Conjunctive matching criteria of an alert. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertCriteria {
    pub sector: Option<Sector>,
    pub region: Option<Region>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
}

impl AlertCriteria {
    /// Whether a tender satisfies every set criterion.
    pub fn matches(&self, tender: &Tender) -> bool {
        if let Some(sector) = self.sector {
            if tender.sector != sector {
                return false;
            }
        }
        if let Some(region) = self.region {
            if tender.region != region {
                return false;
            }
        }
        if let Some(min) = self.min_amount {
            if tender.amount < min {
                return false;
            }
        }
        if let Some(max) = self.max_amount {
            if tender.amount > max {
                return false;
            }
        }
        true
    }
}

/// A saved tender alert. Held in memory for the session only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: u64,
    pub name: String,
    #[serde(flatten)]
    pub criteria: AlertCriteria,
    pub email: bool,
    pub push: bool,
    pub frequency: AlertFrequency,
    pub active: bool,
    pub last_match: Option<NaiveDate>,
    pub matches: u32,
}

/// Payload for creating or editing an alert. Id, activity flag and match
/// bookkeeping are managed by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDraft {
    pub name: String,
    #[serde(flatten)]
    pub criteria: AlertCriteria,
    pub email: bool,
    pub push: bool,
    pub frequency: AlertFrequency,
}

/// Filters for tender list queries. All set fields must match (AND).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenderFilters {
    pub sector: Option<Sector>,
    pub region: Option<Region>,
    pub status: Option<TenderStatus>,
    pub search_term: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl TenderFilters {
    pub fn matches(&self, tender: &Tender) -> bool {
        if let Some(sector) = self.sector {
            if tender.sector != sector {
                return false;
            }
        }
        if let Some(region) = self.region {
            if tender.region != region {
                return false;
            }
        }
        if let Some(status) = self.status {
            if tender.status != status {
                return false;
            }
        }
        if let Some(term) = &self.search_term {
            let term = normalize_term(term);
            if !term.is_empty() && !tender.matches_term(&term) {
                return false;
            }
        }
        true
    }
}

/// Filters for company list queries. All set fields must match (AND).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyFilters {
    pub sector: Option<Sector>,
    pub region: Option<Region>,
    pub search_term: Option<String>,
}

impl CompanyFilters {
    pub fn matches(&self, company: &Company) -> bool {
        if let Some(sector) = self.sector {
            if company.sector != sector {
                return false;
            }
        }
        if let Some(region) = self.region {
            if company.region != region {
                return false;
            }
        }
        if let Some(term) = &self.search_term {
            let term = normalize_term(term);
            if !term.is_empty() && !company.matches_term(&term) {
                return false;
            }
        }
        true
    }
}

/// Result envelope for tender list queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenderPage {
    pub items: Vec<Tender>,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
}

/// Result envelope for company list queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyPage {
    pub items: Vec<Company>,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
}

/// Combined free-text search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub tenders: Vec<Tender>,
    pub companies: Vec<Company>,
}

/// Per-sector rollup of tender amounts, derived on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorAggregate {
    pub name: String,
    /// Integer percentage share of the grand total. Shares are rounded
    /// independently, so a set may sum to slightly more or less than 100.
    pub value: u32,
    pub count: usize,
    pub total_amount: f64,
    pub color: String,
}

/// Options accepted by sector aggregation. Both fields are recognized but do
/// not change the underlying dataset; they are logged and ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateOptions {
    pub time_range: Option<String>,
    pub data_source: Option<String>,
}
