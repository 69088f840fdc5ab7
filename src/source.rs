//! Pluggable data source behind the procurement service.
//!
//! The service reads tenders, companies and seeded alerts through the
//! [`DataSource`] trait so that a real backend (SEACE exports, a database)
//! can replace the bundled in-memory fixture without touching the query
//! layer. [`InMemorySource`] is the only implementation shipped today.

use crate::errors::{AppError, AppResult};
use crate::fixtures;
use crate::models::{Alert, Company, Tender};
use async_trait::async_trait;

/// Read access to the underlying procurement dataset.
///
/// Implementations return owned snapshots; callers never observe partial
/// results. A failing load surfaces as [`AppError::DataSourceError`].
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn tenders(&self) -> AppResult<Vec<Tender>>;
    async fn companies(&self) -> AppResult<Vec<Company>>;
    /// Alerts the session starts with. Read once at service construction;
    /// subsequent alert state lives in the service.
    async fn alerts(&self) -> AppResult<Vec<Alert>>;
}

/// In-memory data source backed by fixed vectors.
pub struct InMemorySource {
    tenders: Vec<Tender>,
    companies: Vec<Company>,
    alerts: Vec<Alert>,
    fail_with: Option<String>,
}

impl InMemorySource {
    /// Builds a source over custom data.
    pub fn new(tenders: Vec<Tender>, companies: Vec<Company>, alerts: Vec<Alert>) -> Self {
        Self {
            tenders,
            companies,
            alerts,
            fail_with: None,
        }
    }

    /// Builds a source over the bundled seed dataset.
    pub fn seeded() -> Self {
        Self::new(
            fixtures::seed_tenders(),
            fixtures::seed_companies(),
            fixtures::seed_alerts(),
        )
    }

    /// Builds a source whose every load fails with the given message.
    /// The fixtures never fail on their own; this exercises the error path.
    pub fn failing(message: &str) -> Self {
        Self {
            tenders: vec![],
            companies: vec![],
            alerts: vec![],
            fail_with: Some(message.to_string()),
        }
    }

    fn check_available(&self) -> AppResult<()> {
        match &self.fail_with {
            Some(message) => Err(AppError::DataSourceError(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DataSource for InMemorySource {
    async fn tenders(&self) -> AppResult<Vec<Tender>> {
        self.check_available()?;
        Ok(self.tenders.clone())
    }

    async fn companies(&self) -> AppResult<Vec<Company>> {
        self.check_available()?;
        Ok(self.companies.clone())
    }

    async fn alerts(&self) -> AppResult<Vec<Alert>> {
        self.check_available()?;
        Ok(self.alerts.clone())
    }
}
