//! The procurement data service: the single in-process surface consumers
//! call. Answers read queries over the pluggable [`DataSource`], computes
//! sector aggregates, owns the session's mutable alert list, and simulates
//! the asynchronous I/O latency of a real backend.

mod aggregates;
mod alerts;
mod queries;

use alerts::AlertBook;

use crate::config::ServiceConfig;
use crate::errors::{AppError, AppResult};
use crate::export::{self, ExportFormat, ExportReceipt};
use crate::source::{DataSource, InMemorySource};
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tracing::info;

/// In-process data service over a procurement dataset.
///
/// Every operation suspends the caller for the configured simulated latency,
/// then resolves with data or fails; there are no retries and no partial
/// results. The alert list is the only mutable state and is serialized
/// behind a mutex.
pub struct ProcurementService<S: DataSource> {
    source: S,
    config: ServiceConfig,
    alerts: Mutex<AlertBook>,
}

impl ProcurementService<InMemorySource> {
    /// Service over the bundled seed dataset.
    pub async fn seeded(config: ServiceConfig) -> AppResult<Self> {
        Self::connect(InMemorySource::seeded(), config).await
    }
}

impl<S: DataSource> ProcurementService<S> {
    /// Connects to a data source, performing the initial alert load.
    pub async fn connect(source: S, config: ServiceConfig) -> AppResult<Self> {
        let seeded_alerts = source.alerts().await?;
        info!(
            alerts = seeded_alerts.len(),
            page_limit = config.page_limit,
            "Procurement service connected"
        );
        Ok(Self {
            source,
            config,
            alerts: Mutex::new(AlertBook::new(seeded_alerts)),
        })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Serializes `data` and writes it to a date-stamped file under the
    /// configured export directory. Succeeds for any serializable input.
    pub async fn export_data<T: Serialize>(
        &self,
        data: &T,
        format: ExportFormat,
    ) -> AppResult<ExportReceipt> {
        self.simulate_latency(self.config.export_latency_ms).await;
        export::write_export(data, format, &self.config.export_dir).await
    }

    pub(crate) async fn simulate_latency(&self, ms: u64) {
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }

    pub(crate) fn source(&self) -> &S {
        &self.source
    }

    pub(crate) fn alert_book(&self) -> AppResult<MutexGuard<'_, AlertBook>> {
        self.alerts
            .lock()
            .map_err(|_| AppError::DataSourceError("alert store lock poisoned".to_string()))
    }
}
