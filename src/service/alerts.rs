use super::ProcurementService;
use crate::errors::{AppError, AppResult};
use crate::models::{Alert, AlertDraft, Tender};
use crate::source::DataSource;
use tracing::info;

/// Session-local alert list with id assignment.
///
/// Alerts never outlive the service; there is no cross-session persistence.
pub(crate) struct AlertBook {
    entries: Vec<Alert>,
    next_id: u64,
}

impl AlertBook {
    pub(crate) fn new(seeded: Vec<Alert>) -> Self {
        let next_id = seeded.iter().map(|alert| alert.id).max().unwrap_or(0) + 1;
        Self {
            entries: seeded,
            next_id,
        }
    }

    fn assign_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn find_mut(&mut self, id: u64) -> AppResult<&mut Alert> {
        self.entries
            .iter_mut()
            .find(|alert| alert.id == id)
            .ok_or(AppError::NotFound {
                entity: "alert",
                id,
            })
    }
}

impl<S: DataSource> ProcurementService<S> {
    /// Current alerts, in creation order.
    pub fn list_alerts(&self) -> AppResult<Vec<Alert>> {
        Ok(self.alert_book()?.entries.clone())
    }

    /// Creates an alert from a draft. New alerts start active with no
    /// recorded matches.
    pub fn create_alert(&self, draft: AlertDraft) -> AppResult<Alert> {
        if draft.name.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Alert name must not be empty".into(),
            ));
        }

        let mut book = self.alert_book()?;
        let alert = Alert {
            id: book.assign_id(),
            name: draft.name,
            criteria: draft.criteria,
            email: draft.email,
            push: draft.push,
            frequency: draft.frequency,
            active: true,
            last_match: None,
            matches: 0,
        };
        book.entries.push(alert.clone());

        info!(id = alert.id, name = %alert.name, "Alert created");
        Ok(alert)
    }

    /// Replaces an alert's editable fields, preserving its id, activity
    /// flag and match bookkeeping.
    pub fn update_alert(&self, id: u64, draft: AlertDraft) -> AppResult<Alert> {
        if draft.name.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Alert name must not be empty".into(),
            ));
        }

        let mut book = self.alert_book()?;
        let alert = book.find_mut(id)?;
        alert.name = draft.name;
        alert.criteria = draft.criteria;
        alert.email = draft.email;
        alert.push = draft.push;
        alert.frequency = draft.frequency;

        Ok(alert.clone())
    }

    /// Removes an alert. `NotFound` when no alert has the id.
    pub fn delete_alert(&self, id: u64) -> AppResult<()> {
        let mut book = self.alert_book()?;
        let before = book.entries.len();
        book.entries.retain(|alert| alert.id != id);
        if book.entries.len() == before {
            return Err(AppError::NotFound {
                entity: "alert",
                id,
            });
        }

        info!(id, "Alert deleted");
        Ok(())
    }

    /// Flips exactly the alert's `active` flag; every other field is left
    /// unchanged.
    pub fn toggle_alert(&self, id: u64) -> AppResult<Alert> {
        let mut book = self.alert_book()?;
        let alert = book.find_mut(id)?;
        alert.active = !alert.active;
        Ok(alert.clone())
    }

    /// Evaluates an alert's criteria against the tender dataset and returns
    /// the tenders it would notify about today.
    pub async fn preview_alert_matches(&self, id: u64) -> AppResult<Vec<Tender>> {
        let criteria = {
            let mut book = self.alert_book()?;
            book.find_mut(id)?.criteria.clone()
        };

        self.simulate_latency(self.config.list_latency_ms).await;
        Ok(self
            .source()
            .tenders()
            .await?
            .into_iter()
            .filter(|tender| criteria.matches(tender))
            .collect())
    }
}
