//! Common test utilities for integration tests

use chrono::NaiveDate;
use procuraperu_data::config::ServiceConfig;
use procuraperu_data::models::{Region, Sector, Tender, TenderStatus};
use procuraperu_data::service::ProcurementService;
use procuraperu_data::source::InMemorySource;

/// Service over the bundled seed dataset with all simulated delays disabled.
#[allow(dead_code)]
pub async fn seeded_service() -> ProcurementService<InMemorySource> {
    ProcurementService::connect(InMemorySource::seeded(), ServiceConfig::instant())
        .await
        .expect("seeded source never fails")
}

/// Service over the seed dataset with a custom configuration.
#[allow(dead_code)]
pub async fn seeded_service_with(config: ServiceConfig) -> ProcurementService<InMemorySource> {
    ProcurementService::connect(InMemorySource::seeded(), config)
        .await
        .expect("seeded source never fails")
}

/// Minimal tender for building custom datasets.
#[allow(dead_code)]
pub fn tender(id: u64, sector: Sector, region: Region, amount: f64) -> Tender {
    Tender {
        id,
        title: format!("Licitación {id}"),
        institution: "Entidad de Prueba".to_string(),
        amount,
        deadline: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
        status: TenderStatus::Abierto,
        sector,
        region,
        description: String::new(),
        requirements: vec![],
        documents: vec![],
        timeline: vec![],
        participants: vec![],
    }
}
