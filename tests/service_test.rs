//! Tests for the query surface of the procurement service

mod common;

use common::{seeded_service, tender};
use procuraperu_data::config::ServiceConfig;
use procuraperu_data::errors::AppError;
use procuraperu_data::models::{
    AggregateOptions, CompanyFilters, Region, Sector, TenderFilters, TenderStatus,
};
use procuraperu_data::service::ProcurementService;
use procuraperu_data::source::InMemorySource;

#[tokio::test]
async fn unfiltered_query_returns_whole_dataset() {
    let service = seeded_service().await;
    let page = service.get_tenders(&TenderFilters::default()).await.unwrap();

    assert_eq!(page.total, 4);
    assert_eq!(page.items.len(), 4);
    assert_eq!(page.page, 1);
    assert_eq!(page.limit, 10);
}

#[tokio::test]
async fn filters_are_conjunctive_over_every_combination() {
    let service = seeded_service().await;
    let everything = service
        .get_tenders(&TenderFilters::default())
        .await
        .unwrap()
        .items;

    let combinations = vec![
        TenderFilters {
            sector: Some(Sector::Construccion),
            ..Default::default()
        },
        TenderFilters {
            region: Some(Region::Lima),
            ..Default::default()
        },
        TenderFilters {
            status: Some(TenderStatus::Abierto),
            ..Default::default()
        },
        TenderFilters {
            search_term: Some("hospital".to_string()),
            ..Default::default()
        },
        TenderFilters {
            sector: Some(Sector::Tecnologia),
            region: Some(Region::Lima),
            ..Default::default()
        },
        TenderFilters {
            sector: Some(Sector::Salud),
            region: Some(Region::Piura),
            status: Some(TenderStatus::Abierto),
            search_term: Some("equipos".to_string()),
            ..Default::default()
        },
    ];

    for filters in combinations {
        let page = service.get_tenders(&filters).await.unwrap();

        // Every returned item satisfies every supplied filter
        for item in &page.items {
            assert!(filters.matches(item), "item {} escaped {filters:?}", item.id);
        }
        // Every omitted item fails at least one supplied filter
        for item in &everything {
            if !page.items.iter().any(|t| t.id == item.id) {
                assert!(
                    !filters.matches(item),
                    "item {} wrongly excluded by {filters:?}",
                    item.id
                );
            }
        }
    }
}

#[tokio::test]
async fn mutually_exclusive_filters_yield_empty_page() {
    let service = seeded_service().await;
    let filters = TenderFilters {
        sector: Some(Sector::Construccion),
        region: Some(Region::Lima),
        ..Default::default()
    };

    // Not an error: the seeded construction tender is in Arequipa
    let page = service.get_tenders(&filters).await.unwrap();
    assert_eq!(page.total, 0);
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn page_and_limit_are_echoed_without_slicing() {
    let service = seeded_service().await;
    let filters = TenderFilters {
        page: Some(3),
        limit: Some(2),
        ..Default::default()
    };

    let page = service.get_tenders(&filters).await.unwrap();
    assert_eq!(page.page, 3);
    assert_eq!(page.limit, 2);
    // total reflects the full filtered count and items are not sliced
    assert_eq!(page.total, 4);
    assert_eq!(page.items.len(), 4);
}

#[tokio::test]
async fn tender_by_id_returns_exact_record_idempotently() {
    let service = seeded_service().await;

    let first = service.get_tender_by_id(1).await.unwrap();
    assert_eq!(first.title, "Construcción de Hospital Regional en Arequipa");
    assert_eq!(first.status, TenderStatus::Abierto);
    assert_eq!(first.participants.len(), 3);

    let second = service.get_tender_by_id(1).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn tender_by_id_not_found() {
    let service = seeded_service().await;
    let err = service.get_tender_by_id(999).await.unwrap_err();

    match err {
        AppError::NotFound { entity, id } => {
            assert_eq!(entity, "tender");
            assert_eq!(id, 999);
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn company_queries_follow_the_same_contract() {
    let service = seeded_service().await;

    let page = service
        .get_companies(&CompanyFilters {
            sector: Some(Sector::Tecnologia),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "TechSolutions SAC");
    assert_eq!(page.items[0].ruc, "20187654321");

    let company = service.get_company_by_id(1).await.unwrap();
    assert_eq!(company.name, "Constructora ABC S.A.");

    let err = service.get_company_by_id(77).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::NotFound {
            entity: "company",
            id: 77
        }
    ));
}

#[tokio::test]
async fn search_hospital_includes_all_matches_and_only_matches() {
    let service = seeded_service().await;
    let results = service.search("hospital").await.unwrap();

    let everything = service
        .get_tenders(&TenderFilters::default())
        .await
        .unwrap()
        .items;
    for item in &everything {
        let should_match = item.matches_term("hospital");
        let included = results.tenders.iter().any(|t| t.id == item.id);
        assert_eq!(should_match, included, "tender {} mismatch", item.id);
    }

    // Seeded data: tenders 1, 2 and 4 mention hospitals; company 1 does too
    let tender_ids: Vec<u64> = results.tenders.iter().map(|t| t.id).collect();
    assert_eq!(tender_ids, vec![1, 2, 4]);
    assert_eq!(results.companies.len(), 1);
    assert_eq!(results.companies[0].id, 1);
}

#[tokio::test]
async fn search_is_case_insensitive() {
    let service = seeded_service().await;
    let lower = service.search("hospital").await.unwrap();
    let upper = service.search("HOSPITAL").await.unwrap();
    assert_eq!(lower, upper);
}

#[tokio::test]
async fn blank_search_yields_empty_results() {
    let service = seeded_service().await;
    let results = service.search("   ").await.unwrap();
    assert!(results.tenders.is_empty());
    assert!(results.companies.is_empty());
}

#[tokio::test]
async fn aggregates_over_seeded_data_are_ordered_and_bounded() {
    let service = seeded_service().await;
    let aggregates = service
        .sector_aggregates(&AggregateOptions::default())
        .await
        .unwrap();

    // Four seeded tenders across four sectors
    assert_eq!(aggregates.len(), 4);
    assert_eq!(aggregates[0].name, "Construcción");

    for pair in aggregates.windows(2) {
        assert!(pair[0].total_amount >= pair[1].total_amount);
    }

    let sum: u32 = aggregates.iter().map(|a| a.value).sum();
    let drift = (100i64 - sum as i64).abs();
    assert!(drift <= aggregates.len() as i64, "drift {drift} too large");
}

#[tokio::test]
async fn aggregate_options_do_not_change_results() {
    let service = seeded_service().await;

    let plain = service
        .sector_aggregates(&AggregateOptions::default())
        .await
        .unwrap();
    let optioned = service
        .sector_aggregates(&AggregateOptions {
            time_range: Some("current_year".to_string()),
            data_source: Some("postgres".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(plain, optioned);
}

#[tokio::test]
async fn custom_dataset_flows_through_the_source_seam() {
    let tenders = vec![
        tender(10, Sector::Transporte, Region::Cusco, 900_000.0),
        tender(11, Sector::Transporte, Region::Lima, 100_000.0),
    ];
    let source = InMemorySource::new(tenders, vec![], vec![]);
    let service = ProcurementService::connect(source, ServiceConfig::instant())
        .await
        .unwrap();

    let page = service
        .get_tenders(&TenderFilters {
            region: Some(Region::Cusco),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, 10);

    let aggregates = service
        .sector_aggregates(&AggregateOptions::default())
        .await
        .unwrap();
    assert_eq!(aggregates.len(), 1);
    assert_eq!(aggregates[0].count, 2);
    assert_eq!(aggregates[0].value, 100);
}

#[tokio::test]
async fn failing_source_surfaces_data_source_error() {
    let result =
        ProcurementService::connect(InMemorySource::failing("simulated outage"), ServiceConfig::instant())
            .await;

    match result {
        Err(AppError::DataSourceError(msg)) => assert!(msg.contains("simulated outage")),
        other => panic!("expected DataSourceError, got {:?}", other.map(|_| ())),
    }
}
