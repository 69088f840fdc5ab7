use super::ProcurementService;
use crate::constants::DEFAULT_PAGE;
use crate::errors::{AppError, AppResult};
use crate::models::{
    Company, CompanyFilters, CompanyPage, SearchResults, Tender, TenderFilters, TenderPage,
};
use crate::source::DataSource;
use crate::utils::normalize_term;
use tracing::debug;

impl<S: DataSource> ProcurementService<S> {
    /// Lists tenders matching every supplied filter (conjunctive AND).
    ///
    /// `total` is the full filtered count; `page` and `limit` are echoed
    /// back with defaults applied. An empty result set is not an error.
    pub async fn get_tenders(&self, filters: &TenderFilters) -> AppResult<TenderPage> {
        self.simulate_latency(self.config.list_latency_ms).await;

        let items: Vec<Tender> = self
            .source()
            .tenders()
            .await?
            .into_iter()
            .filter(|tender| filters.matches(tender))
            .collect();
        let total = items.len();
        let page = filters.page.unwrap_or(DEFAULT_PAGE);
        let limit = filters.limit.unwrap_or(self.config.page_limit);

        debug!(total, page, limit, "Tender query answered");
        Ok(TenderPage {
            items,
            total,
            page,
            limit,
        })
    }

    /// Returns the tender with the given id, or `NotFound`.
    pub async fn get_tender_by_id(&self, id: u64) -> AppResult<Tender> {
        self.simulate_latency(self.config.detail_latency_ms).await;

        self.source()
            .tenders()
            .await?
            .into_iter()
            .find(|tender| tender.id == id)
            .ok_or(AppError::NotFound {
                entity: "tender",
                id,
            })
    }

    /// Lists companies matching every supplied filter (conjunctive AND).
    pub async fn get_companies(&self, filters: &CompanyFilters) -> AppResult<CompanyPage> {
        self.simulate_latency(self.config.list_latency_ms).await;

        let items: Vec<Company> = self
            .source()
            .companies()
            .await?
            .into_iter()
            .filter(|company| filters.matches(company))
            .collect();
        let total = items.len();

        debug!(total, "Company query answered");
        Ok(CompanyPage {
            items,
            total,
            page: DEFAULT_PAGE,
            limit: self.config.page_limit,
        })
    }

    /// Returns the company with the given id, or `NotFound`.
    pub async fn get_company_by_id(&self, id: u64) -> AppResult<Company> {
        self.simulate_latency(self.config.detail_latency_ms).await;

        self.source()
            .companies()
            .await?
            .into_iter()
            .find(|company| company.id == id)
            .ok_or(AppError::NotFound {
                entity: "company",
                id,
            })
    }

    /// Free-text search over tenders and companies with the same
    /// case-insensitive substring rule. A blank query yields empty results.
    pub async fn search(&self, query: &str) -> AppResult<SearchResults> {
        self.simulate_latency(self.config.search_latency_ms).await;

        let term = normalize_term(query);
        if term.is_empty() {
            return Ok(SearchResults::default());
        }

        let tenders: Vec<Tender> = self
            .source()
            .tenders()
            .await?
            .into_iter()
            .filter(|tender| tender.matches_term(&term))
            .collect();
        let companies: Vec<Company> = self
            .source()
            .companies()
            .await?
            .into_iter()
            .filter(|company| company.matches_term(&term))
            .collect();

        debug!(
            term = %term,
            tenders = tenders.len(),
            companies = companies.len(),
            "Search answered"
        );
        Ok(SearchResults { tenders, companies })
    }
}
