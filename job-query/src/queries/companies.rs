use job_api::{ApiClient, Company};

use crate::{QueryClient, QueryKey, QueryState};

pub const COMPANIES: &str = "companies";

pub fn companies_key() -> QueryKey {
    QueryKey::entity(COMPANIES)
}

pub fn company_key(company_id: i64) -> QueryKey {
    QueryKey::entity(COMPANIES).with(&company_id)
}

/// `GET /companies`, the full unpaginated list
pub async fn companies_query(client: &QueryClient, api: &ApiClient) -> QueryState<Vec<Company>> {
    let api = api.clone();
    client
        .fetch_query(companies_key(), move || async move {
            api.list_companies().await
        })
        .await
        .into()
}

/// `GET /companies/{id}`, disabled for ids `<= 0`
pub async fn company_query(
    client: &QueryClient,
    api: &ApiClient,
    company_id: i64,
) -> QueryState<Company> {
    if company_id <= 0 {
        return QueryState::Idle;
    }
    let api = api.clone();
    client
        .fetch_query(company_key(company_id), move || async move {
            api.get_company(company_id).await
        })
        .await
        .into()
}
