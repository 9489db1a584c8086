use job_api::{ApiClient, Job, JobFilters, PaginatedJobs};

use crate::{QueryClient, QueryKey, QueryState};

pub const JOBS: &str = "jobs";

/// Includes the whole filters object, so every filter combination caches on its own
pub fn jobs_key(filters: &JobFilters) -> QueryKey {
    QueryKey::entity(JOBS).with(filters)
}

pub fn job_key(job_id: i64) -> QueryKey {
    QueryKey::entity(JOBS).with(&job_id)
}

/// `GET /jobs` with the truthy subset of `filters` as query parameters
pub async fn jobs_query(
    client: &QueryClient,
    api: &ApiClient,
    filters: &JobFilters,
) -> QueryState<PaginatedJobs> {
    let api = api.clone();
    let params = filters.clone();
    client
        .fetch_query(jobs_key(filters), move || async move {
            api.list_jobs(&params).await
        })
        .await
        .into()
}

/// `GET /jobs/{id}`, disabled for ids `<= 0` (nothing selected)
pub async fn job_query(client: &QueryClient, api: &ApiClient, job_id: i64) -> QueryState<Job> {
    if job_id <= 0 {
        return QueryState::Idle;
    }
    let api = api.clone();
    client
        .fetch_query(job_key(job_id), move || async move { api.get_job(job_id).await })
        .await
        .into()
}
