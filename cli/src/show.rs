use job_api::{ApiClient, JobFilters};
use job_query::{job_query, QueryClient, QueryState};
use job_views::{CompaniesPage, JobCard, JobFilterState, JobsPage};

use crate::{CliError, Result};

/// Print one page of jobs for `filters`
pub async fn jobs(client: &QueryClient, api: &ApiClient, filters: JobFilters) -> Result<()> {
    let mut page = JobsPage::with_filter_state(JobFilterState::from_filters(&filters));
    page.load(client, api).await;
    print!("{}", page);
    match page.jobs() {
        QueryState::Error(e) => Err(CliError::Query(e.clone())),
        _ => Ok(()),
    }
}

pub async fn job(client: &QueryClient, api: &ApiClient, job_id: i64) -> Result<()> {
    match job_query(client, api, job_id).await {
        QueryState::Success(job) => {
            println!("{}", JobCard::from(job.as_ref()));
            if let Some(external_id) = &job.external_id {
                println!("    external id: {}", external_id);
            }
            println!("    first seen: {}", job_views::display::format_date(&job.first_seen_at));
            Ok(())
        }
        QueryState::Error(e) => Err(CliError::Query(e)),
        QueryState::Idle | QueryState::Loading => {
            println!("No job selected");
            Ok(())
        }
    }
}

pub async fn companies(client: &QueryClient, api: &ApiClient, search: Option<String>) -> Result<()> {
    let mut page = CompaniesPage::new();
    if let Some(search) = search {
        page.set_search(&search);
    }
    page.load(client, api).await;
    print!("{}", page);
    match page.view() {
        job_views::CompaniesView::Error { message } => Err(CliError::Page(message)),
        _ => Ok(()),
    }
}
