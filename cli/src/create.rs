use job_api::{ApiClient, CompanyCreate, JobCreate};
use job_query::{CreateCompanyMutation, CreateJobMutation, QueryClient};
use job_views::{CompanyCard, JobCard};

use crate::Result;

pub async fn create_job(client: &QueryClient, api: &ApiClient, payload: JobCreate) -> Result<()> {
    let job = client.mutate(&CreateJobMutation, api, &payload).await?;
    println!("Created job {}", job.id);
    println!("{}", JobCard::from(&job));
    Ok(())
}

pub async fn create_company(
    client: &QueryClient,
    api: &ApiClient,
    payload: CompanyCreate,
) -> Result<()> {
    let company = client.mutate(&CreateCompanyMutation, api, &payload).await?;
    println!("Created company {}", company.id);
    println!("{}", CompanyCard::from(&company));
    Ok(())
}
