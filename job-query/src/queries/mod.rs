mod companies;
mod jobs;

pub use companies::{companies_key, companies_query, company_key, company_query, COMPANIES};
pub use jobs::{job_key, job_query, jobs_key, jobs_query, JOBS};
