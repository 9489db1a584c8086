use async_trait::async_trait;
use job_api::{ApiClient, Job, JobCreate};

use crate::queries::JOBS;
use crate::{Mutation, QueryKey};

/// `POST /jobs`, invalidates every jobs query
#[derive(Debug, Default, Clone, Copy)]
pub struct CreateJobMutation;

#[async_trait]
impl Mutation for CreateJobMutation {
    type Input = JobCreate;
    type Output = Job;

    fn invalidates(&self) -> Vec<QueryKey> {
        vec![QueryKey::entity(JOBS)]
    }

    async fn mutate(&self, api: &ApiClient, input: &JobCreate) -> job_api::Result<Job> {
        let job = api.create_job(input).await?;
        log::info!("Created job {} ({})", job.id, job.title);
        Ok(job)
    }
}
