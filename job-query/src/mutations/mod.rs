mod companies;
mod jobs;

pub use companies::CreateCompanyMutation;
pub use jobs::CreateJobMutation;

use async_trait::async_trait;
use job_api::ApiClient;

use crate::{QueryClient, QueryError, QueryKey};

/// A write against the backend together with the cache keys it makes stale
#[async_trait]
pub trait Mutation: Send + Sync {
    type Input: Send + Sync;
    type Output: Send;

    /// Keys (or key prefixes) invalidated after a successful run
    fn invalidates(&self) -> Vec<QueryKey>;

    async fn mutate(&self, api: &ApiClient, input: &Self::Input) -> job_api::Result<Self::Output>;
}

impl QueryClient {
    /// Run `mutation`, invalidating its declared keys on success.
    /// A failure leaves cached data untouched and is handed back to the caller.
    pub async fn mutate<M: Mutation>(
        &self,
        mutation: &M,
        api: &ApiClient,
        input: &M::Input,
    ) -> crate::Result<M::Output> {
        match mutation.mutate(api, input).await {
            Ok(output) => {
                let keys = mutation.invalidates();
                log::info!("Mutation succeeded, invalidating {:?}", keys);
                for key in &keys {
                    self.invalidate_queries(key);
                }
                Ok(output)
            }
            Err(e) => {
                log::error!("Mutation failed: {}", e);
                Err(QueryError::from(e))
            }
        }
    }
}
