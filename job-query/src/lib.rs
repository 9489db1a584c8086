pub mod cache;
pub mod key;
pub mod mutations;
pub mod queries;
pub mod state;
#[cfg(test)]
pub(crate) mod testing;

pub use cache::QueryClient;
pub use key::QueryKey;
pub use mutations::{CreateCompanyMutation, CreateJobMutation, Mutation};
pub use queries::{companies_query, company_query, job_query, jobs_query};
pub use state::QueryState;

use std::sync::Arc;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueryError>;

/// Error delivered to every caller waiting on the same request, hence cloneable
#[derive(Debug, Clone, Error)]
pub enum QueryError {
    #[error("{0}")]
    Api(Arc<job_api::Error>),
    #[error("Cached data for {0} has an unexpected type")]
    TypeMismatch(QueryKey),
}

impl From<job_api::Error> for QueryError {
    fn from(e: job_api::Error) -> Self {
        QueryError::Api(Arc::new(e))
    }
}
