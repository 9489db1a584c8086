pub mod client;
pub mod config;
pub mod types;

pub use client::{ApiClient, HttpTransport, Transport};
pub use config::ApiConfig;
pub use types::{Company, CompanyCreate, Job, JobCreate, JobFilters, PaginatedJobs};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Request failed with status code {status}: {detail} ({url})")]
    RequestNotOk {
        status: u16,
        url: String,
        detail: String,
    },
    #[error("Json error: '{0}'")]
    Json(#[from] serde_json::Error),
    #[error("Invalid api base url: '{0}'")]
    InvalidBaseUrl(String),
}
