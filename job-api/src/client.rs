use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, Response, Url,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::config::ApiConfig;
use crate::types::{Company, CompanyCreate, Job, JobCreate, JobFilters, PaginatedJobs};
use crate::{Error, Result};

/// Moves JSON documents to and from the backend.
/// Implementations must turn every non-2xx answer into an error.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, params: &[(String, String)]) -> Result<Value>;
    async fn post(&self, url: &str, body: Value) -> Result<Value>;
}

/// [`Transport`] backed by a reqwest client
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

/// Pulls a readable message out of an error body.
/// The backend answers `{"detail": "..."}` on 4xx, anything else is passed through raw.
fn error_detail(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => match map.get("detail") {
            Some(Value::String(detail)) => detail.to_owned(),
            Some(other) => other.to_string(),
            None => body.to_owned(),
        },
        _ => body.to_owned(),
    }
}

async fn read_json(url: &str, resp: Response) -> Result<Value> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        log::error!(
            "Request not successful, url: {}, status code: {}, body: {}",
            url,
            status,
            body
        );
        let detail = if body.trim().is_empty() {
            status.canonical_reason().unwrap_or("unknown error").to_owned()
        } else {
            error_detail(&body)
        };
        return Err(Error::RequestNotOk {
            status: status.as_u16(),
            url: url.to_owned(),
            detail,
        });
    }
    Ok(resp.json().await?)
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, params: &[(String, String)]) -> Result<Value> {
        log::debug!("GET {} {:?}", url, params);
        let resp = self.client.get(url).query(params).send().await?;
        read_json(url, resp).await
    }

    async fn post(&self, url: &str, body: Value) -> Result<Value> {
        log::debug!("POST {}", url);
        let resp = self.client.post(url).json(&body).send().await?;
        read_json(url, resp).await
    }
}

/// Single point of HTTP configuration, every request flows through here.
/// Failures are handed to the caller untouched, there is no retry.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Self::with_transport(config, Arc::new(HttpTransport::new()?))
    }

    pub fn with_transport(config: &ApiConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let parsed = Url::parse(&config.base_url)
            .map_err(|_| Error::InvalidBaseUrl(config.base_url.clone()))?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::InvalidBaseUrl(config.base_url.clone()));
        }
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            transport,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, params: &[(String, String)]) -> Result<T> {
        let value = self.transport.get(&self.url(path), params).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        let value = self.transport.post(&self.url(path), body).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn list_jobs(&self, filters: &JobFilters) -> Result<PaginatedJobs> {
        self.get("/jobs", &filters.query_params()).await
    }

    pub async fn get_job(&self, job_id: i64) -> Result<Job> {
        self.get(&format!("/jobs/{}", job_id), &[]).await
    }

    pub async fn create_job(&self, payload: &JobCreate) -> Result<Job> {
        self.post("/jobs", payload).await
    }

    pub async fn list_companies(&self) -> Result<Vec<Company>> {
        self.get("/companies", &[]).await
    }

    pub async fn get_company(&self, company_id: i64) -> Result<Company> {
        self.get(&format!("/companies/{}", company_id), &[]).await
    }

    pub async fn create_company(&self, payload: &CompanyCreate) -> Result<Company> {
        self.post("/companies", payload).await
    }
}
