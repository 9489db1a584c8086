use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use job_api::{ApiClient, ApiConfig, Company, CompanyCreate, Job, JobCreate, PaginatedJobs, Transport};
use serde_json::Value;
use tokio::sync::Semaphore;

pub(crate) const BASE_URL: &str = "http://backend.test";

pub(crate) fn company(id: i64, name: &str) -> Company {
    Company {
        id,
        name: name.to_owned(),
        career_page_url: format!("https://www.{}.com/careers", name.to_lowercase()),
        logo_url: None,
        created_at: "2024-01-01T00:00:00".to_owned(),
        updated_at: "2024-01-01T00:00:00".to_owned(),
    }
}

pub(crate) fn job(id: i64, title: &str, company: &Company) -> Job {
    Job {
        id,
        external_id: None,
        title: title.to_owned(),
        location: Some("Berlin".to_owned()),
        employment_type: Some("Full-time".to_owned()),
        job_url: format!("https://example.com/jobs/{}", id),
        company_id: company.id,
        is_active: true,
        first_seen_at: "2024-03-01T09:00:00".to_owned(),
        last_seen_at: "2024-03-05T10:30:00".to_owned(),
        company: company.clone(),
    }
}

#[derive(Default)]
struct Data {
    companies: Vec<Company>,
    jobs: Vec<Job>,
}

/// In-memory stand-in for the REST backend.
/// Records every request and can hold responses back until released.
pub(crate) struct FakeBackend {
    data: Mutex<Data>,
    requests: Mutex<Vec<(String, String, Vec<(String, String)>)>>,
    failing: Mutex<bool>,
    gate: Option<Arc<Semaphore>>,
}

impl FakeBackend {
    pub(crate) fn new(companies: Vec<Company>, jobs: Vec<Job>) -> Arc<Self> {
        Arc::new(Self {
            data: Mutex::new(Data { companies, jobs }),
            requests: Mutex::new(Vec::new()),
            failing: Mutex::new(false),
            gate: None,
        })
    }

    /// Requests block until a permit is added to the returned semaphore
    pub(crate) fn gated(companies: Vec<Company>, jobs: Vec<Job>) -> (Arc<Self>, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        let backend = Arc::new(Self {
            data: Mutex::new(Data { companies, jobs }),
            requests: Mutex::new(Vec::new()),
            failing: Mutex::new(false),
            gate: Some(gate.clone()),
        });
        (backend, gate)
    }

    pub(crate) fn api(self: &Arc<Self>) -> ApiClient {
        ApiClient::with_transport(&ApiConfig::new(BASE_URL), self.clone()).unwrap()
    }

    pub(crate) fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    pub(crate) fn requests(&self) -> Vec<(String, String, Vec<(String, String)>)> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn count(&self, method: &str, path: &str) -> usize {
        let url = format!("{}{}", BASE_URL, path);
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(m, u, _)| m == method && *u == url)
            .count()
    }

    async fn enter(&self, method: &str, url: &str, params: &[(String, String)]) -> job_api::Result<()> {
        self.requests
            .lock()
            .unwrap()
            .push((method.to_owned(), url.to_owned(), params.to_vec()));
        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }
        if *self.failing.lock().unwrap() {
            return Err(job_api::Error::RequestNotOk {
                status: 500,
                url: url.to_owned(),
                detail: "Internal Server Error".to_owned(),
            });
        }
        Ok(())
    }

    fn not_found(url: &str) -> job_api::Error {
        job_api::Error::RequestNotOk {
            status: 404,
            url: url.to_owned(),
            detail: "Not found".to_owned(),
        }
    }

    fn list_jobs(&self, params: &[(String, String)]) -> PaginatedJobs {
        let param = |name: &str| {
            params
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
        };
        let page: u32 = param("page").and_then(|p| p.parse().ok()).unwrap_or(1);
        let size: u32 = param("size").and_then(|s| s.parse().ok()).unwrap_or(20);
        let search = param("search").map(|s| s.to_lowercase());
        let data = self.data.lock().unwrap();
        let matching: Vec<&Job> = data
            .jobs
            .iter()
            .filter(|job| match &search {
                Some(search) => job.title.to_lowercase().contains(search),
                None => true,
            })
            .collect();
        let total = matching.len() as u64;
        let pages = ((total + size as u64 - 1) / size as u64) as u32;
        let items = matching
            .into_iter()
            .skip(((page - 1) * size) as usize)
            .take(size as usize)
            .cloned()
            .collect();
        PaginatedJobs {
            items,
            total,
            page,
            size,
            pages,
        }
    }
}

#[async_trait]
impl Transport for FakeBackend {
    async fn get(&self, url: &str, params: &[(String, String)]) -> job_api::Result<Value> {
        self.enter("GET", url, params).await?;
        let path = url.trim_start_matches(BASE_URL);
        let value = match path {
            "/jobs" => serde_json::to_value(self.list_jobs(params))?,
            "/companies" => serde_json::to_value(&self.data.lock().unwrap().companies)?,
            _ => {
                let data = self.data.lock().unwrap();
                if let Some(id) = path.strip_prefix("/jobs/") {
                    let job = data.jobs.iter().find(|j| j.id.to_string() == id);
                    serde_json::to_value(job.ok_or_else(|| Self::not_found(url))?)?
                } else if let Some(id) = path.strip_prefix("/companies/") {
                    let company = data.companies.iter().find(|c| c.id.to_string() == id);
                    serde_json::to_value(company.ok_or_else(|| Self::not_found(url))?)?
                } else {
                    return Err(Self::not_found(url));
                }
            }
        };
        Ok(value)
    }

    async fn post(&self, url: &str, body: Value) -> job_api::Result<Value> {
        self.enter("POST", url, &[]).await?;
        let mut data = self.data.lock().unwrap();
        match url.trim_start_matches(BASE_URL) {
            "/jobs" => {
                let payload: JobCreate = serde_json::from_value(body)?;
                let owner = data
                    .companies
                    .iter()
                    .find(|c| c.id == payload.company_id)
                    .cloned()
                    .ok_or_else(|| Self::not_found(url))?;
                let mut created = job(data.jobs.len() as i64 + 1, &payload.title, &owner);
                created.location = payload.location;
                created.employment_type = payload.employment_type;
                created.job_url = payload.job_url;
                created.external_id = payload.external_id;
                data.jobs.insert(0, created.clone());
                Ok(serde_json::to_value(created)?)
            }
            "/companies" => {
                let payload: CompanyCreate = serde_json::from_value(body)?;
                let mut created = company(data.companies.len() as i64 + 1, &payload.name);
                created.career_page_url = payload.career_page_url;
                created.logo_url = payload.logo_url;
                data.companies.push(created.clone());
                Ok(serde_json::to_value(created)?)
            }
            _ => Err(Self::not_found(url)),
        }
    }
}
