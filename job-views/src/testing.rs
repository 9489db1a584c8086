use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use job_api::{ApiClient, ApiConfig, Company, Job, PaginatedJobs, Transport};
use serde_json::Value;

const BASE_URL: &str = "http://views.test";

pub(crate) fn page_of(page: u32, pages: u32) -> PaginatedJobs {
    PaginatedJobs {
        items: vec![],
        total: pages as u64 * 30,
        page,
        size: 30,
        pages,
    }
}

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

/// Serves `/jobs` and `/companies` from memory and records the query
/// parameters of every request
pub(crate) struct FakeBackend {
    companies: Vec<Company>,
    jobs: Vec<Job>,
    requests: Mutex<Vec<(String, Vec<(String, String)>)>>,
    failing: Mutex<bool>,
}

impl FakeBackend {
    pub(crate) fn new(companies: Vec<Company>, jobs: Vec<Job>) -> Arc<Self> {
        Arc::new(Self {
            companies,
            jobs,
            requests: Mutex::new(Vec::new()),
            failing: Mutex::new(false),
        })
    }

    pub(crate) fn with_jobs(count: i64) -> Arc<Self> {
        let acme = company(1, "Acme");
        let jobs = (1..=count)
            .map(|id| Job {
                id,
                external_id: None,
                title: format!("Engineer {}", id),
                location: Some("Berlin".to_owned()),
                employment_type: Some("Full-time".to_owned()),
                job_url: format!("https://acme.com/jobs/{}", id),
                company_id: acme.id,
                is_active: true,
                first_seen_at: "2024-03-01T09:00:00".to_owned(),
                last_seen_at: "2024-03-05T10:30:00".to_owned(),
                company: acme.clone(),
            })
            .collect();
        Self::new(vec![acme], jobs)
    }

    pub(crate) fn api(self: &Arc<Self>) -> ApiClient {
        ApiClient::with_transport(&ApiConfig::new(BASE_URL), self.clone()).unwrap()
    }

    pub(crate) fn set_failing(&self, failing: bool) {
        *self.failing.lock().unwrap() = failing;
    }

    pub(crate) fn count(&self, path: &str) -> usize {
        let url = format!("{}{}", BASE_URL, path);
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(u, _)| *u == url)
            .count()
    }

    pub(crate) fn last_jobs_request(&self) -> Option<Vec<(String, String)>> {
        let url = format!("{}/jobs", BASE_URL);
        self.requests
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(u, _)| *u == url)
            .map(|(_, params)| params.clone())
    }

    fn list_jobs(&self, params: &[(String, String)]) -> PaginatedJobs {
        let param = |name: &str| params.iter().find(|(k, _)| k == name).map(|(_, v)| v.clone());
        let page: u32 = param("page").and_then(|p| p.parse().ok()).unwrap_or(1);
        let size: u32 = param("size").and_then(|s| s.parse().ok()).unwrap_or(20);
        let search = param("search").map(|s| s.to_lowercase());
        let location = param("location").map(|s| s.to_lowercase());
        let matching: Vec<&Job> = self
            .jobs
            .iter()
            .filter(|job| {
                search
                    .as_ref()
                    .map_or(true, |s| job.title.to_lowercase().contains(s))
            })
            .filter(|job| {
                location.as_ref().map_or(true, |l| {
                    job.location
                        .as_deref()
                        .map_or(false, |loc| loc.to_lowercase().contains(l))
                })
            })
            .collect();
        let total = matching.len() as u64;
        let pages = ((total + size as u64 - 1) / size as u64) as u32;
        PaginatedJobs {
            items: matching
                .into_iter()
                .skip(((page - 1) * size) as usize)
                .take(size as usize)
                .cloned()
                .collect(),
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
        self.requests
            .lock()
            .unwrap()
            .push((url.to_owned(), params.to_vec()));
        if *self.failing.lock().unwrap() {
            return Err(job_api::Error::RequestNotOk {
                status: 500,
                url: url.to_owned(),
                detail: "Internal Server Error".to_owned(),
            });
        }
        match url.trim_start_matches(BASE_URL) {
            "/jobs" => Ok(serde_json::to_value(self.list_jobs(params))?),
            "/companies" => Ok(serde_json::to_value(&self.companies)?),
            _ => Err(job_api::Error::RequestNotOk {
                status: 404,
                url: url.to_owned(),
                detail: "Not found".to_owned(),
            }),
        }
    }

    async fn post(&self, url: &str, _body: Value) -> job_api::Result<Value> {
        Err(job_api::Error::RequestNotOk {
            status: 405,
            url: url.to_owned(),
            detail: "Method Not Allowed".to_owned(),
        })
    }
}
