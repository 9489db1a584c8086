use serde::{Deserialize, Serialize};

/// Page size the job listing requests by default
pub const DEFAULT_PAGE_SIZE: u32 = 30;
/// Largest page size the backend accepts
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub career_page_url: String,
    pub logo_url: Option<String>,
    /// ISO-8601, the server may omit the zone
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CompanyCreate {
    pub name: String,
    pub career_page_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

impl CompanyCreate {
    pub fn new(name: String, career_page_url: String, logo_url: Option<String>) -> Self {
        Self {
            name,
            career_page_url,
            logo_url,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub id: i64,
    pub external_id: Option<String>,
    pub title: String,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub job_url: String,
    pub company_id: i64,
    pub is_active: bool,
    pub first_seen_at: String,
    pub last_seen_at: String,
    /// snapshot of the owning company at read time
    pub company: Company,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JobCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<String>,
    pub job_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    pub company_id: i64,
}

/// One page of jobs matching a [`JobFilters`], computed by the server
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PaginatedJobs {
    pub items: Vec<Job>,
    pub total: u64,
    /// 1-indexed
    pub page: u32,
    pub size: u32,
    pub pages: u32,
}

impl PaginatedJobs {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }
}

/// The result window a job listing asks for.
///
/// Serialized as part of the cache key, so two filters that differ in any
/// field are cached independently.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JobFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl JobFilters {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_company(mut self, company_id: i64) -> Self {
        self.company_id = Some(company_id);
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Page sizes above [`MAX_PAGE_SIZE`] are clamped, the server rejects them
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size.min(MAX_PAGE_SIZE));
        self
    }

    /// Query string parameters for `GET /jobs`.
    /// Only fields that are set and truthy (non-empty, non-zero) are sent.
    pub fn query_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(5);
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            params.push(("search".to_owned(), search.to_owned()));
        }
        if let Some(location) = self.location.as_deref().filter(|s| !s.is_empty()) {
            params.push(("location".to_owned(), location.to_owned()));
        }
        if let Some(company_id) = self.company_id.filter(|id| *id != 0) {
            params.push(("company_id".to_owned(), company_id.to_string()));
        }
        if let Some(page) = self.page.filter(|p| *p != 0) {
            params.push(("page".to_owned(), page.to_string()));
        }
        if let Some(size) = self.size.filter(|s| *s != 0) {
            params.push(("size".to_owned(), size.to_string()));
        }
        params
    }
}
