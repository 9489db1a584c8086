use std::fmt::{self, Display};

use job_api::types::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use job_api::{ApiClient, Company, JobFilters, PaginatedJobs};
use job_query::queries::jobs_key;
use job_query::{companies_query, jobs_query, QueryClient, QueryKey, QueryState};

use crate::components::JobCard;
use crate::display::format_count;

/// Options offered by the employment type selector.
/// The backend has no parameter for it, so the choice never reaches a request.
pub const EMPLOYMENT_TYPES: [(&str, &str); 4] = [
    ("full-time", "Full-time"),
    ("part-time", "Part-time"),
    ("contract", "Contract"),
    ("freelance", "Freelance"),
];

fn non_empty(input: &str) -> Option<String> {
    if input.is_empty() {
        None
    } else {
        Some(input.to_owned())
    }
}

/// Filter and position state of the job listing.
///
/// Changing any filter moves back to page 1; the page itself only moves via
/// [`previous`](Self::previous) / [`next`](Self::next), within `[1, pages]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobFilterState {
    search: Option<String>,
    location: Option<String>,
    company_id: Option<i64>,
    page: u32,
    size: u32,
    employment_type: Option<String>,
}

impl Default for JobFilterState {
    fn default() -> Self {
        Self {
            search: None,
            location: None,
            company_id: None,
            page: 1,
            size: DEFAULT_PAGE_SIZE,
            employment_type: None,
        }
    }
}

impl JobFilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at an arbitrary position, e.g. from command line flags
    pub fn from_filters(filters: &JobFilters) -> Self {
        Self {
            search: filters.search.as_deref().and_then(non_empty),
            location: filters.location.as_deref().and_then(non_empty),
            company_id: filters.company_id.filter(|id| *id != 0),
            page: filters.page.filter(|p| *p > 0).unwrap_or(1),
            size: filters
                .size
                .filter(|s| *s > 0)
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .min(MAX_PAGE_SIZE),
            employment_type: None,
        }
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn company_id(&self) -> Option<i64> {
        self.company_id
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn employment_type(&self) -> Option<&str> {
        self.employment_type.as_deref()
    }

    pub fn set_search(&mut self, input: &str) {
        self.search = non_empty(input);
        self.page = 1;
    }

    pub fn set_location(&mut self, input: &str) {
        self.location = non_empty(input);
        self.page = 1;
    }

    /// `None` (or 0) selects all companies
    pub fn set_company(&mut self, company_id: Option<i64>) {
        self.company_id = company_id.filter(|id| *id != 0);
        self.page = 1;
    }

    /// Only remembered for the selector, [`filters`](Self::filters) leaves it out
    pub fn set_employment_type(&mut self, input: &str) {
        self.employment_type = non_empty(input);
        self.page = 1;
    }

    /// Step to the page before `data.page`; false when already on the first page
    pub fn previous(&mut self, data: &PaginatedJobs) -> bool {
        if !data.has_previous() {
            return false;
        }
        self.page = data.page - 1;
        true
    }

    /// Step to the page after `data.page`; false when already on the last page
    pub fn next(&mut self, data: &PaginatedJobs) -> bool {
        if !data.has_next() {
            return false;
        }
        self.page = data.page + 1;
        true
    }

    pub fn filters(&self) -> JobFilters {
        JobFilters {
            search: self.search.clone(),
            location: self.location.clone(),
            company_id: self.company_id,
            page: Some(self.page),
            size: Some(self.size),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub pages: u32,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

impl Pagination {
    /// `None` when everything fits on one page
    pub fn for_page(data: &PaginatedJobs) -> Option<Self> {
        if data.pages <= 1 {
            return None;
        }
        Some(Self {
            page: data.page,
            pages: data.pages,
            previous_enabled: data.has_previous(),
            next_enabled: data.has_next(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobsView {
    Loading,
    Error { message: String },
    Empty,
    List { cards: Vec<JobCard> },
}

impl JobsView {
    pub fn title(&self) -> Option<&'static str> {
        match self {
            JobsView::Error { .. } => Some("Failed to load jobs"),
            JobsView::Empty => Some("No results found"),
            _ => None,
        }
    }
}

/// The job listing: owns its filter state and renders whatever the jobs
/// query for that state currently holds.
pub struct JobsPage {
    filters: JobFilterState,
    active_key: QueryKey,
    jobs: QueryState<PaginatedJobs>,
    companies: QueryState<Vec<Company>>,
}

impl Default for JobsPage {
    fn default() -> Self {
        Self::with_filter_state(JobFilterState::new())
    }
}

impl JobsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter_state(filters: JobFilterState) -> Self {
        Self {
            active_key: jobs_key(&filters.filters()),
            filters,
            jobs: QueryState::Loading,
            companies: QueryState::Loading,
        }
    }

    pub fn filter_state(&self) -> &JobFilterState {
        &self.filters
    }

    pub fn jobs(&self) -> &QueryState<PaginatedJobs> {
        &self.jobs
    }

    pub fn active_key(&self) -> &QueryKey {
        &self.active_key
    }

    fn sync_key(&mut self) {
        let key = jobs_key(&self.filters.filters());
        if key != self.active_key {
            self.active_key = key;
            self.jobs = QueryState::Loading;
        }
    }

    pub fn set_search(&mut self, input: &str) {
        self.filters.set_search(input);
        self.sync_key();
    }

    pub fn set_location(&mut self, input: &str) {
        self.filters.set_location(input);
        self.sync_key();
    }

    pub fn set_company(&mut self, company_id: Option<i64>) {
        self.filters.set_company(company_id);
        self.sync_key();
    }

    pub fn set_employment_type(&mut self, input: &str) {
        self.filters.set_employment_type(input);
        self.sync_key();
    }

    /// Only possible once a page is loaded and it is not the first one
    pub fn previous(&mut self) -> bool {
        let moved = match &self.jobs {
            QueryState::Success(data) => self.filters.previous(data),
            _ => false,
        };
        if moved {
            self.sync_key();
        }
        moved
    }

    pub fn next(&mut self) -> bool {
        let moved = match &self.jobs {
            QueryState::Success(data) => self.filters.next(data),
            _ => false,
        };
        if moved {
            self.sync_key();
        }
        moved
    }

    /// Key and filters for the request the current state needs
    pub fn request(&self) -> (QueryKey, JobFilters) {
        (self.active_key.clone(), self.filters.filters())
    }

    /// Apply a finished query. Responses for a key that is no longer active
    /// are dropped and `false` is returned.
    pub fn receive(&mut self, key: &QueryKey, state: QueryState<PaginatedJobs>) -> bool {
        if *key != self.active_key {
            log::debug!("Ignoring response for inactive key {}", key);
            return false;
        }
        self.jobs = state;
        true
    }

    pub fn receive_companies(&mut self, state: QueryState<Vec<Company>>) {
        self.companies = state;
    }

    /// Query the jobs for the current filters, plus the companies for the selector
    pub async fn load(&mut self, client: &QueryClient, api: &ApiClient) {
        let (key, filters) = self.request();
        let state = jobs_query(client, api, &filters).await;
        self.receive(&key, state);
        let companies = companies_query(client, api).await;
        self.receive_companies(companies);
    }

    /// Entries of the company selector, "All Companies" first
    pub fn company_options(&self) -> Vec<(Option<i64>, String)> {
        let mut options = vec![(None, "All Companies".to_owned())];
        if let Some(companies) = self.companies.data() {
            options.extend(companies.iter().map(|c| (Some(c.id), c.name.clone())));
        }
        options
    }

    pub fn view(&self) -> JobsView {
        match &self.jobs {
            QueryState::Idle | QueryState::Loading => JobsView::Loading,
            QueryState::Error(e) => JobsView::Error {
                message: e.to_string(),
            },
            QueryState::Success(data) if data.items.is_empty() => JobsView::Empty,
            QueryState::Success(data) => JobsView::List {
                cards: data.items.iter().map(JobCard::from).collect(),
            },
        }
    }

    /// e.g. `1,204 positions`
    pub fn header_count(&self) -> Option<String> {
        self.jobs
            .data()
            .map(|data| format!("{} positions", format_count(data.total)))
    }

    /// e.g. `Showing 30 of 1,204 jobs for "rust"` and `Page 2 of 41`
    pub fn results_meta(&self) -> Option<(String, String)> {
        let data = self.jobs.data()?;
        let search = self
            .filters
            .search()
            .map(|s| format!(" for \"{}\"", s))
            .unwrap_or_default();
        Some((
            format!(
                "Showing {} of {} jobs{}",
                data.items.len(),
                format_count(data.total),
                search
            ),
            format!("Page {} of {}", data.page, data.pages),
        ))
    }

    pub fn pagination(&self) -> Option<Pagination> {
        self.jobs.data().and_then(Pagination::for_page)
    }
}

impl Display for JobsPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.header_count() {
            Some(count) => writeln!(f, "Job Listings ({})", count)?,
            None => writeln!(f, "Job Listings")?,
        }
        writeln!(f, "Browse opportunities aggregated from multiple sources")?;
        let company = self
            .company_options()
            .into_iter()
            .find(|(id, _)| *id == self.filters.company_id())
            .map(|(_, name)| name)
            .unwrap_or_else(|| "All Companies".to_owned());
        writeln!(
            f,
            "search: {} | location: {} | company: {} | type: {}",
            self.filters.search().unwrap_or("-"),
            self.filters.location().unwrap_or("-"),
            company,
            self.filters.employment_type().unwrap_or("All Types"),
        )?;
        if let Some((count, page)) = self.results_meta() {
            writeln!(f, "{}    {}", count, page)?;
        }
        writeln!(f)?;
        let view = self.view();
        match &view {
            JobsView::Loading => writeln!(f, "Loading...")?,
            JobsView::Error { message } => {
                writeln!(f, "{}", view.title().unwrap_or_default())?;
                writeln!(f, "{}", message)?;
            }
            JobsView::Empty => {
                writeln!(f, "{}", view.title().unwrap_or_default())?;
                writeln!(f, "Try adjusting your search or filter criteria.")?;
            }
            JobsView::List { cards } => {
                for card in cards {
                    writeln!(f, "{}", card)?;
                    writeln!(f)?;
                }
            }
        }
        if let Some(pagination) = self.pagination() {
            let previous = if pagination.previous_enabled { "< Previous" } else { "  -" };
            let next = if pagination.next_enabled { "Next >" } else { "-" };
            writeln!(
                f,
                "{}    Page {} of {}    {}",
                previous, pagination.page, pagination.pages, next
            )?;
        }
        Ok(())
    }
}
