use std::fmt::{self, Display};

use job_api::{ApiClient, Company};
use job_query::{companies_query, QueryClient, QueryState};

use crate::components::CompanyCard;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompaniesView {
    Loading,
    Error { message: String },
    /// `searching` tells "nothing matches" apart from "nothing crawled yet"
    Empty { searching: bool },
    List { cards: Vec<CompanyCard> },
}

impl CompaniesView {
    pub fn title(&self) -> Option<&'static str> {
        match self {
            CompaniesView::Error { .. } => Some("Failed to load companies"),
            CompaniesView::Empty { searching: true } => Some("No companies found"),
            CompaniesView::Empty { searching: false } => Some("No companies yet"),
            _ => None,
        }
    }

    pub fn body(&self) -> Option<&'static str> {
        match self {
            CompaniesView::Empty { searching: true } => Some("Try a different search term."),
            CompaniesView::Empty { searching: false } => {
                Some("Run the crawler to populate company data.")
            }
            _ => None,
        }
    }
}

/// Company listing, searched locally over the already fetched list.
/// Typing never triggers a request.
pub struct CompaniesPage {
    search: String,
    companies: QueryState<Vec<Company>>,
}

impl Default for CompaniesPage {
    fn default() -> Self {
        Self {
            search: String::new(),
            companies: QueryState::Loading,
        }
    }
}

impl CompaniesPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, input: &str) {
        self.search = input.to_owned();
    }

    pub fn receive(&mut self, state: QueryState<Vec<Company>>) {
        self.companies = state;
    }

    pub async fn load(&mut self, client: &QueryClient, api: &ApiClient) {
        let state = companies_query(client, api).await;
        self.receive(state);
    }

    fn state(&self) -> &QueryState<Vec<Company>> {
        &self.companies
    }

    /// Companies whose name contains the search term, ignoring case
    pub fn filtered(&self) -> Option<Vec<&Company>> {
        let companies = self.state().data()?;
        let needle = self.search.to_lowercase();
        Some(
            companies
                .iter()
                .filter(|c| c.name.to_lowercase().contains(&needle))
                .collect(),
        )
    }

    pub fn view(&self) -> CompaniesView {
        match self.state() {
            QueryState::Idle | QueryState::Loading => CompaniesView::Loading,
            QueryState::Error(e) => CompaniesView::Error {
                message: e.to_string(),
            },
            QueryState::Success(_) => {
                let filtered = self.filtered().unwrap_or_default();
                if filtered.is_empty() {
                    CompaniesView::Empty {
                        searching: !self.search.is_empty(),
                    }
                } else {
                    CompaniesView::List {
                        cards: filtered.into_iter().map(CompanyCard::from).collect(),
                    }
                }
            }
        }
    }

    /// e.g. `12 sources`
    pub fn header_count(&self) -> Option<String> {
        self.state()
            .data()
            .map(|companies| format!("{} sources", companies.len()))
    }

    /// e.g. `1 company matching "acme"`
    pub fn results_meta(&self) -> Option<String> {
        let filtered = self.filtered()?;
        let noun = if filtered.len() == 1 { "company" } else { "companies" };
        let matching = if self.search.is_empty() {
            String::new()
        } else {
            format!(" matching \"{}\"", self.search)
        };
        Some(format!("{} {}{}", filtered.len(), noun, matching))
    }
}

impl Display for CompaniesPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.header_count() {
            Some(count) => writeln!(f, "Companies ({})", count)?,
            None => writeln!(f, "Companies")?,
        }
        writeln!(f, "Organizations with active job listings in the aggregator")?;
        if let Some(meta) = self.results_meta() {
            writeln!(f, "{}", meta)?;
        }
        writeln!(f)?;
        let view = self.view();
        match &view {
            CompaniesView::Loading => writeln!(f, "Loading...")?,
            CompaniesView::Error { message } => {
                writeln!(f, "{}", view.title().unwrap_or_default())?;
                writeln!(f, "{}", message)?;
            }
            CompaniesView::Empty { .. } => {
                writeln!(f, "{}", view.title().unwrap_or_default())?;
                writeln!(f, "{}", view.body().unwrap_or_default())?;
            }
            CompaniesView::List { cards } => {
                for card in cards {
                    writeln!(f, "{}", card)?;
                }
            }
        }
        Ok(())
    }
}
