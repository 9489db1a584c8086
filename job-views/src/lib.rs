pub mod components;
pub mod display;
pub mod pages;
#[cfg(test)]
pub(crate) mod testing;

pub use components::{CompanyCard, JobCard};
pub use pages::{CompaniesPage, CompaniesView, JobFilterState, JobsPage, JobsView, Pagination};
