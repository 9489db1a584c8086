mod companies;
mod jobs;

pub use companies::{CompaniesPage, CompaniesView};
pub use jobs::{JobFilterState, JobsPage, JobsView, Pagination, EMPLOYMENT_TYPES};
