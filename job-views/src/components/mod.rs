mod company_card;
mod job_card;

pub use company_card::{CompanyAvatar, CompanyCard};
pub use job_card::{Badge, JobCard};
