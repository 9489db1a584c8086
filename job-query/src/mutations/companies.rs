use async_trait::async_trait;
use job_api::{ApiClient, Company, CompanyCreate};

use crate::queries::COMPANIES;
use crate::{Mutation, QueryKey};

/// `POST /companies`, invalidates every companies query
#[derive(Debug, Default, Clone, Copy)]
pub struct CreateCompanyMutation;

#[async_trait]
impl Mutation for CreateCompanyMutation {
    type Input = CompanyCreate;
    type Output = Company;

    fn invalidates(&self) -> Vec<QueryKey> {
        vec![QueryKey::entity(COMPANIES)]
    }

    async fn mutate(&self, api: &ApiClient, input: &CompanyCreate) -> job_api::Result<Company> {
        let company = api.create_company(input).await?;
        log::info!("Created company {} ({})", company.id, company.name);
        Ok(company)
    }
}
