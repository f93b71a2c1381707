use super::ICompanyRepo;
use crate::repos::shared::inmemory_repo::*;
use mpc_reservations_domain::{Company, ID};

pub struct InMemoryCompanyRepo {
    companies: std::sync::Mutex<Vec<Company>>,
}

impl InMemoryCompanyRepo {
    pub fn new() -> Self {
        Self {
            companies: std::sync::Mutex::new(vec![]),
        }
    }

    pub(crate) fn get(&self, company_id: &ID) -> Option<Company> {
        find(company_id, &self.companies)
    }
}

#[async_trait::async_trait]
impl ICompanyRepo for InMemoryCompanyRepo {
    async fn insert(&self, company: &Company) -> anyhow::Result<()> {
        insert(company, &self.companies);
        Ok(())
    }

    async fn update_name(&self, company_id: &ID, name: &str) -> anyhow::Result<Company> {
        let mut company = find(company_id, &self.companies)
            .ok_or_else(|| anyhow::anyhow!("No company with id: {}", company_id))?;
        company.name = name.into();
        save(&company, &self.companies);

        Ok(company)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Company>> {
        let mut companies = find_by(&self.companies, |_| true);
        companies.sort_by(|c1, c2| c1.name.cmp(&c2.name));

        Ok(companies)
    }

    async fn delete(&self, company_id: &ID) -> Option<Company> {
        delete(company_id, &self.companies)
    }
}
