mod inmemory;
mod postgres;

use mpc_reservations_domain::{Company, ID};

pub use inmemory::InMemoryCompanyRepo;
pub use postgres::PostgresCompanyRepo;

#[async_trait::async_trait]
pub trait ICompanyRepo: Send + Sync {
    async fn insert(&self, company: &Company) -> anyhow::Result<()>;
    /// Overwrites the name of the matching company. Fails when there is
    /// no company with the given id, like any other storage failure.
    async fn update_name(&self, company_id: &ID, name: &str) -> anyhow::Result<Company>;
    async fn find_all(&self) -> anyhow::Result<Vec<Company>>;
    async fn delete(&self, company_id: &ID) -> Option<Company>;
}
