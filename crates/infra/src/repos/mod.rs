mod company;
mod reservation;
mod shared;
mod user;

use company::{ICompanyRepo, InMemoryCompanyRepo, PostgresCompanyRepo};
use reservation::{IReservationRepo, InMemoryReservationRepo, PostgresReservationRepo};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use user::{IUserRepo, InMemoryUserRepo, PostgresUserRepo};

#[derive(Clone)]
pub struct Repos {
    pub companies: Arc<dyn ICompanyRepo>,
    pub reservations: Arc<dyn IReservationRepo>,
    pub users: Arc<dyn IUserRepo>,
}

impl Repos {
    pub async fn create_postgres(connection_string: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(connection_string)
            .await?;

        Ok(Self {
            companies: Arc::new(PostgresCompanyRepo::new(pool.clone())),
            reservations: Arc::new(PostgresReservationRepo::new(pool.clone())),
            users: Arc::new(PostgresUserRepo::new(pool)),
        })
    }

    pub fn create_inmemory() -> Self {
        let companies = Arc::new(InMemoryCompanyRepo::new());

        Self {
            companies: companies.clone(),
            reservations: Arc::new(InMemoryReservationRepo::new(companies)),
            users: Arc::new(InMemoryUserRepo::new()),
        }
    }
}
