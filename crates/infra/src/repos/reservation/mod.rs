mod inmemory;
mod postgres;

use mpc_reservations_domain::{Reservation, ReservationWithCompany, ID};

pub use inmemory::InMemoryReservationRepo;
pub use postgres::PostgresReservationRepo;

#[async_trait::async_trait]
pub trait IReservationRepo: Send + Sync {
    async fn insert(&self, reservation: &Reservation) -> anyhow::Result<()>;
    async fn find(&self, reservation_id: &ID) -> anyhow::Result<Option<ReservationWithCompany>>;
    /// All reservations with their company, newest first
    async fn find_all(&self) -> anyhow::Result<Vec<ReservationWithCompany>>;
    /// Reservations matching the given call type exactly, newest first
    async fn find_by_call_type(&self, call_type: &str)
        -> anyhow::Result<Vec<ReservationWithCompany>>;
}
