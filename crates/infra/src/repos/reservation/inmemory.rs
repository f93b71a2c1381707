use super::IReservationRepo;
use crate::repos::company::InMemoryCompanyRepo;
use crate::repos::shared::inmemory_repo::*;
use mpc_reservations_domain::{Reservation, ReservationWithCompany, ID};
use std::sync::Arc;

pub struct InMemoryReservationRepo {
    reservations: std::sync::Mutex<Vec<Reservation>>,
    // The company join that postgres does in SQL
    companies: Arc<InMemoryCompanyRepo>,
}

impl InMemoryReservationRepo {
    pub fn new(companies: Arc<InMemoryCompanyRepo>) -> Self {
        Self {
            reservations: std::sync::Mutex::new(vec![]),
            companies,
        }
    }

    fn with_company(&self, reservation: Reservation) -> Option<ReservationWithCompany> {
        let company = self.companies.get(&reservation.company_id)?;
        Some(ReservationWithCompany {
            id: reservation.id,
            call_type: reservation.call_type,
            created_at: reservation.created_at,
            company,
        })
    }

    fn newest_first(mut reservations: Vec<Reservation>) -> Vec<Reservation> {
        reservations.sort_by(|r1, r2| r2.created_at.cmp(&r1.created_at));
        reservations
    }
}

#[async_trait::async_trait]
impl IReservationRepo for InMemoryReservationRepo {
    async fn insert(&self, reservation: &Reservation) -> anyhow::Result<()> {
        insert(reservation, &self.reservations);
        Ok(())
    }

    async fn find(&self, reservation_id: &ID) -> anyhow::Result<Option<ReservationWithCompany>> {
        let reservation = find(reservation_id, &self.reservations);
        Ok(reservation.and_then(|r| self.with_company(r)))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<ReservationWithCompany>> {
        let reservations = Self::newest_first(find_by(&self.reservations, |_| true));
        Ok(reservations
            .into_iter()
            .filter_map(|r| self.with_company(r))
            .collect())
    }

    async fn find_by_call_type(
        &self,
        call_type: &str,
    ) -> anyhow::Result<Vec<ReservationWithCompany>> {
        let reservations = Self::newest_first(find_by(&self.reservations, |r| {
            r.call_type == call_type
        }));
        Ok(reservations
            .into_iter()
            .filter_map(|r| self.with_company(r))
            .collect())
    }
}
