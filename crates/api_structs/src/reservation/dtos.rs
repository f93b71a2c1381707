use chrono::{DateTime, Utc};
use mpc_reservations_domain::{ReservationWithCompany, ID};
use serde::{Deserialize, Serialize};

use crate::dtos::CompanyDTO;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDTO {
    pub id: ID,
    pub call_type: String,
    pub created_at: DateTime<Utc>,
    pub company_id: ID,
    pub company: CompanyDTO,
}

impl ReservationDTO {
    pub fn new(reservation: ReservationWithCompany) -> Self {
        Self {
            id: reservation.id,
            call_type: reservation.call_type,
            created_at: reservation.created_at,
            company_id: reservation.company.id.clone(),
            company: CompanyDTO::new(reservation.company),
        }
    }
}
