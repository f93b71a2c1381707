use mpc_reservations_domain::{ReservationWithCompany, ID};
use serde::{Deserialize, Serialize};

use crate::dtos::ReservationDTO;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationsResponse {
    pub reservations: Vec<ReservationDTO>,
}

impl ReservationsResponse {
    pub fn new(reservations: Vec<ReservationWithCompany>) -> Self {
        Self {
            reservations: reservations.into_iter().map(ReservationDTO::new).collect(),
        }
    }
}

pub mod get_reservation {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        #[serde(default)]
        pub reservation_id: Option<ID>,
    }

    pub type APIResponse = ReservationDTO;
}

pub mod get_reservations {
    use super::*;

    pub type APIResponse = ReservationsResponse;
}

pub mod search_reservations {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        #[serde(default)]
        pub call_type: Option<String>,
    }

    pub type APIResponse = ReservationsResponse;
}
