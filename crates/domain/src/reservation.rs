use crate::company::Company;
use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};

/// A reservation of a call with a `Company`
#[derive(Debug, Clone)]
pub struct Reservation {
    pub id: ID,
    pub call_type: String,
    pub created_at: DateTime<Utc>,
    pub company_id: ID,
}

impl Reservation {
    pub fn new(call_type: &str, company_id: ID) -> Self {
        Self {
            id: Default::default(),
            call_type: call_type.into(),
            created_at: Utc::now(),
            company_id,
        }
    }
}

impl Entity for Reservation {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

/// A `Reservation` read together with the `Company` it belongs to
#[derive(Debug, Clone)]
pub struct ReservationWithCompany {
    pub id: ID,
    pub call_type: String,
    pub created_at: DateTime<Utc>,
    pub company: Company,
}

impl Entity for ReservationWithCompany {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
