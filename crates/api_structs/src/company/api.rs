use mpc_reservations_domain::{Company, ID};
use serde::{Deserialize, Serialize};

use crate::dtos::CompanyDTO;

pub mod get_companies {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub companies: Vec<CompanyDTO>,
    }

    impl APIResponse {
        pub fn new(companies: Vec<Company>) -> Self {
            Self {
                companies: companies.into_iter().map(CompanyDTO::new).collect(),
            }
        }
    }
}

pub mod update_company {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
    }

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub company_id: ID,
    }

    pub type APIResponse = CompanyDTO;
}

pub mod delete_company {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub company_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub success: bool,
    }
}
