use crate::{
    error::MpcError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use mpc_reservations_api_structs::get_companies::*;
use mpc_reservations_domain::Company;
use mpc_reservations_infra::MpcContext;

pub async fn get_companies_controller(
    ctx: web::Data<MpcContext>,
) -> Result<HttpResponse, MpcError> {
    let usecase = GetCompaniesUseCase {};
    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Ok().json(APIResponse::new(usecase_res.companies)))
        .map_err(MpcError::from)
}

#[derive(Debug)]
struct GetCompaniesUseCase {}

#[derive(Debug)]
struct UseCaseRes {
    pub companies: Vec<Company>,
}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for MpcError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetCompaniesUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCompanies";

    async fn execute(&mut self, ctx: &MpcContext) -> Result<Self::Response, Self::Error> {
        let companies = ctx
            .repos
            .companies
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(UseCaseRes { companies })
    }
}
