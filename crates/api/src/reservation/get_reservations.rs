use crate::{
    error::MpcError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use mpc_reservations_api_structs::get_reservations::*;
use mpc_reservations_domain::ReservationWithCompany;
use mpc_reservations_infra::MpcContext;

pub async fn get_reservations_controller(
    ctx: web::Data<MpcContext>,
) -> Result<HttpResponse, MpcError> {
    let usecase = GetReservationsUseCase {};
    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Ok().json(APIResponse::new(usecase_res.reservations)))
        .map_err(MpcError::from)
}

#[derive(Debug)]
struct GetReservationsUseCase {}

#[derive(Debug)]
struct UseCaseRes {
    pub reservations: Vec<ReservationWithCompany>,
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
impl UseCase for GetReservationsUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "GetReservations";

    async fn execute(&mut self, ctx: &MpcContext) -> Result<Self::Response, Self::Error> {
        let reservations = ctx
            .repos
            .reservations
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(UseCaseRes { reservations })
    }
}
