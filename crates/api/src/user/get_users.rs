use crate::{
    error::MpcError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use mpc_reservations_api_structs::get_users::*;
use mpc_reservations_domain::User;
use mpc_reservations_infra::MpcContext;

pub async fn get_users_controller(ctx: web::Data<MpcContext>) -> Result<HttpResponse, MpcError> {
    let usecase = GetUsersUseCase {};
    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Ok().json(APIResponse::new(usecase_res.users)))
        .map_err(MpcError::from)
}

#[derive(Debug)]
struct GetUsersUseCase {}

#[derive(Debug)]
struct UseCaseRes {
    pub users: Vec<User>,
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
impl UseCase for GetUsersUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "GetUsers";

    async fn execute(&mut self, ctx: &MpcContext) -> Result<Self::Response, Self::Error> {
        let users = ctx
            .repos
            .users
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(UseCaseRes { users })
    }
}
