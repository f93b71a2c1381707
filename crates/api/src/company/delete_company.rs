use crate::{
    error::MpcError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use mpc_reservations_api_structs::delete_company::*;
use mpc_reservations_domain::{Company, ID};
use mpc_reservations_infra::MpcContext;

pub async fn delete_company_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<MpcContext>,
) -> Result<HttpResponse, MpcError> {
    let usecase = DeleteCompanyUseCase {
        company_id: path_params.company_id.clone(),
    };
    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse { success: true }))
        .map_err(MpcError::from)
}

#[derive(Debug)]
struct DeleteCompanyUseCase {
    company_id: ID,
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
impl UseCase for DeleteCompanyUseCase {
    type Response = Company;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteCompany";

    async fn execute(&mut self, ctx: &MpcContext) -> Result<Self::Response, Self::Error> {
        // Deleting an id that does not exist is not distinguished from
        // any other storage failure.
        match ctx.repos.companies.delete(&self.company_id).await {
            Some(company) => Ok(company),
            None => Err(UseCaseError::StorageError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::main]
    #[test]
    async fn it_deletes_the_company() {
        let ctx = MpcContext::create_inmemory();
        let company = Company::new("Acme");
        ctx.repos
            .companies
            .insert(&company)
            .await
            .expect("To insert company");

        let mut usecase = DeleteCompanyUseCase {
            company_id: company.id.clone(),
        };
        let deleted = usecase.execute(&ctx).await.expect("To delete company");
        assert_eq!(deleted.id, company.id);

        let companies = ctx
            .repos
            .companies
            .find_all()
            .await
            .expect("To list companies");
        assert!(companies.is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn unknown_company_is_a_storage_error() {
        let ctx = MpcContext::create_inmemory();

        let mut usecase = DeleteCompanyUseCase {
            company_id: Default::default(),
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::StorageError)
        ));
    }
}
