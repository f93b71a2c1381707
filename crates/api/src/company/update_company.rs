use crate::{
    error::MpcError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use mpc_reservations_api_structs::update_company::*;
use mpc_reservations_domain::{Company, ID};
use mpc_reservations_infra::MpcContext;

pub async fn update_company_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<MpcContext>,
) -> Result<HttpResponse, MpcError> {
    let usecase = UpdateCompanyUseCase {
        company_id: path_params.company_id.clone(),
        name: body.0.name,
    };
    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Ok().json(APIResponse::new(usecase_res.company)))
        .map_err(MpcError::from)
}

#[derive(Debug)]
struct UpdateCompanyUseCase {
    company_id: ID,
    name: String,
}

#[derive(Debug)]
struct UseCaseRes {
    pub company: Company,
}

#[derive(Debug)]
enum UseCaseError {
    EmptyName,
    StorageError,
}

impl From<UseCaseError> for MpcError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmptyName => {
                Self::BadClientData("Company name must be a non-empty string".into())
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateCompanyUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateCompany";

    async fn execute(&mut self, ctx: &MpcContext) -> Result<Self::Response, Self::Error> {
        if self.name.trim().is_empty() {
            return Err(UseCaseError::EmptyName);
        }

        // Unknown company ids are not checked up front; the storage
        // failure of the update itself is what surfaces to the client.
        let company = ctx
            .repos
            .companies
            .update_name(&self.company_id, &self.name)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(UseCaseRes { company })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::main]
    #[test]
    async fn it_rejects_empty_name() {
        let ctx = MpcContext::create_inmemory();
        let company = Company::new("Acme");
        ctx.repos
            .companies
            .insert(&company)
            .await
            .expect("To insert company");

        for bad_name in ["", " ", "\t  \n"] {
            let mut usecase = UpdateCompanyUseCase {
                company_id: company.id.clone(),
                name: bad_name.into(),
            };
            assert!(matches!(
                usecase.execute(&ctx).await,
                Err(UseCaseError::EmptyName)
            ));
        }
    }

    #[actix_web::main]
    #[test]
    async fn it_updates_the_name() {
        let ctx = MpcContext::create_inmemory();
        let company = Company::new("Old");
        ctx.repos
            .companies
            .insert(&company)
            .await
            .expect("To insert company");

        let mut usecase = UpdateCompanyUseCase {
            company_id: company.id.clone(),
            name: "Acme".into(),
        };
        let res = usecase.execute(&ctx).await.expect("To update company");
        assert_eq!(res.company.id, company.id);
        assert_eq!(res.company.name, "Acme");
    }

    #[actix_web::main]
    #[test]
    async fn unknown_company_is_a_storage_error() {
        let ctx = MpcContext::create_inmemory();

        let mut usecase = UpdateCompanyUseCase {
            company_id: Default::default(),
            name: "Acme".into(),
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::StorageError)
        ));
    }
}
