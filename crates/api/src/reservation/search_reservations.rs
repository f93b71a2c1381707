use crate::{
    error::MpcError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use mpc_reservations_api_structs::search_reservations::*;
use mpc_reservations_domain::ReservationWithCompany;
use mpc_reservations_infra::MpcContext;

pub async fn search_reservations_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<MpcContext>,
) -> Result<HttpResponse, MpcError> {
    let usecase = SearchReservationsUseCase {
        call_type: query_params.0.call_type,
    };
    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Ok().json(APIResponse::new(usecase_res.reservations)))
        .map_err(MpcError::from)
}

#[derive(Debug)]
struct SearchReservationsUseCase {
    call_type: Option<String>,
}

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
impl UseCase for SearchReservationsUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "SearchReservations";

    async fn execute(&mut self, ctx: &MpcContext) -> Result<Self::Response, Self::Error> {
        let reservations = match &self.call_type {
            Some(call_type) => ctx.repos.reservations.find_by_call_type(call_type).await,
            None => ctx.repos.reservations.find_all().await,
        }
        .map_err(|_| UseCaseError::StorageError)?;

        Ok(UseCaseRes { reservations })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mpc_reservations_domain::{Company, Reservation};

    #[actix_web::main]
    #[test]
    async fn no_filter_returns_everything() {
        let ctx = MpcContext::create_inmemory();
        let company = Company::new("Acme");
        ctx.repos
            .companies
            .insert(&company)
            .await
            .expect("To insert company");
        for call_type in ["phone", "video"] {
            ctx.repos
                .reservations
                .insert(&Reservation::new(call_type, company.id.clone()))
                .await
                .expect("To insert reservation");
        }

        let mut usecase = SearchReservationsUseCase { call_type: None };
        let res = usecase.execute(&ctx).await.expect("To list reservations");
        assert_eq!(res.reservations.len(), 2);
    }

    #[actix_web::main]
    #[test]
    async fn filter_matches_call_type_exactly() {
        let ctx = MpcContext::create_inmemory();
        let company = Company::new("Acme");
        ctx.repos
            .companies
            .insert(&company)
            .await
            .expect("To insert company");
        for call_type in ["phone", "video"] {
            ctx.repos
                .reservations
                .insert(&Reservation::new(call_type, company.id.clone()))
                .await
                .expect("To insert reservation");
        }

        let mut usecase = SearchReservationsUseCase {
            call_type: Some("video".into()),
        };
        let res = usecase.execute(&ctx).await.expect("To filter reservations");
        assert_eq!(res.reservations.len(), 1);
        assert_eq!(res.reservations[0].call_type, "video");

        let mut usecase = SearchReservationsUseCase {
            call_type: Some("telegraph".into()),
        };
        let res = usecase.execute(&ctx).await.expect("To filter reservations");
        assert!(res.reservations.is_empty());
    }
}
