use crate::{
    error::MpcError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use mpc_reservations_api_structs::get_reservation::*;
use mpc_reservations_domain::{ReservationWithCompany, ID};
use mpc_reservations_infra::MpcContext;

pub async fn get_reservation_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<MpcContext>,
) -> Result<HttpResponse, MpcError> {
    let reservation_id = query_params.0.reservation_id.ok_or_else(|| {
        MpcError::BadClientData("Missing query parameter `reservationId`".into())
    })?;

    let usecase = GetReservationUseCase { reservation_id };
    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Ok().json(APIResponse::new(usecase_res.reservation)))
        .map_err(MpcError::from)
}

#[derive(Debug)]
struct GetReservationUseCase {
    reservation_id: ID,
}

#[derive(Debug)]
struct UseCaseRes {
    pub reservation: ReservationWithCompany,
}

#[derive(Debug)]
enum UseCaseError {
    ReservationNotFound(ID),
    StorageError,
}

impl From<UseCaseError> for MpcError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::ReservationNotFound(id) => {
                Self::NotFound(format!("A reservation with id: {}, was not found.", id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetReservationUseCase {
    type Response = UseCaseRes;

    type Error = UseCaseError;

    const NAME: &'static str = "GetReservation";

    async fn execute(&mut self, ctx: &MpcContext) -> Result<Self::Response, Self::Error> {
        let reservation = ctx
            .repos
            .reservations
            .find(&self.reservation_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        match reservation {
            Some(reservation) => Ok(UseCaseRes { reservation }),
            None => Err(UseCaseError::ReservationNotFound(
                self.reservation_id.clone(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mpc_reservations_domain::{Company, Reservation};

    #[actix_web::main]
    #[test]
    async fn it_finds_reservation_with_company() {
        let ctx = MpcContext::create_inmemory();
        let company = Company::new("Acme");
        ctx.repos
            .companies
            .insert(&company)
            .await
            .expect("To insert company");
        let reservation = Reservation::new("phone", company.id.clone());
        ctx.repos
            .reservations
            .insert(&reservation)
            .await
            .expect("To insert reservation");

        let mut usecase = GetReservationUseCase {
            reservation_id: reservation.id.clone(),
        };
        let res = usecase.execute(&ctx).await.expect("To find reservation");
        assert_eq!(res.reservation.id, reservation.id);
        assert_eq!(res.reservation.company.name, "Acme");
    }

    #[actix_web::main]
    #[test]
    async fn unknown_reservation_is_not_found() {
        let ctx = MpcContext::create_inmemory();

        let mut usecase = GetReservationUseCase {
            reservation_id: Default::default(),
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::ReservationNotFound(_))
        ));
    }
}
