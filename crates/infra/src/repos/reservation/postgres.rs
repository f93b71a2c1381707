use super::IReservationRepo;
use chrono::{DateTime, Utc};
use mpc_reservations_domain::{Company, Reservation, ReservationWithCompany, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresReservationRepo {
    pool: PgPool,
}

impl PostgresReservationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReservationWithCompanyRaw {
    reservation_uid: Uuid,
    call_type: String,
    created_at: DateTime<Utc>,
    company_uid: Uuid,
    company_name: String,
}

impl Into<ReservationWithCompany> for ReservationWithCompanyRaw {
    fn into(self) -> ReservationWithCompany {
        ReservationWithCompany {
            id: self.reservation_uid.into(),
            call_type: self.call_type,
            created_at: self.created_at,
            company: Company {
                id: self.company_uid.into(),
                name: self.company_name,
            },
        }
    }
}

#[async_trait::async_trait]
impl IReservationRepo for PostgresReservationRepo {
    async fn insert(&self, reservation: &Reservation) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO reservations(reservation_uid, call_type, created_at, company_uid)
            VALUES($1, $2, $3, $4)
            "#,
        )
        .bind(*reservation.id.inner_ref())
        .bind(&reservation.call_type)
        .bind(reservation.created_at)
        .bind(*reservation.company_id.inner_ref())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, reservation_id: &ID) -> anyhow::Result<Option<ReservationWithCompany>> {
        let reservation: Option<ReservationWithCompanyRaw> = sqlx::query_as(
            r#"
            SELECT r.reservation_uid, r.call_type, r.created_at, c.company_uid, c.name AS company_name
            FROM reservations AS r
            INNER JOIN companies AS c ON c.company_uid = r.company_uid
            WHERE r.reservation_uid = $1
            "#,
        )
        .bind(*reservation_id.inner_ref())
        .fetch_optional(&self.pool)
        .await?;

        Ok(reservation.map(|r| r.into()))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<ReservationWithCompany>> {
        let reservations: Vec<ReservationWithCompanyRaw> = sqlx::query_as(
            r#"
            SELECT r.reservation_uid, r.call_type, r.created_at, c.company_uid, c.name AS company_name
            FROM reservations AS r
            INNER JOIN companies AS c ON c.company_uid = r.company_uid
            ORDER BY r.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(reservations.into_iter().map(|r| r.into()).collect())
    }

    async fn find_by_call_type(
        &self,
        call_type: &str,
    ) -> anyhow::Result<Vec<ReservationWithCompany>> {
        let reservations: Vec<ReservationWithCompanyRaw> = sqlx::query_as(
            r#"
            SELECT r.reservation_uid, r.call_type, r.created_at, c.company_uid, c.name AS company_name
            FROM reservations AS r
            INNER JOIN companies AS c ON c.company_uid = r.company_uid
            WHERE r.call_type = $1
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(call_type)
        .fetch_all(&self.pool)
        .await?;

        Ok(reservations.into_iter().map(|r| r.into()).collect())
    }
}
