use super::ICompanyRepo;
use mpc_reservations_domain::{Company, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresCompanyRepo {
    pool: PgPool,
}

impl PostgresCompanyRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CompanyRaw {
    company_uid: Uuid,
    name: String,
}

impl Into<Company> for CompanyRaw {
    fn into(self) -> Company {
        Company {
            id: self.company_uid.into(),
            name: self.name,
        }
    }
}

#[async_trait::async_trait]
impl ICompanyRepo for PostgresCompanyRepo {
    async fn insert(&self, company: &Company) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO companies(company_uid, name)
            VALUES($1, $2)
            "#,
        )
        .bind(*company.id.inner_ref())
        .bind(&company.name)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_name(&self, company_id: &ID, name: &str) -> anyhow::Result<Company> {
        let company: CompanyRaw = sqlx::query_as(
            r#"
            UPDATE companies
            SET name = $2
            WHERE company_uid = $1
            RETURNING company_uid, name
            "#,
        )
        .bind(*company_id.inner_ref())
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(company.into())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Company>> {
        let companies: Vec<CompanyRaw> = sqlx::query_as(
            r#"
            SELECT company_uid, name FROM companies AS c
            ORDER BY c.name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(companies.into_iter().map(|c| c.into()).collect())
    }

    async fn delete(&self, company_id: &ID) -> Option<Company> {
        match sqlx::query_as::<_, CompanyRaw>(
            r#"
            DELETE FROM companies AS c
            WHERE c.company_uid = $1
            RETURNING company_uid, name
            "#,
        )
        .bind(*company_id.inner_ref())
        .fetch_one(&self.pool)
        .await
        {
            Ok(company) => Some(company.into()),
            Err(_) => None,
        }
    }
}
