// src/db/company_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::company::Company};

#[derive(Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

// Campos editáveis de uma empresa (criação e atualização usam o mesmo conjunto).
pub struct CompanyFields<'a> {
    pub name: &'a str,
    pub cnpj: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub address: Option<&'a str>,
    pub city: Option<&'a str>,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Verifica se a empresa pertence ao usuário.
    /// Esta é a verificação de autorização mais importante do serviço.
    pub async fn check_company_owner(
        &self,
        user_id: Uuid,
        company_id: Uuid,
    ) -> Result<bool, AppError> {
        // SELECT EXISTS para a consulta mais rápida possível.
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM companies WHERE id = $1 AND user_id = $2)",
        )
        .bind(company_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    pub async fn create(
        &self,
        user_id: Uuid,
        fields: CompanyFields<'_>,
    ) -> Result<Company, AppError> {
        let company = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (user_id, name, cnpj, phone, email, address, city)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(fields.name)
        .bind(fields.cnpj)
        .bind(fields.phone)
        .bind(fields.email)
        .bind(fields.address)
        .bind(fields.city)
        .fetch_one(&self.pool)
        .await?;

        Ok(company)
    }

    // Empresas do usuário, mais recentes primeiro.
    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Company>, AppError> {
        let companies = sqlx::query_as::<_, Company>(
            "SELECT * FROM companies WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(companies)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>, AppError> {
        let company = sqlx::query_as::<_, Company>("SELECT * FROM companies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(company)
    }

    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        fields: CompanyFields<'_>,
    ) -> Result<Company, AppError> {
        sqlx::query_as::<_, Company>(
            r#"
            UPDATE companies
            SET name = $3, cnpj = $4, phone = $5, email = $6, address = $7, city = $8
            WHERE id = $1 AND user_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(fields.name)
        .bind(fields.cnpj)
        .bind(fields.phone)
        .bind(fields.email)
        .bind(fields.address)
        .bind(fields.city)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::CompanyNotFound)
    }

    /// Remove a empresa. Aceita um executor para participar da transação
    /// que também apaga receitas e despesas.
    pub async fn delete<'e, E>(&self, executor: E, id: Uuid, user_id: Uuid) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
