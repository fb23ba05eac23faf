// src/db/finance_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::finance::{
        Category, CategoryKind, MonthEntry, Transaction, TransactionKind, TransactionPayload,
        TransactionStatus, TransactionWithCategory,
    },
};

// As duas tabelas têm o mesmo formato; o `TransactionKind` escolhe qual.
fn table(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Revenue => "revenues",
        TransactionKind::Expense => "expenses",
    }
}

#[derive(Clone)]
pub struct FinanceRepository {
    pool: PgPool,
}

impl FinanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  CATEGORIAS
    // =========================================================================

    pub async fn list_categories(
        &self,
        kind: Option<CategoryKind>,
    ) -> Result<Vec<Category>, AppError> {
        let categories = match kind {
            Some(kind) => {
                sqlx::query_as::<_, Category>(
                    "SELECT * FROM categories WHERE kind = $1 ORDER BY name ASC",
                )
                .bind(kind)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Category>("SELECT * FROM categories ORDER BY name ASC")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(categories)
    }

    // =========================================================================
    //  RECEITAS / DESPESAS (CRUD)
    // =========================================================================

    pub async fn create(
        &self,
        kind: TransactionKind,
        company_id: Uuid,
        user_id: Option<Uuid>,
        payload: &TransactionPayload,
    ) -> Result<Transaction, AppError> {
        let sql = format!(
            r#"
            INSERT INTO {} (company_id, user_id, description, amount, date, status, category_id, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
            table(kind)
        );

        let transaction = sqlx::query_as::<_, Transaction>(&sql)
            .bind(company_id)
            .bind(user_id)
            .bind(&payload.description)
            .bind(payload.amount)
            .bind(payload.date)
            .bind(payload.status.unwrap_or(TransactionStatus::Pendente))
            .bind(payload.category_id)
            .bind(&payload.notes)
            .fetch_one(&self.pool)
            .await?;

        Ok(transaction)
    }

    // Listagem com o nome da categoria resolvido, mais recentes primeiro.
    // O filtro de período é opcional.
    pub async fn list(
        &self,
        kind: TransactionKind,
        company_id: Uuid,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Vec<TransactionWithCategory>, AppError> {
        let select = format!(
            r#"
            SELECT t.id, t.company_id, t.user_id, t.description, t.amount, t.date,
                   t.status, t.category_id, c.name AS category_name, t.notes,
                   t.created_at, t.updated_at
            FROM {} t
            LEFT JOIN categories c ON c.id = t.category_id
            WHERE t.company_id = $1
            "#,
            table(kind)
        );

        let rows = match range {
            Some((start, end)) => {
                let sql = format!(
                    "{select} AND t.date >= $2 AND t.date <= $3 ORDER BY t.date DESC, t.created_at DESC"
                );
                sqlx::query_as::<_, TransactionWithCategory>(&sql)
                    .bind(company_id)
                    .bind(start)
                    .bind(end)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let sql = format!("{select} ORDER BY t.date DESC, t.created_at DESC");
                sqlx::query_as::<_, TransactionWithCategory>(&sql)
                    .bind(company_id)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(rows)
    }

    pub async fn find_by_id(
        &self,
        kind: TransactionKind,
        company_id: Uuid,
        id: Uuid,
    ) -> Result<Option<Transaction>, AppError> {
        let sql = format!(
            "SELECT * FROM {} WHERE id = $1 AND company_id = $2",
            table(kind)
        );

        let transaction = sqlx::query_as::<_, Transaction>(&sql)
            .bind(id)
            .bind(company_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(transaction)
    }

    pub async fn update(
        &self,
        kind: TransactionKind,
        company_id: Uuid,
        id: Uuid,
        payload: &TransactionPayload,
    ) -> Result<Transaction, AppError> {
        // Status ausente no payload mantém o status atual da linha.
        let sql = format!(
            r#"
            UPDATE {}
            SET description = $3, amount = $4, date = $5,
                status = COALESCE($6, status), category_id = $7, notes = $8,
                updated_at = now()
            WHERE id = $1 AND company_id = $2
            RETURNING *
            "#,
            table(kind)
        );

        sqlx::query_as::<_, Transaction>(&sql)
            .bind(id)
            .bind(company_id)
            .bind(&payload.description)
            .bind(payload.amount)
            .bind(payload.date)
            .bind(payload.status)
            .bind(payload.category_id)
            .bind(&payload.notes)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn delete(
        &self,
        kind: TransactionKind,
        company_id: Uuid,
        id: Uuid,
    ) -> Result<u64, AppError> {
        let sql = format!(
            "DELETE FROM {} WHERE id = $1 AND company_id = $2",
            table(kind)
        );

        let result = sqlx::query(&sql)
            .bind(id)
            .bind(company_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Baixa de pendência: só altera linhas ainda 'pendente'.
    pub async fn settle_pending(
        &self,
        kind: TransactionKind,
        company_id: Uuid,
        id: Uuid,
        new_status: TransactionStatus,
    ) -> Result<u64, AppError> {
        let sql = format!(
            r#"
            UPDATE {}
            SET status = $3, updated_at = now()
            WHERE id = $1 AND company_id = $2 AND status = 'pendente'
            "#,
            table(kind)
        );

        let result = sqlx::query(&sql)
            .bind(id)
            .bind(company_id)
            .bind(new_status)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    // Pendências mais antigas primeiro.
    pub async fn list_pending(
        &self,
        kind: TransactionKind,
        company_id: Uuid,
    ) -> Result<Vec<TransactionWithCategory>, AppError> {
        let sql = format!(
            r#"
            SELECT t.id, t.company_id, t.user_id, t.description, t.amount, t.date,
                   t.status, t.category_id, c.name AS category_name, t.notes,
                   t.created_at, t.updated_at
            FROM {} t
            LEFT JOIN categories c ON c.id = t.category_id
            WHERE t.company_id = $1 AND t.status = 'pendente'
            ORDER BY t.date ASC
            "#,
            table(kind)
        );

        let rows = sqlx::query_as::<_, TransactionWithCategory>(&sql)
            .bind(company_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    // =========================================================================
    //  CONSULTAS DO GERADOR DE "SALDO ANTERIOR"
    // =========================================================================

    // Descrição e valor de todas as linhas do período (sem filtro de status).
    pub async fn month_entries(
        &self,
        kind: TransactionKind,
        company_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<MonthEntry>, AppError> {
        let sql = format!(
            "SELECT description, amount FROM {} WHERE company_id = $1 AND date >= $2 AND date <= $3",
            table(kind)
        );

        let entries = sqlx::query_as::<_, MonthEntry>(&sql)
            .bind(company_id)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await?;

        Ok(entries)
    }

    /// Já existe "Saldo anterior" nesta empresa na data informada?
    pub async fn saldo_exists(
        &self,
        company_id: Uuid,
        date: NaiveDate,
    ) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM revenues
                WHERE company_id = $1 AND date = $2 AND description ILIKE '%saldo anterior%'
            )
            "#,
        )
        .bind(company_id)
        .bind(date)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    // Insere a linha de transporte de saldo, já como 'recebido'.
    pub async fn insert_saldo(
        &self,
        company_id: Uuid,
        user_id: Option<Uuid>,
        date: NaiveDate,
        description: &str,
        amount: Decimal,
    ) -> Result<Transaction, AppError> {
        let transaction = sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO revenues (company_id, user_id, description, amount, date, status)
            VALUES ($1, $2, $3, $4, $5, 'recebido')
            RETURNING *
            "#,
        )
        .bind(company_id)
        .bind(user_id)
        .bind(description)
        .bind(amount)
        .bind(date)
        .fetch_one(&self.pool)
        .await?;

        Ok(transaction)
    }

    // =========================================================================
    //  APOIO AO PAINEL / FLUXO DE CAIXA
    // =========================================================================

    pub async fn daily_amounts(
        &self,
        kind: TransactionKind,
        company_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<(NaiveDate, Decimal)>, AppError> {
        let sql = format!(
            "SELECT date, amount FROM {} WHERE company_id = $1 AND date >= $2 AND date <= $3",
            table(kind)
        );

        let rows = sqlx::query_as::<_, (NaiveDate, Decimal)>(&sql)
            .bind(company_id)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn recent(
        &self,
        kind: TransactionKind,
        company_id: Uuid,
        limit: i64,
    ) -> Result<Vec<(Uuid, String, Decimal, NaiveDate)>, AppError> {
        let sql = format!(
            "SELECT id, description, amount, date FROM {} WHERE company_id = $1 ORDER BY date DESC LIMIT $2",
            table(kind)
        );

        let rows = sqlx::query_as::<_, (Uuid, String, Decimal, NaiveDate)>(&sql)
            .bind(company_id)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Apaga todos os lançamentos da empresa. Usado pela exclusão em cascata,
    /// por isso aceita um executor (a transação).
    pub async fn delete_all_by_company<'e, E>(
        &self,
        executor: E,
        kind: TransactionKind,
        company_id: Uuid,
    ) -> Result<u64, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let sql = format!("DELETE FROM {} WHERE company_id = $1", table(kind));

        let result = sqlx::query(&sql).bind(company_id).execute(executor).await?;

        Ok(result.rows_affected())
    }
}
