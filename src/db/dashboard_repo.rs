// src/db/dashboard_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{finance::TransactionKind, reports::CategoryTotal},
};

fn table(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Revenue => "revenues",
        TransactionKind::Expense => "expenses",
    }
}

// Consultas de agregação que alimentam o painel e os relatórios.
#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Total do período, sem filtro de status.
    pub async fn sum_in_range(
        &self,
        kind: TransactionKind,
        company_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Decimal, AppError> {
        let sql = format!(
            "SELECT COALESCE(SUM(amount), 0) FROM {} WHERE company_id = $1 AND date >= $2 AND date <= $3",
            table(kind)
        );

        let total = sqlx::query_scalar::<_, Decimal>(&sql)
            .bind(company_id)
            .bind(start)
            .bind(end)
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    // Totais por categoria; linhas sem categoria entram como 'Sem categoria'.
    pub async fn category_totals(
        &self,
        kind: TransactionKind,
        company_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<CategoryTotal>, AppError> {
        let sql = format!(
            r#"
            SELECT COALESCE(c.name, 'Sem categoria') AS name, SUM(t.amount) AS value
            FROM {} t
            LEFT JOIN categories c ON c.id = t.category_id
            WHERE t.company_id = $1 AND t.date >= $2 AND t.date <= $3
            GROUP BY 1
            ORDER BY value DESC
            "#,
            table(kind)
        );

        let totals = sqlx::query_as::<_, CategoryTotal>(&sql)
            .bind(company_id)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await?;

        Ok(totals)
    }
}
