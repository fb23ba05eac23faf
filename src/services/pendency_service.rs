// src/services/pendency_service.rs

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::FinanceRepository,
    models::{
        dashboard::{PendenciesResponse, PendencyStats},
        finance::{TransactionKind, TransactionWithCategory},
    },
};

#[derive(Clone)]
pub struct PendencyService {
    finance_repo: FinanceRepository,
}

impl PendencyService {
    pub fn new(finance_repo: FinanceRepository) -> Self {
        Self { finance_repo }
    }

    pub async fn list(&self, company_id: Uuid) -> Result<PendenciesResponse, AppError> {
        let revenues = self
            .finance_repo
            .list_pending(TransactionKind::Revenue, company_id)
            .await?;
        let expenses = self
            .finance_repo
            .list_pending(TransactionKind::Expense, company_id)
            .await?;

        Ok(PendenciesResponse { revenues, expenses })
    }

    pub async fn stats(&self, company_id: Uuid) -> Result<PendencyStats, AppError> {
        let revenues = self
            .finance_repo
            .list_pending(TransactionKind::Revenue, company_id)
            .await?;
        let expenses = self
            .finance_repo
            .list_pending(TransactionKind::Expense, company_id)
            .await?;

        let today = Utc::now().date_naive();
        Ok(compute_stats(
            &to_pairs(&revenues),
            &to_pairs(&expenses),
            today,
        ))
    }
}

fn to_pairs(rows: &[TransactionWithCategory]) -> Vec<(Decimal, NaiveDate)> {
    rows.iter().map(|row| (row.amount, row.date)).collect()
}

// Indicadores sobre as pendências: vencida é a pendência datada antes de hoje.
fn compute_stats(
    revenues: &[(Decimal, NaiveDate)],
    expenses: &[(Decimal, NaiveDate)],
    today: NaiveDate,
) -> PendencyStats {
    let overdue = revenues
        .iter()
        .chain(expenses.iter())
        .filter(|(_, date)| *date < today)
        .count() as i64;

    PendencyStats {
        total: (revenues.len() + expenses.len()) as i64,
        overdue,
        revenue_pending: revenues.len() as i64,
        expense_pending: expenses.len() as i64,
        total_revenue: revenues.iter().map(|(amount, _)| *amount).sum(),
        total_expense: expenses.iter().map(|(amount, _)| *amount).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(amount: i64, day: u32) -> (Decimal, NaiveDate) {
        (
            Decimal::from(amount),
            NaiveDate::from_ymd_opt(2026, 8, day).unwrap(),
        )
    }

    #[test]
    fn conta_totais_e_vencidas() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        let revenues = vec![pair(100, 5), pair(200, 15)];
        let expenses = vec![pair(50, 9), pair(75, 10)];

        let stats = compute_stats(&revenues, &expenses, today);

        assert_eq!(stats.total, 4);
        // Dia 5 e dia 9 estão antes de hoje; dia 10 (hoje) não conta.
        assert_eq!(stats.overdue, 2);
        assert_eq!(stats.revenue_pending, 2);
        assert_eq!(stats.expense_pending, 2);
        assert_eq!(stats.total_revenue, Decimal::from(300));
        assert_eq!(stats.total_expense, Decimal::from(125));
    }

    #[test]
    fn sem_pendencias_tudo_zerado() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();
        let stats = compute_stats(&[], &[], today);

        assert_eq!(stats.total, 0);
        assert_eq!(stats.overdue, 0);
        assert_eq!(stats.total_revenue, Decimal::ZERO);
        assert_eq!(stats.total_expense, Decimal::ZERO);
    }
}
