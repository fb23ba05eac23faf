// src/services/dashboard_service.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::{error::AppError, period::YearMonth},
    db::{DashboardRepository, FinanceRepository},
    models::{
        dashboard::{DashboardSummary, MonthlyChartEntry, RecentTransaction},
        finance::TransactionKind,
    },
};

// Quantos lançamentos de cada tabela entram na lista de recentes,
// e o tamanho final da lista mesclada.
const RECENT_PER_KIND: i64 = 5;
const RECENT_LIMIT: usize = 8;

const CHART_MONTHS: u32 = 6;

#[derive(Clone)]
pub struct DashboardService {
    finance_repo: FinanceRepository,
    dashboard_repo: DashboardRepository,
}

impl DashboardService {
    pub fn new(finance_repo: FinanceRepository, dashboard_repo: DashboardRepository) -> Self {
        Self {
            finance_repo,
            dashboard_repo,
        }
    }

    // Cartões do mês corrente.
    pub async fn summary(&self, company_id: Uuid) -> Result<DashboardSummary, AppError> {
        let month = YearMonth::current();

        let total_revenues = self
            .dashboard_repo
            .sum_in_range(
                TransactionKind::Revenue,
                company_id,
                month.first_day(),
                month.last_day(),
            )
            .await?;

        let total_expenses = self
            .dashboard_repo
            .sum_in_range(
                TransactionKind::Expense,
                company_id,
                month.first_day(),
                month.last_day(),
            )
            .await?;

        Ok(DashboardSummary {
            month_label: month.label_pt(),
            total_revenues,
            total_expenses,
            balance: total_revenues - total_expenses,
        })
    }

    pub async fn recent_transactions(
        &self,
        company_id: Uuid,
    ) -> Result<Vec<RecentTransaction>, AppError> {
        let revenues = self
            .finance_repo
            .recent(TransactionKind::Revenue, company_id, RECENT_PER_KIND)
            .await?;

        let expenses = self
            .finance_repo
            .recent(TransactionKind::Expense, company_id, RECENT_PER_KIND)
            .await?;

        Ok(merge_recent(revenues, expenses, RECENT_LIMIT))
    }

    // Série "últimos 6 meses" do gráfico de barras.
    pub async fn monthly_chart(
        &self,
        company_id: Uuid,
    ) -> Result<Vec<MonthlyChartEntry>, AppError> {
        let current = YearMonth::current();
        let mut entries = Vec::with_capacity(CHART_MONTHS as usize);

        for i in (0..CHART_MONTHS).rev() {
            let month = current.minus_months(i);

            let revenues = self
                .dashboard_repo
                .sum_in_range(
                    TransactionKind::Revenue,
                    company_id,
                    month.first_day(),
                    month.last_day(),
                )
                .await?;

            let expenses = self
                .dashboard_repo
                .sum_in_range(
                    TransactionKind::Expense,
                    company_id,
                    month.first_day(),
                    month.last_day(),
                )
                .await?;

            entries.push(MonthlyChartEntry {
                month: month.abbr_pt().to_string(),
                revenues,
                expenses,
            });
        }

        Ok(entries)
    }
}

type RecentRow = (Uuid, String, Decimal, NaiveDate);

// Mescla receitas e despesas recentes, mais novas primeiro, cortando em `limit`.
fn merge_recent(
    revenues: Vec<RecentRow>,
    expenses: Vec<RecentRow>,
    limit: usize,
) -> Vec<RecentTransaction> {
    let mut combined: Vec<RecentTransaction> = revenues
        .into_iter()
        .map(|(id, description, amount, date)| RecentTransaction {
            id,
            description,
            amount,
            date,
            kind: TransactionKind::Revenue,
        })
        .chain(
            expenses
                .into_iter()
                .map(|(id, description, amount, date)| RecentTransaction {
                    id,
                    description,
                    amount,
                    date,
                    kind: TransactionKind::Expense,
                }),
        )
        .collect();

    combined.sort_by(|a, b| b.date.cmp(&a.date));
    combined.truncate(limit);
    combined
}
