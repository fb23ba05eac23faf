// src/services/cashflow_service.rs

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::{error::AppError, period::YearMonth},
    db::FinanceRepository,
    models::{
        dashboard::{CashFlowResponse, DailyFlowEntry},
        finance::TransactionKind,
    },
};

#[derive(Clone)]
pub struct CashFlowService {
    finance_repo: FinanceRepository,
}

impl CashFlowService {
    pub fn new(finance_repo: FinanceRepository) -> Self {
        Self { finance_repo }
    }

    /// Fluxo de caixa do mês: totais e a evolução diária com saldo acumulado.
    pub async fn month_flow(
        &self,
        company_id: Uuid,
        month: YearMonth,
    ) -> Result<CashFlowResponse, AppError> {
        let revenues = self
            .finance_repo
            .daily_amounts(
                TransactionKind::Revenue,
                company_id,
                month.first_day(),
                month.last_day(),
            )
            .await?;

        let expenses = self
            .finance_repo
            .daily_amounts(
                TransactionKind::Expense,
                company_id,
                month.first_day(),
                month.last_day(),
            )
            .await?;

        let total_revenues: Decimal = revenues.iter().map(|(_, amount)| *amount).sum();
        let total_expenses: Decimal = expenses.iter().map(|(_, amount)| *amount).sum();

        Ok(CashFlowResponse {
            month: month.to_string(),
            total_revenues,
            total_expenses,
            balance: total_revenues - total_expenses,
            daily: build_daily_series(month, &revenues, &expenses),
        })
    }
}

// Série com todos os dias do mês (dias sem lançamento entram zerados) e o
// saldo acumulado desde o dia 1º.
fn build_daily_series(
    month: YearMonth,
    revenues: &[(NaiveDate, Decimal)],
    expenses: &[(NaiveDate, Decimal)],
) -> Vec<DailyFlowEntry> {
    let days_in_month = month.last_day().day() as usize;

    let mut per_day = vec![(Decimal::ZERO, Decimal::ZERO); days_in_month];

    for (date, amount) in revenues {
        per_day[(date.day() - 1) as usize].0 += *amount;
    }
    for (date, amount) in expenses {
        per_day[(date.day() - 1) as usize].1 += *amount;
    }

    let mut running_balance = Decimal::ZERO;
    per_day
        .into_iter()
        .enumerate()
        .map(|(index, (day_revenues, day_expenses))| {
            running_balance += day_revenues - day_expenses;
            DailyFlowEntry {
                date: format!("{:02}/{:02}", index + 1, month.month()),
                revenues: day_revenues,
                expenses: day_expenses,
                balance: running_balance,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, day).unwrap()
    }

    #[test]
    fn serie_cobre_todos_os_dias_do_mes() {
        let month: YearMonth = "2026-08".parse().unwrap();
        let series = build_daily_series(month, &[], &[]);

        assert_eq!(series.len(), 31);
        assert_eq!(series[0].date, "01/08");
        assert_eq!(series[30].date, "31/08");
        assert!(series.iter().all(|d| d.balance == Decimal::ZERO));
    }

    #[test]
    fn saldo_acumula_dia_a_dia() {
        let month: YearMonth = "2026-08".parse().unwrap();
        let revenues = vec![(date(1), Decimal::from(1000)), (date(3), Decimal::from(500))];
        let expenses = vec![(date(2), Decimal::from(300))];

        let series = build_daily_series(month, &revenues, &expenses);

        assert_eq!(series[0].balance, Decimal::from(1000));
        assert_eq!(series[1].balance, Decimal::from(700));
        assert_eq!(series[2].balance, Decimal::from(1200));
        // Dias seguintes mantêm o acumulado.
        assert_eq!(series[30].balance, Decimal::from(1200));
    }

    #[test]
    fn lancamentos_do_mesmo_dia_sao_somados() {
        let month: YearMonth = "2026-08".parse().unwrap();
        let revenues = vec![(date(10), Decimal::from(100)), (date(10), Decimal::from(150))];

        let series = build_daily_series(month, &revenues, &[]);

        assert_eq!(series[9].revenues, Decimal::from(250));
    }
}
