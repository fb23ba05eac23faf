// src/models/dashboard.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::finance::{TransactionKind, TransactionWithCategory};

// Cartões do topo do painel: totais do mês corrente.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[schema(example = "agosto 2026")]
    pub month_label: String,

    pub total_revenues: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
}

// Um ponto do gráfico de barras "últimos 6 meses".
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyChartEntry {
    #[schema(example = "ago")]
    pub month: String,

    pub revenues: Decimal,
    pub expenses: Decimal,
}

// Lançamento da lista "transações recentes" (receitas e despesas misturadas).
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecentTransaction {
    pub id: Uuid,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub kind: TransactionKind,
}

// Um dia do fluxo de caixa, com o saldo acumulado desde o dia 1.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyFlowEntry {
    #[schema(example = "05/08")]
    pub date: String,

    pub revenues: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowResponse {
    #[schema(example = "2026-08")]
    pub month: String,

    pub total_revenues: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
    pub daily: Vec<DailyFlowEntry>,
}

// Pendências em aberto, separadas por tipo.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PendenciesResponse {
    pub revenues: Vec<TransactionWithCategory>,
    pub expenses: Vec<TransactionWithCategory>,
}

// Indicadores da página de pendências.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PendencyStats {
    pub total: i64,
    pub overdue: i64,
    pub revenue_pending: i64,
    pub expense_pending: i64,
    pub total_revenue: Decimal,
    pub total_expense: Decimal,
}
