// src/models/reports.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::dashboard::MonthlyChartEntry;

// Período do relatório: mês corrente ou ano corrente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Month,
    Year,
}

impl Default for ReportPeriod {
    fn default() -> Self {
        Self::Month
    }
}

// Fatia dos gráficos de pizza "por categoria".
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    #[schema(example = "Fornecedores")]
    pub name: String,

    pub value: Decimal,
}

// O resumo completo da página de relatórios; também alimenta a exportação
// em PDF/TXT.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    #[schema(example = "Relatório Financeiro")]
    pub title: String,

    #[schema(example = "Funerária Central")]
    pub company: String,

    #[schema(example = "agosto 2026")]
    pub period_label: String,

    pub total_revenues: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,

    pub revenues_by_category: Vec<CategoryTotal>,
    pub expenses_by_category: Vec<CategoryTotal>,
    pub monthly_comparison: Vec<MonthlyChartEntry>,
}
