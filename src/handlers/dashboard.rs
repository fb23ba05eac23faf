// src/handlers/dashboard.rs

use axum::{extract::State, Json};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::company::CompanyContext,
    models::dashboard::{DashboardSummary, MonthlyChartEntry, RecentTransaction},
};

// GET /api/dashboard/summary
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Totais do mês corrente", body = DashboardSummary),
        (status = 401, description = "Não autorizado"),
        (status = 403, description = "Sem acesso à empresa")
    ),
    params(("x-company-id" = Uuid, Header, description = "ID da empresa")),
    security(("api_jwt" = []))
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
    company: CompanyContext,
) -> Result<Json<DashboardSummary>, AppError> {
    let summary = app_state.dashboard_service.summary(company.0).await?;
    Ok(Json(summary))
}

// GET /api/dashboard/monthly-chart
#[utoipa::path(
    get,
    path = "/api/dashboard/monthly-chart",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Receitas x despesas dos últimos 6 meses", body = Vec<MonthlyChartEntry>)
    ),
    params(("x-company-id" = Uuid, Header, description = "ID da empresa")),
    security(("api_jwt" = []))
)]
pub async fn get_monthly_chart(
    State(app_state): State<AppState>,
    company: CompanyContext,
) -> Result<Json<Vec<MonthlyChartEntry>>, AppError> {
    let chart = app_state.dashboard_service.monthly_chart(company.0).await?;
    Ok(Json(chart))
}

// GET /api/dashboard/recent
#[utoipa::path(
    get,
    path = "/api/dashboard/recent",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Últimos lançamentos (receitas e despesas mescladas)", body = Vec<RecentTransaction>)
    ),
    params(("x-company-id" = Uuid, Header, description = "ID da empresa")),
    security(("api_jwt" = []))
)]
pub async fn get_recent_transactions(
    State(app_state): State<AppState>,
    company: CompanyContext,
) -> Result<Json<Vec<RecentTransaction>>, AppError> {
    let recent = app_state
        .dashboard_service
        .recent_transactions(company.0)
        .await?;
    Ok(Json(recent))
}
