// src/handlers/cashflow.rs

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    common::{error::AppError, period::YearMonth},
    config::AppState,
    middleware::company::CompanyContext,
    models::dashboard::CashFlowResponse,
};

#[derive(Debug, Deserialize)]
pub struct CashFlowParams {
    // Mês no formato 'yyyy-MM'; ausente usa o mês corrente.
    pub month: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/cashflow",
    tag = "CashFlow",
    responses(
        (status = 200, description = "Fluxo de caixa do mês, dia a dia", body = CashFlowResponse),
        (status = 400, description = "Mês em formato inválido")
    ),
    params(
        ("x-company-id" = Uuid, Header, description = "ID da empresa"),
        ("month" = Option<String>, Query, description = "Mês (yyyy-MM), padrão: mês corrente")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_cashflow(
    State(app_state): State<AppState>,
    company: CompanyContext,
    Query(params): Query<CashFlowParams>,
) -> Result<Json<CashFlowResponse>, AppError> {
    let month = match params.month.as_deref() {
        Some(raw) => raw.parse::<YearMonth>().map_err(AppError::BadRequest)?,
        None => YearMonth::current(),
    };

    let flow = app_state
        .cashflow_service
        .month_flow(company.0, month)
        .await?;

    Ok(Json(flow))
}
