// src/handlers/pendencies.rs

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{auth::AuthenticatedUser, company::CompanyContext},
    models::{
        dashboard::{PendenciesResponse, PendencyStats},
        finance::TransactionKind,
    },
};

fn parse_kind(raw: &str) -> Result<TransactionKind, AppError> {
    match raw {
        "revenue" => Ok(TransactionKind::Revenue),
        "expense" => Ok(TransactionKind::Expense),
        other => Err(AppError::BadRequest(format!(
            "Tipo de lançamento inválido: '{}'. Use 'revenue' ou 'expense'.",
            other
        ))),
    }
}

// GET /api/pendencies
#[utoipa::path(
    get,
    path = "/api/pendencies",
    tag = "Pendencies",
    responses(
        (status = 200, description = "Lançamentos pendentes, mais antigos primeiro", body = PendenciesResponse)
    ),
    params(("x-company-id" = Uuid, Header, description = "ID da empresa")),
    security(("api_jwt" = []))
)]
pub async fn list_pendencies(
    State(app_state): State<AppState>,
    company: CompanyContext,
) -> Result<Json<PendenciesResponse>, AppError> {
    let pendencies = app_state.pendency_service.list(company.0).await?;
    Ok(Json(pendencies))
}

// GET /api/pendencies/stats
#[utoipa::path(
    get,
    path = "/api/pendencies/stats",
    tag = "Pendencies",
    responses(
        (status = 200, description = "Indicadores das pendências", body = PendencyStats)
    ),
    params(("x-company-id" = Uuid, Header, description = "ID da empresa")),
    security(("api_jwt" = []))
)]
pub async fn get_pendency_stats(
    State(app_state): State<AppState>,
    company: CompanyContext,
) -> Result<Json<PendencyStats>, AppError> {
    let stats = app_state.pendency_service.stats(company.0).await?;
    Ok(Json(stats))
}

// POST /api/pendencies/{kind}/{id}/settle
// Receita pendente vira 'recebido'; despesa pendente vira 'pago'.
#[utoipa::path(
    post,
    path = "/api/pendencies/{kind}/{id}/settle",
    tag = "Pendencies",
    params(
        ("kind" = String, Path, description = "revenue ou expense"),
        ("id" = Uuid, Path, description = "ID do lançamento"),
        ("x-company-id" = Uuid, Header, description = "ID da empresa")
    ),
    responses(
        (status = 200, description = "Pendência baixada"),
        (status = 403, description = "Apenas administradores baixam pendências"),
        (status = 404, description = "Lançamento não encontrado ou já baixado")
    ),
    security(("api_jwt" = []))
)]
pub async fn settle_pendency(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    company: CompanyContext,
    Path((kind, id)): Path<(String, Uuid)>,
) -> Result<Json<serde_json::Value>, AppError> {
    if !user.0.can_edit() {
        return Err(AppError::Forbidden);
    }

    let kind = parse_kind(&kind)?;
    let new_status = app_state
        .finance_service
        .settle_transaction(kind, company.0, id)
        .await?;

    Ok(Json(json!({ "id": id, "status": new_status })))
}
