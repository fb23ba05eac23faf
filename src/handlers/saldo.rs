// src/handlers/saldo.rs

use axum::{extract::State, Json};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    common::{error::AppError, period::YearMonth},
    config::AppState,
    middleware::{auth::AuthenticatedUser, company::CompanyContext},
    models::finance::SaldoGenerationReport,
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSaldoPayload {
    // Mês inicial no formato 'yyyy-MM' (ex.: '2025-11').
    #[schema(example = "2025-11")]
    pub start_month: String,
}

// POST /api/saldo-anterior/generate
// Varre 12 meses a partir do mês inicial; o saldo de cada mês entra como
// "Saldo anterior" no dia 1º do mês seguinte, se ainda não existir.
#[utoipa::path(
    post,
    path = "/api/saldo-anterior/generate",
    tag = "SaldoAnterior",
    request_body = GenerateSaldoPayload,
    responses(
        (status = 200, description = "Resumo da geração", body = SaldoGenerationReport),
        (status = 400, description = "Mês inicial em formato inválido"),
        (status = 403, description = "Sem acesso à empresa")
    ),
    params(("x-company-id" = Uuid, Header, description = "ID da empresa")),
    security(("api_jwt" = []))
)]
pub async fn generate_saldo(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    company: CompanyContext,
    Json(payload): Json<GenerateSaldoPayload>,
) -> Result<Json<SaldoGenerationReport>, AppError> {
    let start_month = payload
        .start_month
        .parse::<YearMonth>()
        .map_err(AppError::BadRequest)?;

    let report = app_state
        .saldo_service
        .generate(company.0, start_month, Some(user.0.id))
        .await?;

    Ok(Json(report))
}
