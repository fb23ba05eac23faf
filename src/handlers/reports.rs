// src/handlers/reports.rs

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::company::CompanyContext,
    models::reports::{ReportPeriod, ReportSummary},
    services::report_service::{export_filename, render_txt},
};

#[derive(Debug, Deserialize)]
pub struct ReportParams {
    // 'month' (padrão) ou 'year'.
    #[serde(default)]
    pub period: ReportPeriod,
}

// GET /api/reports
#[utoipa::path(
    get,
    path = "/api/reports",
    tag = "Reports",
    responses(
        (status = 200, description = "Resumo do período com quebras por categoria", body = ReportSummary)
    ),
    params(
        ("x-company-id" = Uuid, Header, description = "ID da empresa"),
        ("period" = Option<String>, Query, description = "month (padrão) ou year")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_report(
    State(app_state): State<AppState>,
    company: CompanyContext,
    Query(params): Query<ReportParams>,
) -> Result<Json<ReportSummary>, AppError> {
    let summary = app_state
        .report_service
        .build_summary(company.0, params.period)
        .await?;

    Ok(Json(summary))
}

// GET /api/reports/export/txt
#[utoipa::path(
    get,
    path = "/api/reports/export/txt",
    tag = "Reports",
    responses(
        (status = 200, description = "Relatório em texto puro, como anexo")
    ),
    params(
        ("x-company-id" = Uuid, Header, description = "ID da empresa"),
        ("period" = Option<String>, Query, description = "month (padrão) ou year")
    ),
    security(("api_jwt" = []))
)]
pub async fn export_report_txt(
    State(app_state): State<AppState>,
    company: CompanyContext,
    Query(params): Query<ReportParams>,
) -> Result<impl IntoResponse, AppError> {
    let summary = app_state
        .report_service
        .build_summary(company.0, params.period)
        .await?;

    let now = Utc::now();
    let content = render_txt(&summary, now);
    let filename = export_filename(&summary.company, now.date_naive(), "txt");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        content,
    ))
}

// GET /api/reports/export/pdf
#[utoipa::path(
    get,
    path = "/api/reports/export/pdf",
    tag = "Reports",
    responses(
        (status = 200, description = "Relatório em PDF, como anexo"),
        (status = 500, description = "Fontes do PDF ausentes no servidor")
    ),
    params(
        ("x-company-id" = Uuid, Header, description = "ID da empresa"),
        ("period" = Option<String>, Query, description = "month (padrão) ou year")
    ),
    security(("api_jwt" = []))
)]
pub async fn export_report_pdf(
    State(app_state): State<AppState>,
    company: CompanyContext,
    Query(params): Query<ReportParams>,
) -> Result<impl IntoResponse, AppError> {
    let summary = app_state
        .report_service
        .build_summary(company.0, params.period)
        .await?;

    let now = Utc::now();
    let bytes = app_state.report_service.render_pdf(&summary, now)?;
    let filename = export_filename(&summary.company, now.date_naive(), "pdf");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        bytes,
    ))
}
